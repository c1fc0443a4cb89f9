use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a debt relative to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebtType {
    /// The user owes money to someone
    Borrowed,
    /// Someone owes money to the user
    Lent,
}

impl DebtType {
    pub fn display_name(&self) -> &'static str {
        match self {
            DebtType::Borrowed => "Я должен",
            DebtType::Lent => "Мне должны",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebtStatus {
    Active,
    Paid,
}

/// A personal loan between the user and another person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: String,
    pub debt_type: DebtType,

    /// The other party
    pub person: String,

    pub amount: f64,

    /// When the money changed hands
    pub issued_on: NaiveDate,

    /// When it is due back
    pub due_on: NaiveDate,

    pub status: DebtStatus,

    #[serde(default)]
    pub comment: String,
}

impl Debt {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        debt_type: DebtType,
        person: impl Into<String>,
        amount: f64,
        issued_on: NaiveDate,
        due_on: NaiveDate,
        status: DebtStatus,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            debt_type,
            person: person.into(),
            amount,
            issued_on,
            due_on,
            status,
            comment: comment.into(),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == DebtStatus::Active
    }

    /// Active and past its due date as of `today`.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_active() && self.due_on < today
    }
}
