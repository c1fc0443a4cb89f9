use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalType {
    /// Saving towards a target
    Goal,
    /// Paying back what is owed
    Debt,
}

impl GoalType {
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalType::Goal => "Цель",
            GoalType::Debt => "Долг",
        }
    }
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalType::Goal => write!(f, "Goal"),
            GoalType::Debt => write!(f, "Debt"),
        }
    }
}

/// A savings goal or a debt being repaid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub goal_type: GoalType,

    /// Amount to reach (or total debt)
    pub target_amount: f64,

    /// Amount collected (or repaid) so far
    pub current_amount: f64,

    pub deadline: NaiveDate,
    pub color: String,
}

impl Goal {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        goal_type: GoalType,
        target_amount: f64,
        current_amount: f64,
        deadline: NaiveDate,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            goal_type,
            target_amount,
            current_amount,
            deadline,
            color: color.into(),
        }
    }

    /// Completion in percent. Not clamped: overshooting reports > 100.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.target_amount == 0.0 {
            return 0.0;
        }
        (self.current_amount / self.target_amount) * 100.0
    }

    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.target_amount - self.current_amount
    }

    /// Days from `today` until the deadline. Negative when overdue.
    #[must_use]
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }
}
