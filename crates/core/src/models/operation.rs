use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Direction of money flow for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationType {
    /// Money coming in (salary, freelance, gifts received)
    Income,
    /// Money going out (groceries, transport, bills)
    Expense,
}

impl OperationType {
    /// Label shown in the operations table.
    pub fn display_name(&self) -> &'static str {
        match self {
            OperationType::Income => "Доход",
            OperationType::Expense => "Расход",
        }
    }

    /// Apply the sign implied by the type to a non-negative amount.
    pub fn signed(&self, amount: f64) -> f64 {
        match self {
            OperationType::Income => amount,
            OperationType::Expense => -amount,
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationType::Income => write!(f, "Income"),
            OperationType::Expense => write!(f, "Expense"),
        }
    }
}

/// Ordered set of free-text labels attached to an operation.
///
/// Insertion order is preserved; inserting a label that is already present
/// is silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tags(Vec<String>);

impl Tags {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a tag. Returns `false` if it was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.0.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    /// Remove a tag. Returns `true` if it was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        match self.0.iter().position(|t| t == tag) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Tags::new();
        for tag in iter {
            tags.insert(tag);
        }
        tags
    }
}

// Duplicates in serialized input are dropped, keeping the first occurrence.
impl<'de> Deserialize<'de> for Tags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

/// A single income or expense record in the operations log.
///
/// **Important**: `amount` is always non-negative. Whether it adds to or
/// subtracts from the balance is decided by `operation_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Unique identifier
    pub id: String,

    /// Calendar date (no time component)
    pub date: NaiveDate,

    /// Income or Expense
    pub operation_type: OperationType,

    /// Category label (e.g., "Продукты", "Транспорт")
    pub category: String,

    /// Free-text comment shown in the table
    pub comment: String,

    /// Amount of money (always non-negative)
    pub amount: f64,

    #[serde(default)]
    pub tags: Tags,
}

impl Operation {
    /// Create an operation with a freshly generated id.
    pub fn new(
        date: NaiveDate,
        operation_type: OperationType,
        category: impl Into<String>,
        comment: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            date,
            operation_type,
            category,
            comment,
            amount,
        )
    }

    /// Create an operation with a caller-supplied id.
    pub fn with_id(
        id: impl Into<String>,
        date: NaiveDate,
        operation_type: OperationType,
        category: impl Into<String>,
        comment: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            operation_type,
            category: category.into(),
            comment: comment.into(),
            amount,
            tags: Tags::new(),
        }
    }

    /// Builder-style helper to attach tags.
    #[must_use]
    pub fn tagged<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            self.tags.insert(tag);
        }
        self
    }

    /// Amount with sign applied: positive for income, negative for expense.
    #[must_use]
    pub fn signed_amount(&self) -> f64 {
        self.operation_type.signed(self.amount)
    }
}
