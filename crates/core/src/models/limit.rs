use serde::{Deserialize, Serialize};

/// Usage percent at which a limit starts warning.
pub const NEAR_LIMIT_PERCENT: f64 = 80.0;

/// Usage percent above which a limit counts as exceeded (strictly greater).
pub const EXCEEDED_PERCENT: f64 = 100.0;

/// Traffic-light state of a spending limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitStatus {
    Ok,
    NearLimit,
    Exceeded,
}

impl std::fmt::Display for LimitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LimitStatus::Ok => write!(f, "Ok"),
            LimitStatus::NearLimit => write!(f, "Near limit"),
            LimitStatus::Exceeded => write!(f, "Exceeded"),
        }
    }
}

/// Monthly spending cap for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingLimit {
    pub id: String,

    /// Category the limit applies to
    pub category: String,

    /// Human-readable period (e.g., "Февраль 2026")
    pub month_label: String,

    /// Amount already spent in the period
    pub spent: f64,

    /// The cap itself
    pub limit_amount: f64,
}

impl SpendingLimit {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        month_label: impl Into<String>,
        spent: f64,
        limit_amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            month_label: month_label.into(),
            spent,
            limit_amount,
        }
    }

    /// Money left before the cap. Negative once exceeded.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.limit_amount - self.spent
    }

    /// Spent as a percentage of the cap. A non-positive cap reports 0.
    #[must_use]
    pub fn usage_percent(&self) -> f64 {
        if self.limit_amount <= 0.0 {
            return 0.0;
        }
        (self.spent / self.limit_amount) * 100.0
    }

    /// Fill ratio for a progress bar, clamped to [0, 1].
    #[must_use]
    pub fn progress(&self) -> f64 {
        (self.usage_percent() / 100.0).clamp(0.0, 1.0)
    }

    /// Exactly 100% is still within the limit.
    #[must_use]
    pub fn is_exceeded(&self) -> bool {
        self.usage_percent() > EXCEEDED_PERCENT
    }

    #[must_use]
    pub fn is_near_limit(&self) -> bool {
        !self.is_exceeded() && self.usage_percent() >= NEAR_LIMIT_PERCENT
    }

    #[must_use]
    pub fn status(&self) -> LimitStatus {
        if self.is_exceeded() {
            LimitStatus::Exceeded
        } else if self.is_near_limit() {
            LimitStatus::NearLimit
        } else {
            LimitStatus::Ok
        }
    }
}
