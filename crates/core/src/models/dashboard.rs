use serde::{Deserialize, Serialize};

/// Headline figures for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Sum of all income amounts
    pub income: f64,

    /// Sum of all expense amounts (positive number)
    pub expenses: f64,

    /// income - expenses
    pub balance: f64,

    /// Money kept: the balance, or zero when expenses exceed income
    pub savings: f64,

    /// Number of operations the summary was computed over
    pub operations_count: usize,
}

/// Share of total expenses spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,

    /// Total expense amount in this category
    pub amount: f64,

    /// amount / total expenses * 100
    pub percent: f64,
}

/// Income and expenses of one calendar month, for the dashboard chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub year: i32,

    /// 1-based month number
    pub month: u32,

    pub income: f64,

    pub expenses: f64,
}

impl MonthlyTotal {
    /// Short month name shown on the chart axis, e.g. "Янв".
    pub fn label(&self) -> &'static str {
        const MONTHS: [&str; 12] = [
            "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
        ];
        self.month
            .checked_sub(1)
            .and_then(|idx| MONTHS.get(idx as usize))
            .copied()
            .unwrap_or("")
    }

    #[must_use]
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}
