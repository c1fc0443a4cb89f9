use serde::{Deserialize, Serialize};

/// Which kind of operations a category is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryType {
    Expense,
    Income,
    /// Usable for both incomes and expenses (e.g., gifts)
    Universal,
}

impl CategoryType {
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryType::Expense => "Расход",
            CategoryType::Income => "Доход",
            CategoryType::Universal => "Универсальная",
        }
    }
}

impl std::fmt::Display for CategoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryType::Expense => write!(f, "Expense"),
            CategoryType::Income => write!(f, "Income"),
            CategoryType::Universal => write!(f, "Universal"),
        }
    }
}

/// A category card as shown on the categories screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,

    /// Display name, also used as the operation category label
    pub name: String,

    /// Icon glyph name (e.g., "SHOPPING_CART")
    pub icon: String,

    pub category_type: CategoryType,

    /// Number of operations recorded under this category
    pub operations_count: u32,

    /// Total money moved through this category
    pub total_amount: f64,

    /// Accent color as a hex string (e.g., "#3B82F6")
    pub color: String,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        category_type: CategoryType,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            category_type,
            operations_count: 0,
            total_amount: 0.0,
            color: color.into(),
        }
    }

    /// Builder-style helper to set usage statistics.
    #[must_use]
    pub fn with_stats(mut self, operations_count: u32, total_amount: f64) -> Self {
        self.operations_count = operations_count;
        self.total_amount = total_amount;
        self
    }
}
