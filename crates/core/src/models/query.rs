use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use super::operation::{Operation, OperationType};

/// Label of the "no category filter" entry in the category dropdown.
pub const ALL_CATEGORIES_LABEL: &str = "Все категории";

/// Restricts operations by direction of money flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    All,
    IncomeOnly,
    ExpenseOnly,
}

impl TypeFilter {
    #[must_use]
    pub fn matches(&self, operation_type: OperationType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::IncomeOnly => operation_type == OperationType::Income,
            TypeFilter::ExpenseOnly => operation_type == OperationType::Expense,
        }
    }

    /// Dropdown label.
    pub fn label(&self) -> &'static str {
        match self {
            TypeFilter::All => "Все операции",
            TypeFilter::IncomeOnly => "Доходы",
            TypeFilter::ExpenseOnly => "Расходы",
        }
    }

    /// All variants in dropdown order.
    pub fn options() -> [TypeFilter; 3] {
        [TypeFilter::All, TypeFilter::IncomeOnly, TypeFilter::ExpenseOnly]
    }
}

/// Restricts operations to one exact category name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Exact(String),
}

impl CategoryFilter {
    /// Map a dropdown label back to a filter; the sentinel label means `All`.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Exact(label.to_string())
        }
    }

    /// Exact, case-sensitive comparison.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Exact(name) => name == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Exact(name) => name,
        }
    }
}

/// The full set of predicates applied to the operations list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationFilter {
    /// Case-insensitive substring, matched against comment and category.
    /// Empty matches everything.
    pub search_text: String,
    pub type_filter: TypeFilter,
    pub category_filter: CategoryFilter,
}

impl OperationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    #[must_use]
    pub fn with_type(mut self, type_filter: TypeFilter) -> Self {
        self.type_filter = type_filter;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category_filter: CategoryFilter) -> Self {
        self.category_filter = category_filter;
        self
    }

    /// `true` when no predicate restricts anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty()
            && self.type_filter == TypeFilter::All
            && self.category_filter == CategoryFilter::All
    }

    /// Evaluate all three predicates against one operation.
    ///
    /// Prefer `matcher()` when testing many operations: it lowercases the
    /// search text once.
    #[must_use]
    pub fn matches(&self, operation: &Operation) -> bool {
        self.matcher().matches(operation)
    }

    pub fn matcher(&self) -> FilterMatcher<'_> {
        FilterMatcher {
            needle: self.search_text.to_lowercase(),
            filter: self,
        }
    }
}

/// An `OperationFilter` with its search text already lowercased.
#[derive(Debug)]
pub struct FilterMatcher<'a> {
    needle: String,
    filter: &'a OperationFilter,
}

impl FilterMatcher<'_> {
    #[must_use]
    pub fn matches(&self, operation: &Operation) -> bool {
        let matches_search = self.needle.is_empty()
            || operation.comment.to_lowercase().contains(&self.needle)
            || operation.category.to_lowercase().contains(&self.needle);

        matches_search
            && self.filter.type_filter.matches(operation.operation_type)
            && self.filter.category_filter.matches(&operation.category)
    }
}

/// Which window of the filtered list to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page index. Page 0 is treated as page 1.
    pub page: usize,
    pub page_size: NonZeroUsize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: NonZeroUsize) -> Self {
        Self { page, page_size }
    }

    pub fn first(page_size: NonZeroUsize) -> Self {
        Self::new(1, page_size)
    }
}

/// One page of query results, borrowing from the source list.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationPage<'a> {
    /// Operations on this page, in source order
    pub items: Vec<&'a Operation>,

    /// The page that was requested (1-based)
    pub page: usize,

    /// Never less than 1, even for an empty result
    pub total_pages: usize,

    /// Number of operations that passed the filter, across all pages
    pub total_matches: usize,
}

impl OperationPage<'_> {
    /// Page indicator text, e.g. "1 / 2".
    pub fn label(&self) -> String {
        format!("{} / {}", self.page, self.total_pages)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Owned copies of the page items.
    pub fn to_owned_items(&self) -> Vec<Operation> {
        self.items.iter().map(|op| (*op).clone()).collect()
    }
}
