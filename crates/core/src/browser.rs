use std::num::NonZeroUsize;

use crate::models::operation::Operation;
use crate::models::query::{
    CategoryFilter, OperationFilter, OperationPage, PageRequest, TypeFilter,
};
use crate::services::query_service::QueryService;

/// Filter and page state of the operations table, owned by the caller.
///
/// Navigation rules:
/// - `previous_page` on page 1 does nothing
/// - `next_page` on the last page does nothing
/// - any filter setter jumps back to page 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationsBrowser {
    filter: OperationFilter,
    page: usize,
    page_size: NonZeroUsize,
}

impl OperationsBrowser {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            filter: OperationFilter::default(),
            page: 1,
            page_size,
        }
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    #[must_use]
    pub fn filter(&self) -> &OperationFilter {
        &self.filter
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }

    // ── Filters ─────────────────────────────────────────────────────

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
        self.page = 1;
    }

    pub fn set_type_filter(&mut self, type_filter: TypeFilter) {
        self.filter.type_filter = type_filter;
        self.page = 1;
    }

    pub fn set_category_filter(&mut self, category_filter: CategoryFilter) {
        self.filter.category_filter = category_filter;
        self.page = 1;
    }

    /// Replace all predicates at once.
    pub fn set_filter(&mut self, filter: OperationFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.set_filter(OperationFilter::default());
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Move forward one page unless already on `total_pages`.
    /// Returns `true` if the page changed.
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.page < total_pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Move back one page unless already on page 1.
    /// Returns `true` if the page changed.
    pub fn previous_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    // ── Evaluation ──────────────────────────────────────────────────

    /// Run the query for the current state against `operations`.
    pub fn current<'a>(&self, operations: &'a [Operation]) -> OperationPage<'a> {
        QueryService::new().query(operations, &self.filter, self.request())
    }

    /// Page indicator for the current state, e.g. "2 / 3".
    pub fn page_label(&self, operations: &[Operation]) -> String {
        self.current(operations).label()
    }

    /// Advance using the page count computed from `operations`.
    pub fn next_page_in(&mut self, operations: &[Operation]) -> bool {
        let matched = QueryService::new().filter(operations, &self.filter).len();
        self.next_page(QueryService::total_pages(matched, self.page_size))
    }
}
