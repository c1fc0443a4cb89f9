use std::num::NonZeroUsize;

use crate::models::operation::Operation;
use crate::models::query::{OperationFilter, OperationPage, PageRequest};

/// Filters and paginates the operations list for the operations table.
///
/// Pure business logic over a borrowed slice: nothing is mutated, nothing
/// can fail. Results keep the order of the source list.
pub struct QueryService;

impl QueryService {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline: filter, count pages, slice out the requested page.
    ///
    /// A page past the end yields an empty `items` list, not an error.
    pub fn query<'a>(
        &self,
        operations: &'a [Operation],
        filter: &OperationFilter,
        request: PageRequest,
    ) -> OperationPage<'a> {
        let matched = self.filter(operations, filter);
        let total_matches = matched.len();
        let total_pages = Self::total_pages(total_matches, request.page_size);
        let page = request.page.max(1);
        let page_size = request.page_size.get();

        let from = (page - 1).saturating_mul(page_size);
        let items: Vec<&Operation> = if from < total_matches {
            let to = from.saturating_add(page_size).min(total_matches);
            matched[from..to].to_vec()
        } else {
            Vec::new()
        };

        tracing::debug!(
            search = %filter.search_text,
            type_filter = ?filter.type_filter,
            category = filter.category_filter.label(),
            page,
            total_pages,
            total_matches,
            returned = items.len(),
            "operations query"
        );

        OperationPage {
            items,
            page,
            total_pages,
            total_matches,
        }
    }

    /// Every operation passing all filter predicates, in source order.
    pub fn filter<'a>(
        &self,
        operations: &'a [Operation],
        filter: &OperationFilter,
    ) -> Vec<&'a Operation> {
        if filter.is_empty() {
            return operations.iter().collect();
        }
        let matcher = filter.matcher();
        operations.iter().filter(|op| matcher.matches(op)).collect()
    }

    /// `ceil(count / page_size)`, but never less than 1.
    pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
        count.div_ceil(page_size.get()).max(1)
    }
}

impl Default for QueryService {
    fn default() -> Self {
        Self::new()
    }
}
