use serde::{Deserialize, Serialize};

pub use pushkind_common::pagination::{DEFAULT_ITEMS_PER_PAGE, Pagination};

/// Upper bound applied to caller supplied page sizes.
pub const MAX_ITEMS_PER_PAGE: usize = 100;

/// Raw `page`/`limit` query parameters as sent by API clients.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PageParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl PageParams {
    /// Clamp the raw parameters into a usable [`Pagination`].
    pub fn normalize(&self) -> Pagination {
        let page = match self.page {
            Some(page) if page > 0 => page,
            _ => 1,
        };
        let per_page = match self.limit {
            Some(0) | None => DEFAULT_ITEMS_PER_PAGE,
            Some(limit) => limit.min(MAX_ITEMS_PER_PAGE),
        };
        Pagination { page, per_page }
    }
}

/// One page of results together with the numbers needed to render a pager.
///
/// Unlike the shared `Paginated` it also carries the page size and total row
/// count, both of which go into the API `meta` block.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, pagination: &Pagination, total: usize) -> Self {
        Self {
            items,
            page: pagination.page,
            limit: pagination.per_page,
            total,
            pages: total.div_ceil(pagination.per_page.max(1)),
        }
    }
}
