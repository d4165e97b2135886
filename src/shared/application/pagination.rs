/// Pagination support for film listings
///
/// Standard page model used by every listing operation
use serde::{Deserialize, Serialize};

/// One page of results.
///
/// `page` is 0-based. `total_pages` is never below 1, even for an empty
/// result set. Item order is operation-defined: request order for search,
/// rank order for the top-rated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32, total_pages: u32) -> Self {
        Self {
            items,
            page,
            total_pages,
        }
    }

    /// Slice an already ranked sequence into one page.
    ///
    /// `total_pages = ceil(total / page_size)`, floored at 1. A zero page
    /// size yields an empty page rather than an error; nothing fits on it.
    pub fn slice(ranked: Vec<T>, page: u32, page_size: u32) -> Self {
        if page_size == 0 {
            return Self::new(Vec::new(), page, 1);
        }
        let size = page_size as usize;
        let total_pages = (ranked.len().div_ceil(size)).max(1) as u32;
        let start = (page as usize).saturating_mul(size);
        let items = ranked.into_iter().skip(start).take(size).collect();
        Self::new(items, page, total_pages)
    }
}
