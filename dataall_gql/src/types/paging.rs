use serde::{Deserialize, Serialize};

/// Paged list envelope returned by every list operation.
///
/// Replaced wholesale on each successful fetch, never merged or mutated in
/// place. `page` is 1-indexed; `pages` is 0 when `count` is 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    /// Total items matching the filter, across all pages.
    pub count: i64,
    /// Current page, 1-indexed.
    pub page: i64,
    /// Total page count.
    pub pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
    /// Items for the current page, in server order.
    pub nodes: Vec<T>,
}

impl<T> PagedResponse<T> {
    /// The envelope a screen holds before its first fetch resolves.
    pub fn empty() -> Self {
        Self {
            count: 0,
            page: 1,
            pages: 0,
            has_next: false,
            has_previous: false,
            nodes: Vec::new(),
        }
    }
}

impl<T> Default for PagedResponse<T> {
    fn default() -> Self {
        Self::empty()
    }
}
