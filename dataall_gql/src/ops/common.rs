//! Shared filter infrastructure: the [`Paged`] trait and [`ListFilter`] core.

use serde::Serialize;

/// Fields shared by every list filter: search term and pagination window.
///
/// Owned by the requesting screen, mutated on user input, and passed by
/// value into each builder call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilter {
    /// Free-text search term. Empty matches everything.
    pub term: String,
    /// Requested page, 1-indexed.
    pub page: i64,
    pub page_size: i64,
}

impl Default for ListFilter {
    fn default() -> ListFilter {
        ListFilter {
            term: String::new(),
            page: 1,
            page_size: 10,
        }
    }
}

/// Trait implemented by all list filters. Provides the shared builder
/// methods for the search term and pagination window.
pub trait Paged {
    /// Returns the common filter fields.
    fn common(&self) -> &ListFilter;

    /// Returns a mutable reference to the common filter fields.
    fn common_mut(&mut self) -> &mut ListFilter;

    /// Sets the free-text search term.
    fn with_term(mut self, term: &str) -> Self
    where
        Self: Sized,
    {
        self.common_mut().term = term.to_string();
        self
    }

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.common_mut().page = page;
        self
    }

    /// Sets the number of results per page.
    fn with_page_size(mut self, page_size: i64) -> Self
    where
        Self: Sized,
    {
        self.common_mut().page_size = page_size;
        self
    }
}
