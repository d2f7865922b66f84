//! List-screen state: filter, paged envelope, and fetch lifecycle.

use dataall_gql::types::PagedResponse;
use dataall_gql::Paged;

/// Lifecycle of a paged list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    /// Nothing fetched yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch replaced the envelope.
    Loaded,
    /// The last fetch failed; the previous envelope is still shown.
    Errored,
}

/// Snapshot handed to the network layer for one fetch. The filter travels by
/// value; the generation ties the eventual response back to this fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetch<F> {
    pub generation: u64,
    pub filter: F,
}

/// State machine behind every paged list screen.
///
/// The envelope is replaced wholesale on each successful fetch. A response
/// whose generation is no longer current was superseded by a newer fetch and
/// is discarded, so two racing fetches can no longer finish out of order.
pub struct ListState<T, F> {
    filter: F,
    items: PagedResponse<T>,
    phase: ListPhase,
    generation: u64,
}

impl<T, F: Paged + Clone> ListState<T, F> {
    pub fn new(filter: F) -> Self {
        Self {
            filter,
            items: PagedResponse::empty(),
            phase: ListPhase::Idle,
            generation: 0,
        }
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    /// The current envelope. Empty until the first fetch resolves.
    pub fn items(&self) -> &PagedResponse<T> {
        &self.items
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Begins a fetch for the current filter (mount or explicit refresh).
    pub fn begin(&mut self) -> Fetch<F> {
        self.generation += 1;
        self.phase = ListPhase::Loading;
        Fetch {
            generation: self.generation,
            filter: self.filter.clone(),
        }
    }

    /// Requests a page change. Returns a fetch only when the target page is
    /// in range and differs from the current one; anything else is a no-op,
    /// so redundant and out-of-range requests never hit the network.
    pub fn request_page(&mut self, requested: i64) -> Option<Fetch<F>> {
        if requested < 1 || requested > self.items.pages || requested == self.items.page {
            return None;
        }
        self.filter.common_mut().page = requested;
        Some(self.begin())
    }

    /// Applies a new search term and begins a fetch from page 1.
    pub fn submit_search(&mut self, term: &str) -> Fetch<F> {
        self.filter.common_mut().term = term.to_string();
        self.filter.common_mut().page = 1;
        self.begin()
    }

    /// Installs a fetched envelope. Returns false when the fetch was
    /// superseded, in which case nothing changes.
    pub fn apply(&mut self, generation: u64, items: PagedResponse<T>) -> bool {
        if generation != self.generation {
            tracing::debug!("discarding superseded response (gen {})", generation);
            return false;
        }
        self.items = items;
        self.phase = ListPhase::Loaded;
        true
    }

    /// Records a failed fetch. The previous envelope stays in place. Returns
    /// false when the fetch was superseded.
    pub fn fail(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!("discarding superseded failure (gen {})", generation);
            return false;
        }
        self.phase = ListPhase::Errored;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataall_gql::ops::dataset::DatasetFilter;
    use dataall_gql::types::Dataset;

    fn envelope(count: i64, page: i64, pages: i64, nodes: usize) -> PagedResponse<Dataset> {
        PagedResponse {
            count,
            page,
            pages,
            has_next: page < pages,
            has_previous: page > 1,
            nodes: (0..nodes)
                .map(|i| Dataset {
                    dataset_uri: format!("ds-{:03}", i),
                    label: format!("dataset {}", i),
                    owner: "alice".to_string(),
                    region: None,
                    saml_admin_group_name: None,
                    glue_database_name: None,
                    s3_bucket_name: None,
                    description: None,
                    created: None,
                })
                .collect(),
        }
    }

    fn loaded_state() -> ListState<Dataset, DatasetFilter> {
        let mut state = ListState::new(DatasetFilter::default());
        let fetch = state.begin();
        assert!(state.apply(fetch.generation, envelope(25, 1, 3, 10)));
        state
    }

    #[test]
    fn starts_idle_and_empty() {
        let state: ListState<Dataset, DatasetFilter> = ListState::new(DatasetFilter::default());
        assert_eq!(state.phase(), ListPhase::Idle);
        assert_eq!(state.items().count, 0);
        assert_eq!(state.items().pages, 0);
    }

    #[test]
    fn begin_marks_loading_and_snapshots_filter() {
        let mut state: ListState<Dataset, DatasetFilter> =
            ListState::new(DatasetFilter::default());
        let fetch = state.begin();
        assert_eq!(state.phase(), ListPhase::Loading);
        assert_eq!(fetch.generation, 1);
        assert_eq!(fetch.filter, DatasetFilter::default());
    }

    #[test]
    fn page_change_is_clamped() {
        let mut state = loaded_state();

        // in range and different: fetch with the new page
        let fetch = state.request_page(2).unwrap();
        assert_eq!(fetch.filter.common.page, 2);
        assert!(state.apply(fetch.generation, envelope(25, 2, 3, 10)));

        // same page again: no-op
        assert!(state.request_page(2).is_none());

        // out of range low and high: no-ops
        assert!(state.request_page(0).is_none());
        assert!(state.request_page(4).is_none());
        assert_eq!(state.phase(), ListPhase::Loaded);
    }

    #[test]
    fn page_change_before_first_load_is_a_noop() {
        let mut state: ListState<Dataset, DatasetFilter> =
            ListState::new(DatasetFilter::default());
        // pages is still 0, so every request is out of range
        assert!(state.request_page(1).is_none());
        assert!(state.request_page(2).is_none());
    }

    #[test]
    fn search_resets_to_page_one() {
        let mut state = loaded_state();
        let fetch = state.request_page(3).unwrap();
        assert!(state.apply(fetch.generation, envelope(25, 3, 3, 5)));

        let fetch = state.submit_search("sales");
        assert_eq!(fetch.filter.common.term, "sales");
        assert_eq!(fetch.filter.common.page, 1);
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut state = loaded_state();
        let stale = state.begin();
        let current = state.begin();

        // the stale response arrives last but must not win
        assert!(state.apply(current.generation, envelope(25, 2, 3, 10)));
        assert!(!state.apply(stale.generation, envelope(25, 1, 3, 10)));
        assert_eq!(state.items().page, 2);
    }

    #[test]
    fn failure_keeps_previous_items() {
        let mut state = loaded_state();
        let before = state.items().nodes.len();

        let fetch = state.begin();
        assert!(state.fail(fetch.generation));
        assert_eq!(state.phase(), ListPhase::Errored);
        assert_eq!(state.items().nodes.len(), before);
        assert_eq!(state.items().count, 25);
    }

    #[test]
    fn superseded_failure_is_discarded() {
        let mut state = loaded_state();
        let stale = state.begin();
        let current = state.begin();

        assert!(state.apply(current.generation, envelope(25, 2, 3, 10)));
        assert!(!state.fail(stale.generation));
        assert_eq!(state.phase(), ListPhase::Loaded);
    }
}
