//! Generic driver wiring a list state machine to the GraphQL client.

use serde::de::DeserializeOwned;
use tokio::sync::watch;

use dataall_gql::types::PagedResponse;
use dataall_gql::{Client, GqlRequest, Paged};

use crate::channel::ErrorChannel;
use crate::list::{Fetch, ListState};

/// One list operation: the filter it takes and how to build its request.
pub trait ListOperation {
    type Item: DeserializeOwned;
    type Filter: Paged + Clone;

    fn request(filter: &Self::Filter) -> GqlRequest;
}

/// Handle used to tear a screen down from the outside. Closing it abandons
/// whatever fetch is in flight at its next suspension point.
pub struct Teardown {
    tx: watch::Sender<bool>,
}

impl Teardown {
    pub fn new() -> (Self, TeardownSignal) {
        let (tx, rx) = watch::channel(false);
        (Self { tx }, TeardownSignal { rx })
    }

    pub fn close(&self) {
        let _ = self.tx.send(true);
    }
}

/// Receiving side of a [`Teardown`], held by the screen.
#[derive(Clone)]
pub struct TeardownSignal {
    rx: watch::Receiver<bool>,
}

impl TeardownSignal {
    pub fn is_closed(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the owning handle signals teardown. A dropped handle
    /// counts as teardown too.
    pub async fn closed(&mut self) {
        let _ = self.rx.wait_for(|closed| *closed).await;
    }
}

/// A paged list screen: state machine, error channel, and teardown wiring.
///
/// All fetch triggers funnel through [`run`](Self::run): mount/refresh, page
/// change, and search submission. Each call awaits its own network round
/// trip, racing it against teardown.
pub struct ListScreen<O: ListOperation> {
    state: ListState<O::Item, O::Filter>,
    errors: ErrorChannel,
    teardown: TeardownSignal,
}

impl<O: ListOperation> ListScreen<O> {
    pub fn new(filter: O::Filter, errors: ErrorChannel, teardown: TeardownSignal) -> Self {
        Self {
            state: ListState::new(filter),
            errors,
            teardown,
        }
    }

    pub fn state(&self) -> &ListState<O::Item, O::Filter> {
        &self.state
    }

    pub fn items(&self) -> &PagedResponse<O::Item> {
        self.state.items()
    }

    /// Initial load or explicit refresh.
    pub async fn refresh(&mut self, client: &Client) {
        let fetch = self.state.begin();
        self.run(client, fetch).await;
    }

    /// Page-change handler. Out-of-range or same-page requests fetch nothing.
    pub async fn go_to_page(&mut self, client: &Client, page: i64) {
        if let Some(fetch) = self.state.request_page(page) {
            self.run(client, fetch).await;
        }
    }

    /// Search submission (Enter in the search box). Resets to page 1.
    pub async fn submit_search(&mut self, client: &Client, term: &str) {
        let fetch = self.state.submit_search(term);
        self.run(client, fetch).await;
    }

    async fn run(&mut self, client: &Client, fetch: Fetch<O::Filter>) {
        let request = O::request(&fetch.filter);
        let operation = request.operation_name;
        let mut teardown = self.teardown.clone();
        tokio::select! {
            _ = teardown.closed() => {
                tracing::debug!("{}: fetch abandoned on teardown", operation);
            }
            result = client.send::<PagedResponse<O::Item>>(&request) => match result {
                Ok(items) => {
                    self.state.apply(fetch.generation, items);
                }
                Err(e) => {
                    if self.state.fail(fetch.generation) {
                        self.errors.dispatch(e.user_message());
                    }
                }
            },
        }
    }
}
