//! Start/poll execution of worksheet SQL queries.

use std::time::Duration;

use tokio::time::sleep;

use dataall_gql::ops::worksheet::{poll_worksheet_query, start_worksheet_query, StartQueryInput};
use dataall_gql::types::{AthenaQueryResult, QueryStatus};
use dataall_gql::Client;

use crate::error::ConsoleError;

/// Default wait between status polls.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Default number of polls before giving up (~5 minutes at the default
/// interval).
const DEFAULT_POLL_BUDGET: u32 = 150;

/// Runs a worksheet query to completion: one start mutation, then status
/// polls until the query reaches a terminal state or the budget runs out.
pub struct QueryRunner {
    poll_interval: Duration,
    poll_budget: u32,
}

impl Default for QueryRunner {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL, DEFAULT_POLL_BUDGET)
    }
}

impl QueryRunner {
    pub fn new(poll_interval: Duration, poll_budget: u32) -> Self {
        Self {
            poll_interval,
            poll_budget,
        }
    }

    /// Starts the query and polls until it succeeds, fails, or exhausts the
    /// poll budget. A successful run carries the result rows and columns.
    pub async fn run(
        &self,
        client: &Client,
        worksheet_uri: &str,
        input: &StartQueryInput,
    ) -> Result<AthenaQueryResult, ConsoleError> {
        let started: AthenaQueryResult = client
            .send(&start_worksheet_query(worksheet_uri, input))
            .await?;
        if started.status.is_terminal() {
            return finish(started);
        }

        let query_id = started.athena_query_id.clone();
        for _ in 0..self.poll_budget {
            sleep(self.poll_interval).await;
            let polled: AthenaQueryResult = client
                .send(&poll_worksheet_query(worksheet_uri, &query_id))
                .await?;
            if polled.status.is_terminal() {
                return finish(polled);
            }
            tracing::debug!("query {} still {}", query_id, polled.status);
        }

        Err(ConsoleError::QueryTimeout {
            athena_query_id: query_id,
            polls: self.poll_budget,
        })
    }
}

fn finish(result: AthenaQueryResult) -> Result<AthenaQueryResult, ConsoleError> {
    match result.status {
        QueryStatus::Succeeded => Ok(result),
        status => Err(ConsoleError::QueryFailed {
            message: result
                .error
                .unwrap_or_else(|| format!("query ended as {}", status)),
        }),
    }
}
