//! Drives team requests by incrementing ID until every watched team is collected

use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::pin::pin;
use tracing::{debug, error, info, instrument, warn};

use crate::config::Config;
use crate::data_fetcher::api::fetch_team;
use crate::roster::{AggregateOutcome, Roster, WatchList, aggregate};

/// Counters describing how a poll went.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollSummary {
    /// Highest team ID whose result was consumed.
    pub last_team_id: u64,
    pub successful_fetches: u64,
    pub failed_fetches: u64,
    /// Teams merged into the roster, in collection order.
    pub collected_teams: Vec<String>,
    /// Watched teams never seen before the poll stopped.
    pub pending_teams: Vec<String>,
}

impl PollSummary {
    /// True when every watched team was collected.
    pub fn is_complete(&self) -> bool {
        self.pending_teams.is_empty()
    }
}

/// Requests team IDs 1, 2, 3, ... and folds every decoded response into `roster`.
///
/// A failed request skips its ID for good; the next ID is tried at once. The
/// watch-list is checked only after a successful fetch, and polling stops as
/// soon as it is empty. Without `max_attempts` there is no upper ID, so a
/// watched team the API never returns keeps the poll running forever.
///
/// With `concurrency > 1` up to that many requests are in flight, but results
/// are consumed in ID order by this task alone: each matched team is merged
/// exactly once and the roster equals the one a sequential poll builds.
/// Requests still in flight when the watch-list drains are dropped.
///
/// Failures are logged here, when their result is consumed: request and
/// decode errors at `error`, non-200 statuses at `debug`. A lookahead result
/// dropped after the stop point is never logged.
#[instrument(skip_all, fields(concurrency = config.concurrency, max_attempts = ?config.max_attempts))]
pub async fn poll_teams(
    client: &Client,
    config: &Config,
    watch_list: &mut WatchList,
    roster: &mut Roster,
) -> PollSummary {
    let concurrency = config.concurrency.max(1);
    let last_id = config.max_attempts.unwrap_or(u64::MAX);
    let mut summary = PollSummary::default();

    info!(
        "Polling {} for {} watched teams",
        config.api_domain,
        watch_list.len()
    );

    let mut results = pin!(
        stream::iter(1..=last_id)
            .map(move |team_id| async move { (team_id, fetch_team(client, config, team_id).await) })
            .buffered(concurrency)
    );

    while let Some((team_id, result)) = results.next().await {
        summary.last_team_id = team_id;

        let envelope = match result {
            Ok(envelope) => envelope,
            Err(e) => {
                summary.failed_fetches += 1;
                if e.is_reported() {
                    error!("Skipping team ID {team_id}: {e}");
                } else {
                    debug!("Skipping team ID {team_id}: {e}");
                }
                continue;
            }
        };
        summary.successful_fetches += 1;

        if let AggregateOutcome::Merged { team, .. } = aggregate(&envelope, watch_list, roster) {
            summary.collected_teams.push(team);
        }

        if watch_list.is_empty() {
            info!("All watched teams collected after team ID {team_id}");
            break;
        }
    }

    summary.pending_teams = watch_list.teams().to_vec();
    if !summary.is_complete() {
        warn!(
            "Stopped after team ID {} with teams still pending: {}",
            summary.last_team_id,
            summary.pending_teams.join(", ")
        );
    }

    summary
}
