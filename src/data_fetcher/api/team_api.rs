// Team endpoint operations

use reqwest::Client;
use tracing::instrument;

use crate::config::Config;
use crate::data_fetcher::models::FetchEnvelope;
use crate::error::AppError;

use super::fetch_utils::fetch;
use super::urls::build_team_url;

/// Fetches and decodes the team with the given numeric ID.
///
/// Any failure (request, transport, non-200 status, decode) is returned as an
/// `AppError`; the caller decides whether to move on.
#[instrument(skip(client, config))]
pub async fn fetch_team(
    client: &Client,
    config: &Config,
    team_id: u64,
) -> Result<FetchEnvelope, AppError> {
    let url = build_team_url(&config.api_domain, &config.language, team_id);
    fetch::<FetchEnvelope>(client, &url).await
}
