//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

/// Creates the HTTP client shared by every team request.
///
/// Without `timeout_seconds` the client never times out, so an unresponsive
/// endpoint blocks the poll until the connection drops.
pub fn create_http_client(timeout_seconds: Option<u64>) -> Result<Client, reqwest::Error> {
    let builder =
        Client::builder().pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST);

    match timeout_seconds {
        Some(seconds) => builder.timeout(Duration::from_secs(seconds)).build(),
        None => builder.build(),
    }
}

/// Creates an HTTP client for testing with a short timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client(Some(5)).expect("Failed to create test HTTP client")
}
