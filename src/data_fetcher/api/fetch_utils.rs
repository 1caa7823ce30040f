//! Generic HTTP fetching with typed error classification

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::AppError;

/// Issues one GET request and decodes the JSON body into `T`.
///
/// Only a 200 response is decoded. Every failure comes back as an [`AppError`]
/// and nothing is logged above `debug` here; callers decide what to report
/// with [`AppError::is_reported`]. No retry is attempted.
///
/// Decoding reads the first JSON value of the body and ignores whatever
/// follows it. A literal `null` yields `T::default()`.
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned + Default>(
    client: &Client,
    url: &str,
) -> Result<T, AppError> {
    debug!("Fetching data from URL: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    let status = response.status();
    if status != StatusCode::OK {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown status");
        debug!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            500..=599 => AppError::api_server_error(status_code, reason, url),
            _ => AppError::api_unexpected_status(status_code, url),
        });
    }

    let response_text = response.text().await?;
    debug!("Response length: {} bytes", response_text.len());

    decode_first_value(&response_text, url)
}

fn decode_first_value<T: DeserializeOwned + Default>(
    text: &str,
    url: &str,
) -> Result<T, AppError> {
    let first = serde_json::Deserializer::from_str(text)
        .into_iter::<Option<T>>()
        .next();

    match first {
        Some(Ok(value)) => Ok(value.unwrap_or_default()),
        Some(Err(e)) if e.is_data() => {
            Err(AppError::api_unexpected_structure(e.to_string(), url))
        }
        Some(Err(e)) => Err(AppError::api_malformed_json(
            format!("Response is not valid JSON: {e}"),
            url,
        )),
        None => Err(AppError::api_no_data("Response body is empty", url)),
    }
}
