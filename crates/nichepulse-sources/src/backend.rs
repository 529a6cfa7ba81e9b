//! Shared HTTP plumbing for the backend clients.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::SourceError;

pub(crate) fn build_http_client(
    timeout_secs: u64,
    user_agent: &str,
) -> Result<Client, SourceError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()
        .map_err(SourceError::Http)
}

/// Normalise: ensure the base URL ends with exactly one slash so that
/// `Url::join` appends endpoint paths rather than replacing the last path
/// segment.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, SourceError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised)
        .map_err(|e| SourceError::Api(format!("invalid base URL '{base_url}': {e}")))
}

pub(crate) fn join_endpoint(base_url: &Url, path: &str) -> Result<Url, SourceError> {
    base_url
        .join(path)
        .map_err(|e| SourceError::Api(format!("invalid endpoint '{path}': {e}")))
}

/// GET `url` and return the raw JSON body.
///
/// Non-2xx statuses surface as [`SourceError::Api`] with `context` naming
/// the endpoint.
pub(crate) async fn get_json(
    client: &Client,
    url: Url,
    query: &[(&str, String)],
    context: &str,
) -> Result<serde_json::Value, SourceError> {
    let response = client.get(url).query(query).send().await?;
    if !response.status().is_success() {
        return Err(SourceError::Api(format!(
            "{context} failed with status {}",
            response.status()
        )));
    }
    Ok(response.json::<serde_json::Value>().await?)
}

pub(crate) fn parse_envelope<T: DeserializeOwned>(
    body: serde_json::Value,
    context: &str,
) -> Result<T, SourceError> {
    serde_json::from_value(body).map_err(|e| SourceError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}
