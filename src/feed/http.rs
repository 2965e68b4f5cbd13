//! Shared HTTP plumbing for venue clients

use super::FeedError;
use reqwest::{Client, Proxy, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Build a reqwest client with an explicit timeout and optional proxy.
///
/// Without a proxy the client ignores `HTTP(S)_PROXY` from the environment.
pub fn build_http_client(timeout: Duration, proxy: Option<&str>) -> reqwest::Result<Client> {
    let builder = Client::builder().timeout(timeout);

    let builder = match proxy {
        Some(url) => {
            tracing::debug!(proxy = url, "Routing venue requests through proxy");
            builder.proxy(Proxy::all(url)?)
        }
        None => builder.no_proxy(),
    };

    builder.build()
}

/// Send a request and decode a JSON body, mapping non-2xx statuses to errors
pub async fn fetch_json<T: DeserializeOwned>(
    venue: &'static str,
    request: RequestBuilder,
) -> Result<T, FeedError> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(FeedError::Status {
            venue,
            status,
            body,
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|source| FeedError::Decode { venue, source })
}
