// src/infrastructure/http/mod.rs
// JSON-over-HTTP transport glue

use std::time::Duration;

use reqwest::header::{ACCEPT, CACHE_CONTROL};
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::errors::{FetchError, FetchResult};

/// Time to wait for a response before reporting the request as a failure.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Information used to fetch data from an HTTP endpoint using the GET
/// method.
#[derive(Debug, Clone)]
pub struct HttpGetRequest {
    /// Location of the remote resource.
    pub url: Url,

    /// Time to wait for a response before reporting the request as a
    /// failure.
    pub timeout: Duration,

    /// Whether previously cached data must be ignored by intermediaries.
    pub bypass_cache: bool,
}

impl HttpGetRequest {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            timeout: DEFAULT_TIMEOUT,
            bypass_cache: true,
        }
    }
}

/// Client that fetches a JSON resource over HTTP and decodes it.
///
/// Network failures, timeouts and non-2xx statuses surface as
/// [`FetchError::Transport`]; a body that does not match the expected schema
/// surfaces as [`FetchError::Decode`].
#[derive(Debug, Clone)]
pub struct JsonHttpClient {
    client: reqwest::Client,
}

impl JsonHttpClient {
    pub fn new() -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Issues an HTTP GET and decodes the JSON response body as `T`.
    pub async fn get<T>(&self, request: HttpGetRequest) -> FetchResult<T>
    where
        T: DeserializeOwned,
    {
        log::debug!("GET {}", request.url);

        let mut builder = self
            .client
            .get(request.url.clone())
            .timeout(request.timeout)
            .header(ACCEPT, "application/json");
        if request.bypass_cache {
            builder = builder.header(CACHE_CONTROL, "no-cache");
        }

        let response = builder
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport(format!(
                "Unexpected status {} from {}",
                status, request.url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(format!("Failed to read response body: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| FetchError::Decode(format!("Failed to decode response body: {}", e)))
    }
}
