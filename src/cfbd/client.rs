//! HTTP client for the CFBD REST API.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{CfbdError, Result};

/// Base URL for the CFBD v1 API.
pub const CFBD_BASE_URL: &str = "https://api.collegefootballdata.com";

/// Environment variable holding the CFBD bearer token.
pub const API_KEY_ENV_VAR: &str = "CFBD_API_KEY";

/// Per-request timeout. A call that exceeds this surfaces as
/// [`CfbdError::UpstreamTimeout`] and is never retried.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Issues authenticated GET requests against the CFBD API and
/// deserializes the JSON responses into typed records.
pub struct CfbdClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl CfbdClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, CFBD_BASE_URL)
    }

    /// Point the client at a different base URL. Tests use this to run
    /// against a local mock upstream.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(api_key, base_url, REQUEST_TIMEOUT)
    }

    /// Override the per-request timeout. Tests shrink it to exercise the
    /// timeout path without waiting out the default.
    pub fn with_timeout(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("cfbd-stats/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Build a client from the `CFBD_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV_VAR).map_err(|_| CfbdError::MissingApiKey {
            env_var: API_KEY_ENV_VAR.to_string(),
        })?;
        Self::new(api_key)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );
        Ok(headers)
    }

    /// GET `{base}{path}` with the given query parameters and parse the
    /// JSON body into `T`.
    ///
    /// Call sites pass only parameters that are actually present, so
    /// optional filters never serialize as empty values. Non-2xx
    /// responses carry the status and body text back to the caller.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, ?params, "CFBD API call");

        let response = self
            .http
            .get(&url)
            .headers(self.headers()?)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CfbdError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        // Read the body as text first so malformed JSON is classified as
        // a parse failure rather than a transport error.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
