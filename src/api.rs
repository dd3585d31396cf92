//! HTTP client for the forecast service.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// Base URL used when neither the CLI flag nor the environment supplies one.
/// The deployed service lives behind a same-origin reverse proxy, hence a
/// bare path; terminal use normally sets an absolute URL instead.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Environment variable selecting the API base URL.
pub const BASE_URL_ENV: &str = "WXDASH_API_URL";

const USER_AGENT: &str = "wxdash";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Immutable client configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }

    /// Read the base URL from `WXDASH_API_URL`, falling back to `/api`.
    pub fn from_env() -> Self {
        Self::new(std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()))
    }

    /// Set a custom base URL (CLI override, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// A failed HTTP exchange: connect or send failure, a non-success status, or
/// an unparseable success body. Carries the request URL and the cause.
#[derive(Debug, Error)]
#[error("GET {url} failed: {source}")]
pub struct FetchError {
    pub url: String,
    #[source]
    pub source: reqwest::Error,
}

/// Client for the forecast API. Holds no state beyond the resolved base URL
/// and the connection pool, so clones may fetch concurrently.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: reqwest::Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `{base}/forecast/?station_id=<id>`. The parsed body is returned
    /// unmodified; one attempt per call, no retry.
    pub async fn fetch_forecast(&self, station_id: &str) -> Result<Value, FetchError> {
        let url = format!("{}/forecast/?station_id={}", self.base_url, station_id);
        self.get_json(url).await
    }

    /// GET `{base}/stations`. Same contract as [`Self::fetch_forecast`].
    pub async fn fetch_stations(&self) -> Result<Value, FetchError> {
        let url = format!("{}/stations", self.base_url);
        self.get_json(url).await
    }

    async fn get_json(&self, url: String) -> Result<Value, FetchError> {
        let outcome = async {
            let response = self.http.get(&url).send().await?;
            response.error_for_status()?.json::<Value>().await
        }
        .await;
        match outcome {
            Ok(body) => Ok(body),
            Err(source) => {
                tracing::error!(%url, error = %source, "forecast API request failed");
                Err(FetchError { url, source })
            }
        }
    }
}
