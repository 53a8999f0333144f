//! Client configuration.

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_API_PREFIX: &str = "/api/v1";

/// Configuration for the SGST client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
    /// Path prefix of every API route, e.g. `/api/v1`.
    pub api_prefix: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Delay before a typed search is committed.
    pub search_debounce_ms: u64,
    /// Rows per page of the equipment table.
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            timeout_secs: 30,
            search_debounce_ms: 500,
            page_size: 10,
        }
    }
}

impl ClientConfig {
    /// Apply `SGST_API_URL` / `SGST_API_PREFIX` overrides.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("SGST_API_URL") {
            let url = url.trim().trim_end_matches('/').to_string();
            if url::Url::parse(&url).is_ok() {
                self.base_url = url;
            } else {
                tracing::warn!("SGST_API_URL is not a valid URL, ignoring");
            }
        }
        if let Ok(prefix) = std::env::var("SGST_API_PREFIX") {
            self.api_prefix = prefix;
        }
        self
    }

    /// `base_url` joined with `api_prefix`, without a trailing slash.
    pub fn api_root(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.api_prefix.trim_matches('/');
        if prefix.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{prefix}")
        }
    }

    /// Full URL of an API path such as `/equipos/3`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_root(), path.trim_start_matches('/'))
    }
}
