use std::time::Duration;

use hnpage_core::hn::HN_API_BASE;

use crate::prelude::*;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP settings for talking to the HackerNews API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HnConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HnConfig {
    fn default() -> Self {
        Self {
            base_url: HN_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: f!("hnpage/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HnConfig {
    /// Load configuration from environment variables
    ///
    /// `HN_API_BASE` overrides the API root and `HN_TIMEOUT_SECS` the request
    /// timeout. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base_url) = lookup("HN_API_BASE").filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().to_string();
        }

        if let Some(raw) = lookup("HN_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|e| Error::Config(f!("Invalid HN_TIMEOUT_SECS {raw:?}: {e}")))?;
            if secs == 0 {
                return Err(Error::Config("HN_TIMEOUT_SECS must be positive".to_string()));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create the HTTP client every request of an `HnClient` shares
    pub fn build_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()
            .map_err(|e| Error::Config(f!("Failed to build HTTP client: {e}")))
    }
}
