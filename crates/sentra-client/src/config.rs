use std::time::Duration;

use reqwest::Url;

use crate::{Error, Result};

/// Address of the analysis service when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

const ANALYZE_PATH: &str = "analyze";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the service, e.g. `http://localhost:8000`.
    pub endpoint: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The fixed request URL: `<endpoint>/analyze`.
    pub fn analyze_url(&self) -> Result<Url> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(Error::Config("endpoint cannot be empty".to_string()));
        }

        let raw = format!("{}/{}", endpoint.trim_end_matches('/'), ANALYZE_PATH);
        let url = Url::parse(&raw)
            .map_err(|e| Error::Config(format!("invalid endpoint '{}': {}", endpoint, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::Config(format!(
                "unsupported endpoint scheme '{}' (expected http or https)",
                other
            ))),
        }
    }
}
