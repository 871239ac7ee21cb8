use std::future::Future;

use reqwest::Url;
use sentra_types::{AnalyzeRequest, SentimentResult};

use crate::config::ClientConfig;
use crate::{Error, Result};

/// Longest slice of an error body kept in `Error::Status`.
const MAX_ERROR_BODY: usize = 200;

/// Anything that can turn text into a sentiment result.
///
/// The terminal UI is generic over this so tests can substitute a fake.
pub trait Analyze: Send + Sync {
    fn analyze(&self, text: &str) -> impl Future<Output = Result<SentimentResult>> + Send;
}

/// Stateless client for `POST /analyze`.
///
/// Holds only the resolved URL and a pooled `reqwest::Client`; cloning is
/// cheap and clones share the pool.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    url: Url,
}

impl AnalysisClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let url = config.analyze_url()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Send `text` for scoring and return the service's result unchanged.
    ///
    /// Callers are expected to reject blank text beforehand; the client
    /// itself forwards whatever it is given.
    pub async fn analyze(&self, text: &str) -> Result<SentimentResult> {
        tracing::debug!(url = %self.url, chars = text.chars().count(), "sending analysis request");

        let outcome = self.post(text).await;
        match &outcome {
            Ok(result) => tracing::info!(
                score = result.score,
                polarity = %result.polarity(),
                tokens = result.word_count(),
                "analysis completed"
            ),
            Err(err) => tracing::warn!(error = %err, "analysis request failed"),
        }
        outcome
    }

    async fn post(&self, text: &str) -> Result<SentimentResult> {
        let response = self
            .http
            .post(self.url.clone())
            .json(&AnalyzeRequest::new(text))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let result: SentimentResult = serde_json::from_str(&body)?;
        Ok(result)
    }
}

impl Analyze for AnalysisClient {
    fn analyze(&self, text: &str) -> impl Future<Output = Result<SentimentResult>> + Send {
        AnalysisClient::analyze(self, text)
    }
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_ERROR_BODY {
        trimmed.to_string()
    } else {
        let truncated: String = trimmed.chars().take(MAX_ERROR_BODY - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_resolves_url() {
        let client = AnalysisClient::new(ClientConfig::new("http://127.0.0.1:9000")).unwrap();
        assert_eq!(client.url().as_str(), "http://127.0.0.1:9000/analyze");
    }

    #[test]
    fn test_new_rejects_bad_endpoint() {
        assert!(AnalysisClient::new(ClientConfig::new("localhost")).is_err());
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("  short  "), "short");
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert_eq!(truncated.chars().count(), MAX_ERROR_BODY);
        assert!(truncated.ends_with("..."));
    }
}
