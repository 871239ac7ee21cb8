//! Client for the remote sentiment analysis service.
//!
//! The service is consumed as an opaque black box: text goes out as
//! `POST /analyze {"text": ...}` and a [`SentimentResult`] comes back. Every
//! failure mode (transport, non-2xx status, undecodable body) is folded into
//! [`Error`] so callers only ever see a `Result`.
//!
//! ```no_run
//! # async fn demo() -> sentra_client::Result<()> {
//! use sentra_client::{AnalysisClient, ClientConfig};
//!
//! let client = AnalysisClient::new(ClientConfig::default())?;
//! let result = client.analyze("what a great day").await?;
//! println!("{:.1}", result.score);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
pub mod error;

pub use client::{Analyze, AnalysisClient};
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{Error, Result};
pub use sentra_types::{Polarity, SentimentResult};
