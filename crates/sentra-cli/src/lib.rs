//! Terminal client for a remote sentiment analysis service.
//!
//! The user types text, submits it, and the screen shows the score, its
//! polarity and the words the service attributed to each side. Scoring
//! happens remotely; this crate owns only the request lifecycle and the
//! mapping from a result to what is drawn.

pub mod app;
mod args;
mod commands;
pub mod config;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::Cli;
pub use commands::run;
