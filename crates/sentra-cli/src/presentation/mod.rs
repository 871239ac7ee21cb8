//! Presentation layer for the analysis screen.
//!
//! - `presenters`: pure functions from state to view models
//! - `view_models`: plain data, everything already formatted
//! - `views`: ratatui widgets over view models, including color mapping
//! - `renderers`: terminal lifecycle and the event loop

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;
