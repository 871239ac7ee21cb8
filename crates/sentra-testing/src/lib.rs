//! Testing infrastructure for sentra integration tests.
//!
//! - `server`: a stub analysis service bound to a loopback port
//! - `fixtures`: sentiment results used across client and UI tests

pub mod fixtures;
pub mod server;

pub use server::{RecordedRequest, StubResponse, StubServer, closed_endpoint};
