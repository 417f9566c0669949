//! Client library for `trex-server`.
//!
//! Wraps the HTTP API and turns problem-details answers (`application/problem+json`)
//! back into typed [`TrexClientError::Problem`] values.
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{TrexClientError, TrexClientResult};
pub use http_client::TrexClient;
pub use models::HealthStatus;
