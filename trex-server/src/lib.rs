//! HTTP scaffold: a health endpoint plus the error taxonomy and the
//! problem-details boundary that every other handler relies on.

pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod server;
