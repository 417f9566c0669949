use axum::{Router, routing::get};

use super::app_error::AppError;
use super::handlers::health::health;
use crate::domain::error::DomainError;

pub fn router() -> Router {
    Router::new()
        .route("/", get(health))
        .fallback(unknown_route)
}

async fn unknown_route() -> AppError {
    DomainError::not_found("route").into()
}
