use std::time::Duration;

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower::ServiceBuilder;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower::timeout::error::Elapsed;
use tracing::warn;

use crate::infrastructure::settings::Settings;
use crate::presentation::http::app_error::AppError;
use crate::presentation::http::problem::ProblemResponse;

async fn handle_transport_error(err: BoxError) -> Response {
    if err.is::<Elapsed>() {
        warn!("request timed out");
        return ProblemResponse::for_status(StatusCode::REQUEST_TIMEOUT).into_response();
    }

    AppError::unexpected(anyhow::anyhow!("{err}")).into_response()
}

pub fn apply_limits(router: Router, settings: &Settings) -> Router {
    router
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_transport_error))
                .timeout(Duration::from_secs(settings.http_request_timeout_secs))
                .layer(GlobalConcurrencyLimitLayer::new(settings.http_concurrency_limit)),
        )
        .layer(DefaultBodyLimit::max(settings.http_request_body_limit_bytes))
}
