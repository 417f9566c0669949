use std::any::Any;

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::presentation::http::app_error::{AppError, PendingError, UnexpectedError};
use crate::presentation::http::translator::{RequestContext, translate};

/// Replaces any `AppError` response produced further in with its translated
/// problem document.
pub async fn translate_errors(request: Request, next: Next) -> Response {
    let context = RequestContext::from_request(&request);
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<PendingError>() {
        Some(PendingError(error)) => translate(&error, &context).into_response(),
        None => response,
    }
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    };

    AppError::Unexpected(UnexpectedError::panic(message)).into_response()
}

/// Installs the problem-details boundary: panics are turned into unexpected
/// errors, then every parked error is translated.
pub fn apply_problem_details(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(translate_errors))
}
