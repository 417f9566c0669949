use std::panic::Location;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

use super::problem::ProblemResponse;
use crate::domain::error::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Unexpected(#[from] UnexpectedError),
}

pub type AppResult<T> = Result<T, AppError>;

/// Failure nobody anticipated, tagged with the call site that raised it.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct UnexpectedError {
    error: anyhow::Error,
    kind: &'static str,
    origin: Option<&'static Location<'static>>,
}

impl UnexpectedError {
    #[track_caller]
    pub fn new<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self {
            error: error.into(),
            kind: std::any::type_name::<E>(),
            origin: Some(Location::caller()),
        }
    }

    /// Panic payload caught at the HTTP boundary; there is no call site to
    /// record for it.
    pub fn panic(message: impl Into<String>) -> Self {
        Self {
            error: anyhow::Error::msg(message.into()),
            kind: "panic",
            origin: None,
        }
    }

    pub fn error(&self) -> &anyhow::Error {
        &self.error
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn origin(&self) -> Option<&'static Location<'static>> {
        self.origin
    }
}

impl AppError {
    #[track_caller]
    pub fn unexpected<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Unexpected(UnexpectedError::new(error))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(err) => err.status(),
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// `?` on an `anyhow::Result` lands here. The concrete type is already erased
/// by then, so the kind is `anyhow::Error`; use [`UnexpectedResultExt`] on the
/// original `Result` to keep it.
impl From<anyhow::Error> for AppError {
    #[track_caller]
    fn from(error: anyhow::Error) -> Self {
        Self::Unexpected(UnexpectedError::new(error))
    }
}

/// Converts a failed `Result` into an unexpected error while the concrete
/// error type and the caller's location are still known.
pub trait UnexpectedResultExt<T> {
    fn or_unexpected(self) -> AppResult<T>;
}

impl<T, E> UnexpectedResultExt<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    #[track_caller]
    fn or_unexpected(self) -> AppResult<T> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(AppError::unexpected(error)),
        }
    }
}

/// Error parked in response extensions until the problem-details middleware
/// translates it with the request context.
#[derive(Debug, Clone)]
pub struct PendingError(pub Arc<AppError>);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut response = ProblemResponse::for_status(self.status()).into_response();
        response.extensions_mut().insert(PendingError(Arc::new(self)));
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing_step() -> AppResult<()> {
        Err::<(), _>(anyhow::anyhow!("database connection reset"))?;
        Ok(())
    }

    #[test]
    fn status_follows_error_class() {
        assert_eq!(
            AppError::from(DomainError::not_found("user")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(ValidationErrors::new()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::unexpected(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unexpected_error_records_call_site() {
        let AppError::Unexpected(err) = AppError::unexpected(std::io::Error::other("disk")) else {
            panic!("must be unexpected");
        };
        let origin = err.origin().expect("origin must be captured");
        assert!(origin.file().ends_with("app_error.rs"));
        assert_eq!(err.kind(), "std::io::error::Error");
        assert_eq!(err.to_string(), "disk");
    }

    #[test]
    fn question_mark_converts_anyhow_into_unexpected() {
        let err = failing_step().expect_err("must fail");
        assert!(matches!(err, AppError::Unexpected(_)));
        assert_eq!(err.to_string(), "database connection reset");
    }

    #[test]
    fn or_unexpected_keeps_concrete_kind_and_call_site() {
        let parsed: Result<u32, _> = "forty-two".parse::<u32>();
        let line = line!() + 1;
        let err = parsed.or_unexpected().expect_err("must fail");

        let AppError::Unexpected(err) = err else {
            panic!("must be unexpected");
        };
        assert_eq!(err.kind(), "core::num::error::ParseIntError");
        let origin = err.origin().expect("origin must be captured");
        assert!(origin.file().ends_with("app_error.rs"));
        assert_eq!(origin.line(), line);
    }

    #[test]
    fn anyhow_question_mark_reports_erased_kind() {
        let AppError::Unexpected(err) = failing_step().expect_err("must fail") else {
            panic!("must be unexpected");
        };
        assert_eq!(err.kind(), "anyhow::Error");
        assert!(err.origin().is_some());
    }

    #[test]
    fn panic_errors_have_no_origin() {
        let err = UnexpectedError::panic("index out of bounds");
        assert!(err.origin().is_none());
        assert_eq!(err.kind(), "panic");
    }

    #[test]
    fn response_parks_error_for_middleware_and_hides_details() {
        let response = AppError::unexpected(anyhow::anyhow!("secret")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let pending = response
            .extensions()
            .get::<PendingError>()
            .expect("error must be parked");
        assert_eq!(pending.0.to_string(), "secret");
    }
}
