use axum::http::StatusCode;
use thiserror::Error;

pub const INTERNAL_SERVER_MESSAGE: &str = "internal server error occurred";

/// Business-rule failures, each bound to a fixed HTTP status.
///
/// Domain code returns these as plain `Err` values; turning them into a
/// response is the job of the problem-details translator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("access denied")]
    Forbidden,

    #[error("no such {target}")]
    NotFound { target: String },

    #[error("{0}")]
    InternalServer(String),
}

impl DomainError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden() -> Self {
        Self::Forbidden
    }

    pub fn not_found(target: impl Into<String>) -> Self {
        Self::NotFound {
            target: target.into(),
        }
    }

    pub fn internal() -> Self {
        Self::InternalServer(INTERNAL_SERVER_MESSAGE.to_string())
    }

    pub fn internal_with(message: impl Into<String>) -> Self {
        Self::InternalServer(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InternalServer(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Status in `"404 NOT_FOUND"` form, used in log and diagnostic fields.
    pub fn status_code(&self) -> String {
        status_label(self.status())
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BadRequest",
            Self::Unauthorized(_) => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound { .. } => "NotFound",
            Self::InternalServer(_) => "InternalServer",
        }
    }
}

pub fn status_label(status: StatusCode) -> String {
    let reason = status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_ascii_uppercase()
        .replace([' ', '-'], "_");
    format!("{} {reason}", status.as_u16())
}
