use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by `trex-client`.
pub enum TrexClientError {
    /// Transport failure or undecodable success body (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a problem document.
    #[error("{status} {title}: {detail}")]
    Problem {
        /// HTTP status code from the problem body (or the response line).
        status: u16,
        /// Reason phrase of `status`.
        title: String,
        /// Human-readable detail chosen by the server.
        detail: String,
    },
}

/// Result of `trex-client` operations.
pub type TrexClientResult<T> = Result<T, TrexClientError>;

impl TrexClientError {
    pub(crate) fn from_problem(
        status: reqwest::StatusCode,
        problem: Option<crate::models::Problem>,
    ) -> Self {
        let fallback_title = status.canonical_reason().unwrap_or("Unknown Status").to_string();
        match problem {
            Some(problem) => Self::Problem {
                status: problem.status.unwrap_or(status.as_u16()),
                title: problem.title.unwrap_or(fallback_title),
                detail: problem
                    .detail
                    .unwrap_or_else(|| format!("http status {status}")),
            },
            None => Self::Problem {
                status: status.as_u16(),
                title: fallback_title,
                detail: format!("http status {status}"),
            },
        }
    }

    /// Status code of a problem response, if this error is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Problem { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|status| status.as_u16()),
        }
    }

    /// Detail text of a problem response, if this error is one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Problem { detail, .. } => Some(detail),
            Self::Http(_) => None,
        }
    }

    /// `true` for 400 problems.
    pub fn is_bad_request(&self) -> bool {
        self.status() == Some(400)
    }

    /// `true` for 401 and 403 problems.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// `true` for 404 problems.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// `true` for any 5xx problem.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(500..=599))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Problem;

    #[test]
    fn problem_body_wins_over_response_line() {
        let err = TrexClientError::from_problem(
            reqwest::StatusCode::NOT_FOUND,
            Some(Problem {
                status: Some(404),
                title: Some("Not Found".to_string()),
                detail: Some("no such user".to_string()),
            }),
        );
        assert!(err.is_not_found());
        assert_eq!(err.detail(), Some("no such user"));
        assert_eq!(err.to_string(), "404 Not Found: no such user");
    }

    #[test]
    fn missing_body_falls_back_to_status_line() {
        let err = TrexClientError::from_problem(reqwest::StatusCode::FORBIDDEN, None);
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.detail(), Some("http status 403 Forbidden"));
    }

    #[test]
    fn server_errors_are_classified() {
        let err = TrexClientError::from_problem(reqwest::StatusCode::INTERNAL_SERVER_ERROR, None);
        assert!(err.is_server_error());
        assert!(!err.is_bad_request());
    }
}
