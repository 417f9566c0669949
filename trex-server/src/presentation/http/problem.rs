use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// RFC 7807 problem document.
///
/// `extensions` are flattened into the top-level object when present. They
/// only ever carry server-side diagnostics and are stripped by [`redacted`]
/// before anything reaches a client.
///
/// [`redacted`]: ProblemResponse::redacted
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProblemResponse {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    #[schema(ignore)]
    pub extensions: Option<Map<String, Value>>,
}

impl ProblemResponse {
    /// Problem whose detail is the generic reason phrase of `status`.
    pub fn for_status(status: StatusCode) -> Self {
        Self::for_status_and_detail(status, reason_phrase(status))
    }

    pub fn for_status_and_detail(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            problem_type: "about:blank".to_string(),
            title: reason_phrase(status).to_string(),
            status: status.as_u16(),
            detail: detail.into(),
            extensions: None,
        }
    }

    pub fn with_extensions(mut self, extensions: Map<String, Value>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Client-safe copy: same status, generic detail, no extensions.
    pub fn redacted(&self) -> Self {
        Self::for_status(self.status_code())
    }
}

impl IntoResponse for ProblemResponse {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [(header::CONTENT_TYPE, APPLICATION_PROBLEM_JSON)],
            Json(self),
        )
            .into_response()
    }
}

fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Status")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn for_status_uses_reason_phrase_as_detail() {
        let problem = ProblemResponse::for_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(problem.status, 500);
        assert_eq!(problem.title, "Internal Server Error");
        assert_eq!(problem.detail, "Internal Server Error");
    }

    #[test]
    fn extensions_are_flattened_and_omitted_when_absent() {
        let plain = ProblemResponse::for_status_and_detail(StatusCode::NOT_FOUND, "no such user");
        assert_eq!(
            serde_json::to_value(&plain).expect("serializable"),
            json!({
                "type": "about:blank",
                "title": "Not Found",
                "status": 404,
                "detail": "no such user"
            })
        );

        let mut extensions = Map::new();
        extensions.insert("requestUri".to_string(), json!("/users/7"));
        let enriched = plain.with_extensions(extensions);
        let value = serde_json::to_value(&enriched).expect("serializable");
        assert_eq!(value["requestUri"], "/users/7");
        assert_eq!(value["status"], 404);
    }

    #[test]
    fn redacted_drops_detail_and_extensions() {
        let mut extensions = Map::new();
        extensions.insert("errorMessage".to_string(), json!("secret"));
        let internal =
            ProblemResponse::for_status_and_detail(StatusCode::INTERNAL_SERVER_ERROR, "secret")
                .with_extensions(extensions);

        let public = internal.redacted();
        assert_eq!(public, ProblemResponse::for_status(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn response_carries_problem_content_type() {
        let response = ProblemResponse::for_status(StatusCode::FORBIDDEN).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            APPLICATION_PROBLEM_JSON
        );
    }
}
