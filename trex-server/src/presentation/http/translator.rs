//! Conversion of any handler failure into a problem document.
//!
//! Domain errors are expected outcomes: they are logged at INFO and their
//! message is sent verbatim. Everything else is a fault: the raw message and
//! a diagnostic bundle go to the ERROR log, while the client only learns the
//! status and its reason phrase.

use std::collections::BTreeMap;

use axum::{
    extract::Request,
    http::{Method, StatusCode, Uri},
};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{error, info};
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use super::app_error::{AppError, UnexpectedError};
use super::problem::ProblemResponse;
use crate::domain::error::{DomainError, status_label};

/// Method and URI of the request whose handler failed.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub uri: Uri,
}

impl RequestContext {
    pub fn new(method: Method, uri: Uri) -> Self {
        Self { method, uri }
    }

    pub fn from_request(request: &Request) -> Self {
        Self::new(request.method().clone(), request.uri().clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticBundle {
    pub http_method: String,
    pub request_uri: String,
    pub status_code: String,
    pub source_file: String,
    pub source_line: u32,
    pub error_kind: String,
    pub error_message: String,
}

#[derive(Debug, Error)]
pub enum DiagnosticsError {
    #[error("no source location captured for {kind} error")]
    MissingOrigin { kind: &'static str },

    #[error("failed to encode diagnostics: {0}")]
    Encode(#[from] serde_json::Error),
}

impl DiagnosticBundle {
    pub fn capture(
        error: &UnexpectedError,
        context: &RequestContext,
    ) -> Result<Self, DiagnosticsError> {
        let origin = error.origin().ok_or(DiagnosticsError::MissingOrigin {
            kind: error.kind(),
        })?;

        Ok(Self {
            http_method: context.method.to_string(),
            request_uri: context.uri.path().to_string(),
            status_code: status_label(StatusCode::INTERNAL_SERVER_ERROR),
            source_file: origin.file().to_string(),
            source_line: origin.line(),
            error_kind: error.kind().to_string(),
            error_message: error.to_string(),
        })
    }

    pub fn to_extensions(&self) -> Result<Map<String, Value>, DiagnosticsError> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }
}

/// Builds the client-facing problem for `error`, logging exactly once.
pub fn translate(error: &AppError, context: &RequestContext) -> ProblemResponse {
    match error {
        AppError::Domain(err) => translate_domain(err),
        AppError::Validation(errors) => translate_validation(errors, context),
        AppError::Unexpected(err) => translate_unexpected(err, context),
    }
}

fn translate_domain(err: &DomainError) -> ProblemResponse {
    info!(status = %err.status_code(), "{err}");
    ProblemResponse::for_status_and_detail(err.status(), err.message())
}

fn translate_validation(errors: &ValidationErrors, context: &RequestContext) -> ProblemResponse {
    let detail = render_field_errors(errors);
    error!(
        method = %context.method,
        uri = %context.uri.path(),
        "request validation failed: {detail}"
    );
    ProblemResponse::for_status_and_detail(StatusCode::BAD_REQUEST, detail)
}

fn translate_unexpected(err: &UnexpectedError, context: &RequestContext) -> ProblemResponse {
    let internal = match diagnose(err, context) {
        Ok(problem) => problem,
        Err(failure) => ProblemResponse::for_status_and_detail(
            StatusCode::INTERNAL_SERVER_ERROR,
            failure.to_string(),
        ),
    };

    let diagnostics = serde_json::to_string(&internal).unwrap_or_else(|e| e.to_string());
    error!(%diagnostics, "{err}");

    internal.redacted()
}

fn diagnose(
    err: &UnexpectedError,
    context: &RequestContext,
) -> Result<ProblemResponse, DiagnosticsError> {
    let bundle = DiagnosticBundle::capture(err, context)?;
    Ok(
        ProblemResponse::for_status_and_detail(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            .with_extensions(bundle.to_extensions()?),
    )
}

/// Violation messages keyed by field path, ordered by path.
///
/// Nested structs contribute `parent.child` keys and list items
/// `parent[index].child` keys.
pub fn field_violations(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    let mut violations = BTreeMap::new();
    collect_violations(errors, None, &mut violations);
    violations
}

fn collect_violations(
    errors: &ValidationErrors,
    prefix: Option<&str>,
    violations: &mut BTreeMap<String, Vec<String>>,
) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(list) => violations
                .entry(path)
                .or_default()
                .extend(list.iter().map(violation_message)),
            ValidationErrorsKind::Struct(nested) => {
                collect_violations(nested, Some(&path), violations)
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_violations(nested, Some(&format!("{path}[{index}]")), violations);
                }
            }
        }
    }
}

fn violation_message(violation: &ValidationError) -> String {
    match &violation.message {
        Some(message) => message.to_string(),
        None => violation.code.to_string(),
    }
}

/// Renders every violation message as `[first, second, ...]`.
pub fn render_field_errors(errors: &ValidationErrors) -> String {
    let messages: Vec<String> = field_violations(errors).into_values().flatten().collect();
    format!("[{}]", messages.join(", "))
}
