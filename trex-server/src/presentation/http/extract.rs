use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::app_error::AppError;
use crate::domain::error::DomainError;

/// JSON body that has passed its `validator` constraints.
///
/// Undecodable bodies are reported as `BadRequest` with the rejection text;
/// constraint violations as a validation failure.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(request, state)
            .await
            .map_err(|rejection| DomainError::bad_request(rejection.body_text()))?;

        value.validate()?;
        Ok(Self(value))
    }
}
