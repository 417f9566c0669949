use utoipa::OpenApi;

use crate::presentation::http::handlers::health::HealthStatus;
use crate::presentation::http::problem::ProblemResponse;

#[derive(OpenApi)]
#[openapi(
    paths(crate::presentation::http::handlers::health::health),
    components(schemas(HealthStatus, ProblemResponse)),
    tags(
        (name = "health", description = "Health check API")
    )
)]
pub struct ApiDoc;
