use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "API information",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn get_root() -> Response<HealthResponse> {
    Response::OK(HealthResponse::ok("Welcome to Recipe Forge"))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn get_health() -> Response<HealthResponse> {
    Response::OK(HealthResponse::ok("API is running"))
}
