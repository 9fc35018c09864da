use crate::application::http::{
    health::handlers::HealthResponse, server::api_entities::response::Response,
};

#[utoipa::path(
    get,
    path = "/health",
    tag = "recipes",
    summary = "Recipe routes health check",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn get_recipe_health() -> Response<HealthResponse> {
    Response::OK(HealthResponse::ok("Recipe API is running"))
}
