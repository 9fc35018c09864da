use recipe_forge_core::domain::recipe::DietType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DietsResponse {
    pub diets: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/diets",
    tag = "recipes",
    summary = "List supported diet types",
    responses(
        (status = 200, body = DietsResponse)
    )
)]
pub async fn get_diets() -> Response<DietsResponse> {
    Response::OK(DietsResponse {
        diets: DietType::identifiers()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}
