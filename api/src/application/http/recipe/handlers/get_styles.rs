use recipe_forge_core::domain::recipe::CountryStyle;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StylesResponse {
    pub styles: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/styles",
    tag = "recipes",
    summary = "List supported cuisine styles",
    responses(
        (status = 200, body = StylesResponse)
    )
)]
pub async fn get_styles() -> Response<StylesResponse> {
    Response::OK(StylesResponse {
        styles: CountryStyle::identifiers()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}
