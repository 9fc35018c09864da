use axum::{Json, extract::State};
use recipe_forge_core::domain::{
    image::MAX_IMAGE_BYTES,
    recipe::{MAX_INGREDIENTS, MAX_PEOPLE, MIN_PEOPLE},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Config {
    pub app_name: String,
    pub app_version: String,
    pub text_model: String,
    pub image_model: String,
    pub fallback_enabled: bool,
    pub max_ingredients: usize,
    pub min_people: u32,
    pub max_people: u32,
    pub max_image_bytes: usize,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Public runtime configuration",
    responses(
        (status = 200, body = Config)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Json<Config> {
    let args = &state.args;
    let fallback_enabled = args
        .gemini
        .api_key
        .as_deref()
        .is_some_and(|key| !key.trim().is_empty());

    Json(Config {
        app_name: env!("CARGO_PKG_NAME").to_string(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        text_model: args.llm.text_model.clone(),
        image_model: args.llm.image_model.clone(),
        fallback_enabled,
        max_ingredients: MAX_INGREDIENTS,
        min_people: MIN_PEOPLE,
        max_people: MAX_PEOPLE,
        max_image_bytes: MAX_IMAGE_BYTES,
    })
}
