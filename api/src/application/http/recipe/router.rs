use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use recipe_forge_core::domain::image::MAX_IMAGE_BYTES;
use utoipa::OpenApi;

use super::handlers::{
    generate_from_image::{__path_generate_from_image, generate_from_image},
    generate_from_ingredients::{__path_generate_from_ingredients, generate_from_ingredients},
    get_diets::{__path_get_diets, get_diets},
    get_recipe_health::{__path_get_recipe_health, get_recipe_health},
    get_styles::{__path_get_styles, get_styles},
};
use crate::application::http::server::app_state::AppState;

/// Room for the multipart boundaries and text fields around the image.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(paths(
    get_recipe_health,
    get_styles,
    get_diets,
    generate_from_ingredients,
    generate_from_image
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/recipes/health", root_path),
            get(get_recipe_health),
        )
        .route(&format!("{}/api/recipes/styles", root_path), get(get_styles))
        .route(&format!("{}/api/recipes/diets", root_path), get(get_diets))
        .route(
            &format!("{}/api/recipes/from-ingredients", root_path),
            post(generate_from_ingredients),
        )
        .route(
            &format!("{}/api/recipes/from-image", root_path),
            post(generate_from_image).layer(DefaultBodyLimit::max(
                MAX_IMAGE_BYTES + MULTIPART_OVERHEAD_BYTES,
            )),
        )
}
