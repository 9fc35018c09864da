use utoipa::OpenApi;

use crate::application::http::{
    health::handlers::{__path_get_health, __path_get_root},
    recipe::router::RecipeApiDoc,
    server::config::__path_get_config,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe Forge API",
        description = "Generate recipes from ingredient lists or photos"
    ),
    paths(get_root, get_health, get_config),
    nest(
        (path = "/api/recipes", api = RecipeApiDoc),
    )
)]
pub struct ApiDoc;
