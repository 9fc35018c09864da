use axum::extract::State;
use recipe_forge_core::domain::recipe::{Recipe, RecipePreferences, RecipeRequest, RecipeService};

use crate::application::http::{
    recipe::validators::GenerateRecipeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/from-ingredients",
    tag = "recipes",
    summary = "Generate a recipe from ingredients",
    description = "Builds a prompt from the ingredient list and preferences, asks the model for a recipe and returns it in a fixed shape",
    request_body = GenerateRecipeRequest,
    responses(
        (status = 200, body = Recipe),
        (status = 422, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse),
        (status = 503, body = ApiErrorResponse)
    )
)]
pub async fn generate_from_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeRequest>,
) -> Result<Response<Recipe>, ApiError> {
    let preferences = RecipePreferences::parse(
        payload.style.as_deref(),
        payload.diet.as_deref(),
        payload.people,
    )?;
    let request = RecipeRequest::new(&payload.ingredients, preferences)?;

    let recipe = state.service.generate_from_ingredients(request).await?;

    Ok(Response::OK(recipe))
}
