use tracing::{debug, info};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    image::preprocess_image,
    recipe::{
        entities::{Recipe, RecipeSource},
        parser::{ParseContext, parse_recipe},
        ports::{LLMClient, RecipeService},
        prompt::{build_image_prompt, build_ingredients_prompt},
        value_objects::{ImageRecipeRequest, RecipeRequest},
    },
};

impl<LLM> RecipeService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn generate_from_ingredients(&self, request: RecipeRequest) -> Result<Recipe, CoreError> {
        let prompt = build_ingredients_prompt(&request);
        let preferences = request.preferences();
        info!(
            ingredients = request.ingredients().len(),
            style = %preferences.style,
            people = preferences.people,
            "Generating recipe from ingredients"
        );

        let raw_response = self.llm_client.generate(prompt, None).await?;
        debug!(reply_chars = raw_response.len(), "Model replied");

        let recipe = parse_recipe(
            &raw_response,
            &ParseContext {
                requested_ingredients: request.ingredients(),
                preferences,
                source: RecipeSource::Ingredients,
            },
        );

        Ok(recipe)
    }

    async fn generate_from_image(&self, request: ImageRecipeRequest) -> Result<Recipe, CoreError> {
        let image = request.image().clone();
        let encoded = tokio::task::spawn_blocking(move || preprocess_image(&image))
            .await
            .map_err(|e| {
                tracing::error!("Image preprocessing task failed: {}", e);
                CoreError::InternalServerError
            })??;

        let prompt = build_image_prompt(&request);
        let preferences = request.preferences();
        info!(
            width = encoded.width,
            height = encoded.height,
            style = %preferences.style,
            people = preferences.people,
            "Generating recipe from image"
        );

        let raw_response = self.llm_client.generate(prompt, Some(encoded)).await?;
        debug!(reply_chars = raw_response.len(), "Model replied");

        let recipe = parse_recipe(
            &raw_response,
            &ParseContext {
                requested_ingredients: &[],
                preferences,
                source: RecipeSource::Image,
            },
        );

        Ok(recipe)
    }
}
