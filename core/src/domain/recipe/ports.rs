use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    image::EncodedImage,
    recipe::{
        entities::Recipe,
        value_objects::{ImageRecipeRequest, RecipeRequest},
    },
};

/// LLM Client trait for calling the upstream model provider. Implementations
/// choose the model: text-only prompts and prompts with an attached image may
/// go to different models.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate(
        &self,
        prompt: String,
        image: Option<EncodedImage>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe generation business logic
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_from_ingredients(
        &self,
        request: RecipeRequest,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn generate_from_image(
        &self,
        request: ImageRecipeRequest,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;
}
