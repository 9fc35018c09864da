use axum::extract::{
    Multipart, State,
    multipart::{Field, MultipartRejection},
};
use bytes::Bytes;
use recipe_forge_core::domain::recipe::{
    ImageRecipeRequest, Recipe, RecipePreferences, RecipeService,
};

use crate::application::http::{
    recipe::validators::GenerateRecipeFromImageForm,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Default)]
struct ImageForm {
    image: Option<(Bytes, Option<String>)>,
    style: Option<String>,
    diet: Option<String>,
    people: Option<u32>,
}

async fn text(field: Field<'_>, name: &str) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::validation(name, e.body_text()))
}

async fn read_form(mut multipart: Multipart) -> Result<ImageForm, ApiError> {
    let mut form = ImageForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await?;
                form.image = Some((data, content_type));
            }
            "style" => form.style = Some(text(field, "style").await?),
            "diet" => form.diet = Some(text(field, "diet").await?),
            "people" => {
                let value = text(field, "people").await?;
                let value = value.trim();
                if !value.is_empty() {
                    let people = value
                        .parse::<u32>()
                        .map_err(|_| ApiError::validation("people", "people must be an integer"))?;
                    form.people = Some(people);
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

#[utoipa::path(
    post,
    path = "/from-image",
    tag = "recipes",
    summary = "Generate a recipe from a photo of ingredients",
    description = "Identifies the ingredients visible in the uploaded image and returns a recipe using them",
    request_body(content = GenerateRecipeFromImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = Recipe),
        (status = 422, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse),
        (status = 503, body = ApiErrorResponse)
    )
)]
pub async fn generate_from_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<Recipe>, ApiError> {
    let form = read_form(multipart?).await?;

    let (image, content_type) = form
        .image
        .ok_or_else(|| ApiError::validation("image", "image file is required"))?;

    let preferences =
        RecipePreferences::parse(form.style.as_deref(), form.diet.as_deref(), form.people)?;
    let request = ImageRecipeRequest::new(image, content_type.as_deref(), preferences)?;

    let recipe = state.service.generate_from_image(request).await?;

    Ok(Response::OK(recipe))
}
