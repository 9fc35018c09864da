use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateRecipeRequest {
    #[validate(length(
        min = 1,
        max = 20,
        message = "ingredients must contain between 1 and 20 items"
    ))]
    #[schema(example = json!(["chicken", "rice", "onion"]))]
    pub ingredients: Vec<String>,

    #[schema(example = "Pakistani")]
    pub style: Option<String>,

    /// Comma separated diet identifiers, e.g. `vegetarian,gluten_free`.
    #[schema(example = "gluten_free")]
    pub diet: Option<String>,

    #[validate(range(min = 1, max = 12, message = "people must be between 1 and 12"))]
    #[schema(example = 4)]
    pub people: Option<u32>,
}

/// Multipart form accepted by the image endpoint. Documentation only: the
/// handler reads the fields one by one.
#[derive(Debug, ToSchema)]
pub struct GenerateRecipeFromImageForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    pub style: Option<String>,
    pub diet: Option<String>,
    pub people: Option<u32>,
}
