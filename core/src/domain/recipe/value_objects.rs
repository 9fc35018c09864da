use bytes::Bytes;

use crate::domain::{
    common::entities::app_errors::CoreError,
    image::MAX_IMAGE_BYTES,
    recipe::{
        entities::{CountryStyle, DietType},
        helpers::filter_ingredients,
    },
};

pub const DEFAULT_PEOPLE: u32 = 4;
pub const MIN_PEOPLE: u32 = 1;
pub const MAX_PEOPLE: u32 = 12;
pub const MAX_INGREDIENTS: usize = 20;

/// Style, diet and serving count shared by both request kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipePreferences {
    pub style: CountryStyle,
    pub diet: Vec<DietType>,
    pub people: u32,
}

impl Default for RecipePreferences {
    fn default() -> Self {
        Self {
            style: CountryStyle::default(),
            diet: Vec::new(),
            people: DEFAULT_PEOPLE,
        }
    }
}

impl RecipePreferences {
    /// Build preferences from raw request fields. `diet` is a comma separated
    /// list of diet identifiers.
    pub fn parse(
        style: Option<&str>,
        diet: Option<&str>,
        people: Option<u32>,
    ) -> Result<Self, CoreError> {
        let style = match style.map(str::trim).filter(|s| !s.is_empty()) {
            Some(value) => value.parse::<CountryStyle>()?,
            None => CountryStyle::default(),
        };

        let mut diets = Vec::new();
        for entry in diet
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
        {
            let parsed = entry.parse::<DietType>()?;
            if !diets.contains(&parsed) {
                diets.push(parsed);
            }
        }

        let people = people.unwrap_or(DEFAULT_PEOPLE);
        if !(MIN_PEOPLE..=MAX_PEOPLE).contains(&people) {
            return Err(CoreError::validation(
                "people",
                format!("must be between {} and {}", MIN_PEOPLE, MAX_PEOPLE),
            ));
        }

        Ok(Self {
            style,
            diet: diets,
            people,
        })
    }
}

/// A validated request to cook something from a list of ingredients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRequest {
    ingredients: Vec<String>,
    preferences: RecipePreferences,
}

impl RecipeRequest {
    pub fn new(ingredients: &[String], preferences: RecipePreferences) -> Result<Self, CoreError> {
        if ingredients.is_empty() {
            return Err(CoreError::validation(
                "ingredients",
                "at least one ingredient is required",
            ));
        }
        if ingredients.len() > MAX_INGREDIENTS {
            return Err(CoreError::validation(
                "ingredients",
                format!("at most {} ingredients are allowed", MAX_INGREDIENTS),
            ));
        }

        let ingredients = filter_ingredients(ingredients);
        if ingredients.is_empty() {
            return Err(CoreError::validation(
                "ingredients",
                "no valid ingredients found",
            ));
        }

        Ok(Self {
            ingredients,
            preferences,
        })
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn preferences(&self) -> &RecipePreferences {
        &self.preferences
    }
}

/// A validated request to cook something from a photo of ingredients. The
/// bytes are only size checked here; decoding happens in the image
/// preprocessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecipeRequest {
    image: Bytes,
    preferences: RecipePreferences,
}

impl ImageRecipeRequest {
    pub fn new(
        image: Bytes,
        content_type: Option<&str>,
        preferences: RecipePreferences,
    ) -> Result<Self, CoreError> {
        if image.is_empty() {
            return Err(CoreError::validation("image", "image cannot be empty"));
        }
        if image.len() > MAX_IMAGE_BYTES {
            return Err(CoreError::validation(
                "image",
                format!("image too large, maximum size is {} bytes", MAX_IMAGE_BYTES),
            ));
        }
        if let Some(content_type) = content_type {
            if !content_type.trim().to_lowercase().starts_with("image/") {
                return Err(CoreError::validation("image", "file must be an image"));
            }
        }

        Ok(Self { image, preferences })
    }

    pub fn image(&self) -> &Bytes {
        &self.image
    }

    pub fn preferences(&self) -> &RecipePreferences {
        &self.preferences
    }
}
