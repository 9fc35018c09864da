use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Cuisine the generated recipe should follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub enum CountryStyle {
    #[default]
    Pakistani,
    Indian,
    Bangladeshi,
    Chinese,
    Turkish,
    Arabic,
    Persian,
    Afghan,
    Italian,
    Mexican,
    Thai,
    Japanese,
    French,
    American,
    Mediterranean,
    Any,
}

impl CountryStyle {
    pub const ALL: [CountryStyle; 16] = [
        CountryStyle::Pakistani,
        CountryStyle::Indian,
        CountryStyle::Bangladeshi,
        CountryStyle::Chinese,
        CountryStyle::Turkish,
        CountryStyle::Arabic,
        CountryStyle::Persian,
        CountryStyle::Afghan,
        CountryStyle::Italian,
        CountryStyle::Mexican,
        CountryStyle::Thai,
        CountryStyle::Japanese,
        CountryStyle::French,
        CountryStyle::American,
        CountryStyle::Mediterranean,
        CountryStyle::Any,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CountryStyle::Pakistani => "Pakistani",
            CountryStyle::Indian => "Indian",
            CountryStyle::Bangladeshi => "Bangladeshi",
            CountryStyle::Chinese => "Chinese",
            CountryStyle::Turkish => "Turkish",
            CountryStyle::Arabic => "Arabic",
            CountryStyle::Persian => "Persian",
            CountryStyle::Afghan => "Afghan",
            CountryStyle::Italian => "Italian",
            CountryStyle::Mexican => "Mexican",
            CountryStyle::Thai => "Thai",
            CountryStyle::Japanese => "Japanese",
            CountryStyle::French => "French",
            CountryStyle::American => "American",
            CountryStyle::Mediterranean => "Mediterranean",
            CountryStyle::Any => "Any",
        }
    }

    pub fn identifiers() -> Vec<&'static str> {
        Self::ALL.iter().map(|style| style.as_str()).collect()
    }
}

impl fmt::Display for CountryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryStyle {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| {
                CoreError::validation(
                    "style",
                    format!(
                        "unsupported style '{}', expected one of: {}",
                        value,
                        Self::identifiers().join(", ")
                    ),
                )
            })
    }
}

/// Dietary restriction applied to the recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    Vegetarian,
    Vegan,
    NonVeg,
    GlutenFree,
    DairyFree,
}

impl DietType {
    pub const ALL: [DietType; 5] = [
        DietType::Vegetarian,
        DietType::Vegan,
        DietType::NonVeg,
        DietType::GlutenFree,
        DietType::DairyFree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Vegetarian => "vegetarian",
            DietType::Vegan => "vegan",
            DietType::NonVeg => "non_veg",
            DietType::GlutenFree => "gluten_free",
            DietType::DairyFree => "dairy_free",
        }
    }

    /// Human wording used inside prompts, e.g. `gluten free`.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn identifiers() -> Vec<&'static str> {
        Self::ALL.iter().map(|diet| diet.as_str()).collect()
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietType {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|diet| diet.as_str() == normalized)
            .ok_or_else(|| {
                CoreError::validation(
                    "diet",
                    format!(
                        "unsupported diet '{}', expected one of: {}",
                        value.trim(),
                        Self::identifiers().join(", ")
                    ),
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecipeSource {
    Ingredients,
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub metadata: RecipeMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time_minutes: Option<u32>,
    pub servings: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    pub cuisine: String,
    pub diet_tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<String>,
    pub tips: Vec<String>,
    pub source: RecipeSource,
    /// Set when the model reply could not be read as a structured recipe.
    pub degraded: bool,
}
