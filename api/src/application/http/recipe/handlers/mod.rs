pub mod generate_from_image;
pub mod generate_from_ingredients;
pub mod get_diets;
pub mod get_recipe_health;
pub mod get_styles;
