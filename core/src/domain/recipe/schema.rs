use serde_json::json;

/// Returns the JSON schema providers with structured output support are
/// asked to follow. Mirrors the object requested in the prompt.
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "description": { "type": "string" },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "instructions": {
                "type": "array",
                "items": { "type": "string" }
            },
            "prep_time": { "type": "integer" },
            "cook_time": { "type": "integer" },
            "total_time": { "type": "integer" },
            "servings": { "type": "integer" },
            "difficulty": {
                "type": "string",
                "enum": ["Easy", "Medium", "Hard"]
            },
            "cuisine": { "type": "string" },
            "diet_tags": {
                "type": "array",
                "items": { "type": "string" }
            },
            "nutrition": { "type": "string" },
            "tips": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["name", "ingredients", "instructions", "servings", "cuisine"]
    })
}
