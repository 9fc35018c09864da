use std::sync::LazyLock;

use regex::Regex;

const DESCRIPTIVE_PREFIXES: [&str; 5] = ["fresh", "organic", "chopped", "diced", "sliced"];

const NON_FOOD_ITEMS: [&str; 12] = [
    "plate",
    "bowl",
    "knife",
    "spoon",
    "fork",
    "cutting board",
    "table",
    "counter",
    "kitchen",
    "pan",
    "pot",
    "container",
];

static MEASUREMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d+(?:\.\d+)?\s*(?:cups?|tbsp|tsp|oz|lbs?|grams?|kg|ml|liters?)\b")
        .expect("measurement pattern is valid")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Normalize a user supplied ingredient name: lowercase, no leading
/// descriptive adjective, no quantities.
pub fn clean_ingredient_name(ingredient: &str) -> String {
    let mut cleaned = ingredient.trim().to_lowercase();

    for prefix in DESCRIPTIVE_PREFIXES {
        if let Some(rest) = cleaned.strip_prefix(prefix) {
            if rest.starts_with(' ') {
                cleaned = rest.trim().to_string();
            }
        }
    }

    let without_measurements = MEASUREMENT.replace_all(&cleaned, "");
    WHITESPACE
        .replace_all(without_measurements.trim(), " ")
        .into_owned()
}

/// Clean every ingredient and drop entries that are too short or that name
/// kitchen equipment instead of food.
pub fn filter_ingredients(ingredients: &[String]) -> Vec<String> {
    ingredients
        .iter()
        .map(|ingredient| clean_ingredient_name(ingredient))
        .filter(|ingredient| ingredient.chars().count() >= 2)
        .filter(|ingredient| !names_equipment(ingredient))
        .collect()
}

fn names_equipment(ingredient: &str) -> bool {
    let padded = format!(" {} ", ingredient);
    NON_FOOD_ITEMS
        .iter()
        .any(|item| padded.contains(&format!(" {} ", item)))
}
