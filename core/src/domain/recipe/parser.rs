//! Best-effort adapter from free-form model output to a [`Recipe`].
//!
//! Providers are asked for JSON but do not always comply. Parsing therefore
//! never fails: it tries a JSON object first, then labelled plain-text
//! sections, and finally returns a degraded recipe that carries the raw reply
//! as a single step with `metadata.degraded` set. A reply without any steps
//! is degraded too, even when it carried a title or ingredients.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::recipe::{
    entities::{Recipe, RecipeMetadata, RecipeSource},
    value_objects::RecipePreferences,
};

pub const DEGRADED_TITLE: &str = "Untitled Recipe";

const TITLE_KEYS: [&str; 3] = ["name", "title", "recipe_name"];
const STEP_KEYS: [&str; 4] = ["instructions", "steps", "method", "directions"];

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("number pattern is valid"));

static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[-*•]+|\d+[.)]|step\s+\d+[:.)]?)\s*").expect("list marker pattern is valid")
});

/// What the caller asked for; used to fill metadata the model left out.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    pub requested_ingredients: &'a [String],
    pub preferences: &'a RecipePreferences,
    pub source: RecipeSource,
}

pub fn parse_recipe(raw: &str, context: &ParseContext<'_>) -> Recipe {
    let json = match parse_json(raw, context) {
        Some(recipe) if !recipe.steps.is_empty() => return recipe,
        partial => partial,
    };
    let sections = match parse_sections(raw, context) {
        Some(recipe) if !recipe.steps.is_empty() => return recipe,
        partial => partial,
    };

    // A partial reply without steps still degrades, keeping any title it had.
    let title = json
        .into_iter()
        .chain(sections)
        .map(|partial| partial.title)
        .find(|title| title != DEGRADED_TITLE);

    warn!(
        reply_chars = raw.chars().count(),
        partial = title.is_some(),
        "Model reply had no usable recipe steps, returning degraded recipe"
    );
    let mut recipe = degraded(raw, context);
    if let Some(title) = title {
        recipe.title = title;
    }
    recipe
}

fn default_metadata(context: &ParseContext<'_>) -> RecipeMetadata {
    RecipeMetadata {
        description: None,
        prep_time_minutes: None,
        cook_time_minutes: None,
        total_time_minutes: None,
        servings: context.preferences.people,
        difficulty: None,
        cuisine: context.preferences.style.to_string(),
        diet_tags: context
            .preferences
            .diet
            .iter()
            .map(|d| d.as_str().to_string())
            .collect(),
        nutrition: None,
        tips: Vec::new(),
        source: context.source,
        degraded: false,
    }
}

fn degraded(raw: &str, context: &ParseContext<'_>) -> Recipe {
    let text = raw.trim();
    let mut metadata = default_metadata(context);
    metadata.degraded = true;

    Recipe {
        title: DEGRADED_TITLE.to_string(),
        ingredients: context.requested_ingredients.to_vec(),
        steps: if text.is_empty() {
            Vec::new()
        } else {
            vec![text.to_string()]
        },
        metadata,
    }
}

fn json_candidate(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    if let Some(start) = raw.find("```json") {
        let body = &raw[start + "```json".len()..];
        let end = body.find("```").unwrap_or(body.len());
        return Some(body[..end].trim());
    }

    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

fn parse_json(raw: &str, context: &ParseContext<'_>) -> Option<Recipe> {
    let candidate = json_candidate(raw)?;
    let value: Value = serde_json::from_str(candidate).ok()?;
    let mut object = value.as_object()?;

    // Some models wrap the payload: {"recipe": {...}}
    if !has_any(object, &TITLE_KEYS) {
        if let Some(inner) = object.get("recipe").and_then(Value::as_object) {
            object = inner;
        }
    }

    let title = string_field(object, &TITLE_KEYS);
    let ingredients = list_field(object, &["ingredients"]);
    let steps = list_field(object, &STEP_KEYS);
    if title.is_none() && steps.is_empty() {
        return None;
    }

    let mut metadata = default_metadata(context);
    metadata.description = string_field(object, &["description", "summary"]);
    metadata.prep_time_minutes = minutes_field(object, &["prep_time", "prep_time_minutes"]);
    metadata.cook_time_minutes = minutes_field(object, &["cook_time", "cook_time_minutes"]);
    metadata.total_time_minutes = minutes_field(object, &["total_time", "total_time_minutes"])
        .or_else(|| {
            metadata
                .prep_time_minutes
                .zip(metadata.cook_time_minutes)
                .map(|(prep, cook)| prep + cook)
        });
    if let Some(servings) = minutes_field(object, &["servings", "people", "serves"]) {
        if servings > 0 {
            metadata.servings = servings;
        }
    }
    metadata.difficulty = string_field(object, &["difficulty"]);
    if let Some(cuisine) = string_field(object, &["cuisine", "style"]) {
        metadata.cuisine = cuisine;
    }
    if has_any(object, &["diet_tags", "diet_info"]) {
        metadata.diet_tags = list_field(object, &["diet_tags", "diet_info"]);
    }
    metadata.nutrition = object.get("nutrition").and_then(text_of);
    metadata.tips = list_field(object, &["tips"]);

    Some(Recipe {
        title: title.unwrap_or_else(|| DEGRADED_TITLE.to_string()),
        ingredients: if ingredients.is_empty() {
            context.requested_ingredients.to_vec()
        } else {
            ingredients
        },
        steps,
        metadata,
    })
}

fn has_any(object: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().any(|key| object.contains_key(*key))
}

fn first<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| object.get(*key))
}

fn string_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    first(object, keys)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn minutes_field(object: &Map<String, Value>, keys: &[&str]) -> Option<u32> {
    match first(object, keys)? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => NUMBER.find(s).and_then(|m| m.as_str().parse().ok()),
        _ => None,
    }
}

fn list_field(object: &Map<String, Value>, keys: &[&str]) -> Vec<String> {
    match first(object, keys) {
        Some(Value::Array(items)) => items.iter().filter_map(text_of).collect(),
        Some(Value::String(text)) => text.lines().filter_map(clean_list_line).collect(),
        _ => Vec::new(),
    }
}

/// Render a JSON value as a single line of text. Objects such as
/// `{"quantity": "2", "unit": "cups", "name": "rice"}` are flattened.
fn text_of(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => {
            let parts: Vec<String> = ["quantity", "amount", "unit", "name", "item", "step", "text"]
                .iter()
                .filter_map(|key| map.get(*key))
                .filter_map(|v| match v {
                    Value::String(s) => Some(s.trim().to_string()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .filter(|s| !s.is_empty())
                .collect();
            if parts.is_empty() {
                value.to_string()
            } else {
                parts.join(" ")
            }
        }
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn clean_list_line(line: &str) -> Option<String> {
    let line = line.trim();
    let stripped = LIST_MARKER.replace(line, "");
    let stripped = stripped.trim().trim_matches('*').trim();
    (!stripped.is_empty()).then(|| stripped.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Ingredients,
    Steps,
    Tips,
    Other,
}

fn classify_heading(line: &str) -> Option<(Section, &str)> {
    let trimmed = line.trim().trim_start_matches('#').trim().trim_matches('*').trim();
    let (label, rest) = match trimmed.split_once(':') {
        Some((label, rest)) => (label.trim().trim_matches('*').trim(), rest.trim()),
        None => (trimmed, ""),
    };

    let section = match label.to_lowercase().as_str() {
        "ingredients" | "ingredient list" => Section::Ingredients,
        "instructions" | "steps" | "method" | "directions" | "preparation" => Section::Steps,
        "tips" | "notes" | "chef's tips" => Section::Tips,
        "description" | "nutrition" | "serves" | "servings" => Section::Other,
        _ => return None,
    };
    Some((section, rest))
}

fn title_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let lower = trimmed.to_lowercase();
    for prefix in ["title:", "name:", "recipe:", "recipe name:"] {
        if lower.starts_with(prefix) {
            let value = trimmed
                .get(prefix.len()..)
                .unwrap_or_default()
                .trim()
                .trim_matches('*')
                .trim();
            return (!value.is_empty()).then(|| value.to_string());
        }
    }
    if trimmed.starts_with('#') {
        let value = trimmed.trim_start_matches('#').trim().trim_matches('*').trim();
        return (!value.is_empty()).then(|| value.to_string());
    }
    None
}

fn parse_sections(raw: &str, context: &ParseContext<'_>) -> Option<Recipe> {
    let mut title: Option<String> = None;
    let mut preamble: Vec<String> = Vec::new();
    let mut ingredients = Vec::new();
    let mut steps = Vec::new();
    let mut tips = Vec::new();
    let mut section = Section::Preamble;

    for line in raw.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if let Some((next, inline)) = classify_heading(line) {
            section = next;
            if !inline.is_empty() {
                match section {
                    Section::Ingredients => ingredients.extend(
                        inline
                            .split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(str::to_string),
                    ),
                    Section::Steps => steps.push(inline.to_string()),
                    Section::Tips => tips.push(inline.to_string()),
                    Section::Preamble | Section::Other => {}
                }
            }
            continue;
        }

        if title.is_none() && section == Section::Preamble {
            if let Some(found) = title_line(line) {
                title = Some(found);
                continue;
            }
        }

        let Some(item) = clean_list_line(line) else {
            continue;
        };
        match section {
            Section::Preamble => preamble.push(item),
            Section::Ingredients => ingredients.push(item),
            Section::Steps => steps.push(item),
            Section::Tips => tips.push(item),
            Section::Other => {}
        }
    }

    if ingredients.is_empty() && steps.is_empty() {
        return None;
    }

    let title = title
        .or_else(|| {
            preamble
                .first()
                .filter(|line| line.chars().count() <= 100)
                .cloned()
        })
        .unwrap_or_else(|| DEGRADED_TITLE.to_string());

    let mut metadata = default_metadata(context);
    metadata.tips = tips;

    Some(Recipe {
        title,
        ingredients: if ingredients.is_empty() {
            context.requested_ingredients.to_vec()
        } else {
            ingredients
        },
        steps,
        metadata,
    })
}
