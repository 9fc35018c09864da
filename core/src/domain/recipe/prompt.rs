use crate::domain::recipe::{
    entities::{CountryStyle, DietType},
    value_objects::{ImageRecipeRequest, RecipePreferences, RecipeRequest},
};

const CHEF_PERSONA: &str = "You are a professional Pakistani chef with expertise in South Asian and international cuisines.";

const PAKISTANI_GUIDANCE: &str = "Pakistani cuisine focus: Create authentic Pakistani dishes with traditional flavors. Use these guidelines:
- Traditional spices: red chili powder, turmeric (haldi), coriander powder (dhania), cumin (zeera), garam masala
- Common ingredients: ginger-garlic paste, green chilies, fresh coriander (hara dhania), yogurt, onions
- Cooking techniques: bhuna (saute until the oil separates), dum cooking, slow cooking for rich flavors
- Authentic dishes: biryani, karahi, qorma, pulao, kebabs, curry, haleem, nihari
- Use traditional measurements where applicable (e.g. \"1 cup\" for rice, \"1 tsp\" for spices)";

/// Prompt asking the model to cook with the listed ingredients.
pub fn build_ingredients_prompt(request: &RecipeRequest) -> String {
    let preferences = request.preferences();
    let task = format!(
        "Create an authentic, delicious recipe using these ingredients: {}",
        request.ingredients().join(", ")
    );
    let requirements = [
        "Use traditional cooking techniques and authentic spice combinations",
        "Include precise measurements and detailed instructions",
        "Make it practical for home cooking",
        "Include helpful cooking tips and techniques",
    ];

    render(&task, preferences, &requirements)
}

/// Prompt asking the model to identify the ingredients in the attached
/// image first and then cook with them.
pub fn build_image_prompt(request: &ImageRecipeRequest) -> String {
    let preferences = request.preferences();
    let task = "Analyze the attached image and:\n\n\
        1. IDENTIFY all visible ingredients in the image (be thorough: look for spices, vegetables, meat, grains)\n\
        2. CREATE an authentic, delicious recipe using those ingredients";
    let requirements = [
        "Use traditional cooking techniques and authentic spice combinations",
        "Include precise measurements in both metric and local units where applicable",
        "Provide detailed, step-by-step instructions",
        "Include cooking tips for best results",
    ];

    render(task, preferences, &requirements)
}

fn render(task: &str, preferences: &RecipePreferences, requirements: &[&str]) -> String {
    let mut lines = Vec::new();
    if let Some(diet) = diet_line(&preferences.diet) {
        lines.push(format!("- {}", diet));
    }
    lines.push(format!("- Serves {} people", preferences.people));
    lines.extend(requirements.iter().map(|r| format!("- {}", r)));

    format!(
        "{persona} {task}\n\n\
        {guidance}\n\n\
        Requirements:\n\
        {requirements}\n\n\
        Please respond with a valid JSON object in this EXACT format:\n\
        {format}\n\n\
        Make sure the response is valid JSON only, no additional text.",
        persona = CHEF_PERSONA,
        task = task,
        guidance = style_guidance(preferences.style),
        requirements = lines.join("\n"),
        format = output_format(preferences),
    )
}

fn style_guidance(style: CountryStyle) -> String {
    match style {
        CountryStyle::Pakistani => PAKISTANI_GUIDANCE.to_string(),
        CountryStyle::Indian | CountryStyle::Bangladeshi => format!(
            "{} cuisine with authentic spices and traditional cooking methods",
            style
        ),
        CountryStyle::Any => {
            "Any cuisine: pick whichever tradition suits the ingredients best".to_string()
        }
        _ => format!(
            "{} cuisine with authentic flavors and traditional cooking methods",
            style
        ),
    }
}

fn diet_line(diet: &[DietType]) -> Option<String> {
    if diet.is_empty() {
        return None;
    }
    let labels: Vec<String> = diet.iter().map(DietType::label).collect();
    Some(format!("Diet preferences: {}", labels.join(", ")))
}

fn output_format(preferences: &RecipePreferences) -> String {
    let diet_tags: Vec<String> = preferences
        .diet
        .iter()
        .map(|d| format!("\"{}\"", d.as_str()))
        .collect();

    format!(
        r#"{{
    "name": "Recipe Name (include local name if applicable)",
    "description": "Rich description highlighting flavors, origin, and what makes this dish special",
    "ingredients": [
        "ingredient 1 with precise measurement (e.g. '500g chicken, cut into pieces')",
        "ingredient 2 with precise measurement (e.g. '2 tsp red chili powder')"
    ],
    "instructions": [
        "Detailed step 1 with cooking techniques and timing",
        "Detailed step 2 with visual cues and tips"
    ],
    "prep_time": 15,
    "cook_time": 30,
    "total_time": 45,
    "servings": {people},
    "difficulty": "Easy",
    "cuisine": "{style}",
    "diet_tags": [{diet_tags}],
    "nutrition": "Nutritional information including calories and key nutrients",
    "tips": [
        "Professional cooking tip for best results",
        "Storage and reheating instructions",
        "Serving suggestions and variations"
    ]
}}"#,
        people = preferences.people,
        style = preferences.style,
        diet_tags = diet_tags.join(", "),
    )
}
