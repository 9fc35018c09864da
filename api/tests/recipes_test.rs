mod common;

use std::io::Cursor;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use common::{Behavior, RecipeForgeContext};
use image::{DynamicImage, ImageFormat, RgbImage};
use recipe_forge_core::domain::{
    common::{DEFAULT_LLM7_IMAGE_MODEL, DEFAULT_LLM7_TEXT_MODEL},
    image::MAX_IMAGE_BYTES,
};
use serde_json::{Value, json};
use test_context::test_context;

fn png_bytes() -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(32, 24, image::Rgb([180, 90, 20])));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

fn field_names(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_health_endpoints(ctx: &mut RecipeForgeContext) {
    for path in ["/", "/health", "/api/recipes/health"] {
        let response = ctx.server.get(path).await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["status"], "ok", "{path}");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_list_styles_and_diets(ctx: &mut RecipeForgeContext) {
    let styles = ctx.server.get("/api/recipes/styles").await.json::<Value>();
    let styles = styles["styles"].as_array().unwrap();
    assert_eq!(styles.len(), 16);
    assert_eq!(styles[0], "Pakistani");
    assert!(styles.contains(&json!("Any")));

    let diets = ctx.server.get("/api/recipes/diets").await.json::<Value>();
    assert_eq!(
        diets["diets"],
        json!(["vegetarian", "vegan", "non_veg", "gluten_free", "dairy_free"])
    );
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_config_never_exposes_the_token(ctx: &mut RecipeForgeContext) {
    let response = ctx.server.get("/config").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["text_model"], DEFAULT_LLM7_TEXT_MODEL);
    assert_eq!(body["fallback_enabled"], false);
    assert!(!response.text().contains("test-token"));
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_openapi_document_lists_recipe_routes(ctx: &mut RecipeForgeContext) {
    let response = ctx.server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert!(body["paths"]["/api/recipes/from-ingredients"].is_object());
    assert!(body["paths"]["/api/recipes/from-image"].is_object());
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_generate_from_ingredients(ctx: &mut RecipeForgeContext) {
    let response = ctx
        .server
        .post("/api/recipes/from-ingredients")
        .json(&json!({
            "ingredients": ["chicken", "rice"],
            "style": "Pakistani",
            "people": 2
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["title"], "Chicken Pulao");
    assert!(!body["ingredients"].as_array().unwrap().is_empty());
    assert_eq!(body["steps"].as_array().unwrap().len(), 3);
    assert_eq!(body["metadata"]["servings"], 2);
    assert_eq!(body["metadata"]["total_time_minutes"], 55);
    assert_eq!(body["metadata"]["source"], "ingredients");
    assert_eq!(body["metadata"]["degraded"], false);

    let requests = ctx.provider.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["model"], DEFAULT_LLM7_TEXT_MODEL);
    assert_eq!(requests[0]["messages"][0]["role"], "system");
    let prompt = requests[0]["messages"][1]["content"].as_str().unwrap();
    assert!(prompt.contains("chicken, rice"));
    assert!(prompt.contains("Serves 2 people"));
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_empty_ingredients_are_rejected(ctx: &mut RecipeForgeContext) {
    let response = ctx
        .server
        .post("/api/recipes/from-ingredients")
        .json(&json!({"ingredients": []}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["status"], 422);
    assert_eq!(field_names(&body), vec!["ingredients"]);
    assert!(ctx.provider.requests().is_empty());
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_only_kitchen_equipment_is_rejected(ctx: &mut RecipeForgeContext) {
    let response = ctx
        .server
        .post("/api/recipes/from-ingredients")
        .json(&json!({"ingredients": ["pan", "knife"]}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(field_names(&response.json::<Value>()), vec!["ingredients"]);
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_unknown_style_names_the_field(ctx: &mut RecipeForgeContext) {
    let response = ctx
        .server
        .post("/api/recipes/from-ingredients")
        .json(&json!({"ingredients": ["chicken"], "style": "Martian"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(field_names(&response.json::<Value>()), vec!["style"]);
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_unknown_diet_and_people_out_of_range(ctx: &mut RecipeForgeContext) {
    let response = ctx
        .server
        .post("/api/recipes/from-ingredients")
        .json(&json!({"ingredients": ["chicken"], "diet": "carnivore"}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(field_names(&response.json::<Value>()), vec!["diet"]);

    let response = ctx
        .server
        .post("/api/recipes/from-ingredients")
        .json(&json!({"ingredients": ["chicken"], "people": 13}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(field_names(&response.json::<Value>()), vec!["people"]);
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_malformed_json_is_unprocessable(ctx: &mut RecipeForgeContext) {
    let response = ctx
        .server
        .post("/api/recipes/from-ingredients")
        .json(&json!({"ingredients": "chicken"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["code"], "E_VALIDATION");
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_provider_timeout_is_a_bad_gateway(ctx: &mut RecipeForgeContext) {
    ctx.provider.respond_with(Behavior::Hang);

    let response = ctx
        .server
        .post("/api/recipes/from-ingredients")
        .json(&json!({"ingredients": ["chicken"]}))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "E_UPSTREAM");
    assert!(body.get("errors").is_none());
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_provider_rejecting_credentials_is_internal(ctx: &mut RecipeForgeContext) {
    ctx.provider.respond_with(Behavior::Status(401));

    let response = ctx
        .server
        .post("/api/recipes/from-ingredients")
        .json(&json!({"ingredients": ["chicken"]}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!response.text().contains("stub failure"));
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_provider_rate_limit_is_unavailable(ctx: &mut RecipeForgeContext) {
    ctx.provider.respond_with(Behavior::Status(429));

    let response = ctx
        .server
        .post("/api/recipes/from-ingredients")
        .json(&json!({"ingredients": ["chicken"]}))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_provider_server_error_is_a_bad_gateway(ctx: &mut RecipeForgeContext) {
    ctx.provider.respond_with(Behavior::Status(500));

    let response = ctx
        .server
        .post("/api/recipes/from-ingredients")
        .json(&json!({"ingredients": ["chicken"]}))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_unstructured_reply_returns_degraded_recipe(ctx: &mut RecipeForgeContext) {
    let reply = "Sorry, I can only talk about the weather today.";
    ctx.provider.respond_with(Behavior::Reply(reply.to_string()));

    let response = ctx
        .server
        .post("/api/recipes/from-ingredients")
        .json(&json!({"ingredients": ["chicken", "rice"]}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["title"], "Untitled Recipe");
    assert_eq!(body["ingredients"], json!(["chicken", "rice"]));
    assert_eq!(body["steps"], json!([reply]));
    assert_eq!(body["metadata"]["degraded"], true);
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_generate_from_image(ctx: &mut RecipeForgeContext) {
    let form = MultipartForm::new()
        .add_text("style", "Italian")
        .add_text("diet", "vegetarian")
        .add_text("people", "3")
        .add_part(
            "image",
            Part::bytes(png_bytes())
                .file_name("fridge.png")
                .mime_type("image/png"),
        );

    let response = ctx.server.post("/api/recipes/from-image").multipart(form).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["title"], "Chicken Pulao");
    assert_eq!(body["metadata"]["source"], "image");

    let requests = ctx.provider.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["model"], DEFAULT_LLM7_IMAGE_MODEL);
    let parts = &requests[0]["messages"][0]["content"];
    assert!(parts[0]["text"].as_str().unwrap().contains("Serves 3 people"));
    assert!(
        parts[1]["image_url"]["url"]
            .as_str()
            .unwrap()
            .starts_with("data:image/jpeg;base64,")
    );
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_non_image_upload_is_rejected(ctx: &mut RecipeForgeContext) {
    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(b"just some notes".to_vec())
            .file_name("notes.txt")
            .mime_type("text/plain"),
    );

    let response = ctx.server.post("/api/recipes/from-image").multipart(form).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(field_names(&response.json::<Value>()), vec!["image"]);
    assert!(ctx.provider.requests().is_empty());
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_missing_image_field_is_rejected(ctx: &mut RecipeForgeContext) {
    let form = MultipartForm::new().add_text("style", "Pakistani");

    let response = ctx.server.post("/api/recipes/from-image").multipart(form).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(field_names(&response.json::<Value>()), vec!["image"]);
}

#[test_context(RecipeForgeContext)]
#[tokio::test]
async fn test_oversized_images_are_rejected(ctx: &mut RecipeForgeContext) {
    // Just over the image limit is caught by request validation, well over it
    // by the body limit on the route.
    for size in [MAX_IMAGE_BYTES + 1, 60 * 1024 * 1024] {
        let form = MultipartForm::new().add_part(
            "image",
            Part::bytes(vec![0u8; size])
                .file_name("huge.png")
                .mime_type("image/png"),
        );

        let response = ctx.server.post("/api/recipes/from-image").multipart(form).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(field_names(&response.json::<Value>()), vec!["image"], "{size}");
    }
    assert!(ctx.provider.requests().is_empty());
}
