use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use axum_test::TestServer;
use recipe_forge_api::{
    application::http::server::http_server::{router, state},
    args::{Args, GeminiArgs, LlmArgs, LogArgs, ServerArgs},
};
use recipe_forge_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_LLM7_IMAGE_MODEL,
    DEFAULT_LLM7_TEXT_MODEL,
};
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub const WELL_FORMED_RECIPE: &str = r#"{
    "name": "Chicken Pulao",
    "description": "Fragrant rice cooked with chicken",
    "ingredients": ["500g chicken", "2 cups basmati rice", "1 onion, sliced"],
    "instructions": ["Soak the rice", "Brown the onion and chicken", "Add rice and water, cook on dum"],
    "prep_time": 15,
    "cook_time": "40 minutes",
    "servings": 2,
    "difficulty": "Medium",
    "cuisine": "Pakistani",
    "diet_tags": [],
    "tips": ["Rest for 10 minutes before serving"]
}"#;

/// How the stub provider answers the next chat completion calls.
#[derive(Debug, Clone)]
pub enum Behavior {
    Reply(String),
    Status(u16),
    Hang,
}

#[derive(Clone)]
pub struct StubProvider {
    behavior: Arc<Mutex<Behavior>>,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl StubProvider {
    pub fn respond_with(&self, behavior: Behavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

async fn chat_completions(
    State(stub): State<StubProvider>,
    Json(body): Json<Value>,
) -> Response {
    stub.requests.lock().unwrap().push(body);
    let behavior = stub.behavior.lock().unwrap().clone();

    match behavior {
        Behavior::Reply(content) => Json(json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": content}}
            ]
        }))
        .into_response(),
        Behavior::Status(status) => (
            StatusCode::from_u16(status).unwrap(),
            Json(json!({"error": {"message": "stub failure"}})),
        )
            .into_response(),
        Behavior::Hang => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            StatusCode::OK.into_response()
        }
    }
}

async fn spawn_stub_provider() -> (StubProvider, String) {
    let stub = StubProvider {
        behavior: Arc::new(Mutex::new(Behavior::Reply(WELL_FORMED_RECIPE.to_string()))),
        requests: Arc::new(Mutex::new(Vec::new())),
    };

    let app = Router::new()
        .route("/v1/chat/completions", post(chat_completions))
        .with_state(stub.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (stub, format!("http://{}/v1", addr))
}

pub fn test_args(base_url: String) -> Args {
    Args {
        llm: LlmArgs {
            token: "test-token".to_string(),
            base_url,
            text_model: DEFAULT_LLM7_TEXT_MODEL.to_string(),
            image_model: DEFAULT_LLM7_IMAGE_MODEL.to_string(),
            timeout_secs: 1,
            max_attempts: 1,
        },
        gemini: GeminiArgs {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        },
        log: LogArgs {
            filter: None,
            json: false,
        },
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["*".to_string()],
            metrics_enabled: false,
        },
        debug: false,
    }
}

pub struct RecipeForgeContext {
    pub server: TestServer,
    pub provider: StubProvider,
}

impl AsyncTestContext for RecipeForgeContext {
    async fn setup() -> Self {
        let (provider, base_url) = spawn_stub_provider().await;
        let app_state = state(Arc::new(test_args(base_url))).unwrap();
        let server = TestServer::new(router(app_state).unwrap()).unwrap();

        Self { server, provider }
    }
}
