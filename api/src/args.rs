use std::time::Duration;

use clap::{ArgAction, Parser, builder::BoolishValueParser};
use recipe_forge_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_LLM7_BASE_URL,
    DEFAULT_LLM7_IMAGE_MODEL, DEFAULT_LLM7_TEXT_MODEL, GeminiConfig, LLMConfig,
    RecipeForgeConfig, RetryConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "recipe-forge-api", version, about = "Recipe generation HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub gemini: GeminiArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[arg(
        long,
        env = "DEBUG",
        default_value = "false",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set,
        help = "Enable debug logging"
    )]
    pub debug: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LlmArgs {
    #[arg(long = "llm7-token", env = "LLM7_TOKEN", default_value = "", hide_env_values = true)]
    pub token: String,

    #[arg(long = "llm7-base-url", env = "LLM7_BASE_URL", default_value = DEFAULT_LLM7_BASE_URL)]
    pub base_url: String,

    #[arg(long = "llm7-text-model", env = "LLM7_TEXT_MODEL", default_value = DEFAULT_LLM7_TEXT_MODEL)]
    pub text_model: String,

    #[arg(long = "llm7-image-model", env = "LLM7_IMAGE_MODEL", default_value = DEFAULT_LLM7_IMAGE_MODEL)]
    pub image_model: String,

    #[arg(long = "llm7-timeout-secs", env = "LLM7_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,

    #[arg(long = "llm7-max-attempts", env = "LLM7_MAX_ATTEMPTS", default_value_t = 2)]
    pub max_attempts: u32,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GeminiArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub base_url: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(
        long = "log-filter",
        env = "LOG_FILTER",
        long_help = "Tracing filter directives, e.g. `info,recipe_forge_core=debug`. Defaults to `info`, or `debug` with --debug"
    )]
    pub filter: Option<String>,

    #[arg(
        long = "log-json",
        env = "LOG_JSON",
        default_value = "false",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set
    )]
    pub json: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "API_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "API_PORT", default_value_t = 8000)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value = "false",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

impl LogArgs {
    /// Filter directives: explicit filter, else `debug` in debug mode, else `info`.
    pub fn directives(&self, debug: bool) -> String {
        match self.filter.as_deref().map(str::trim) {
            Some(filter) if !filter.is_empty() => filter.to_string(),
            _ if debug => "debug".to_string(),
            _ => "info".to_string(),
        }
    }
}

impl From<&Args> for RecipeForgeConfig {
    fn from(args: &Args) -> Self {
        let gemini = args
            .gemini
            .api_key
            .as_ref()
            .filter(|key| !key.trim().is_empty())
            .map(|api_key| GeminiConfig {
                api_key: api_key.clone(),
                model: args.gemini.model.clone(),
                base_url: args.gemini.base_url.clone(),
            });

        RecipeForgeConfig {
            llm: LLMConfig {
                token: args.llm.token.clone(),
                base_url: args.llm.base_url.clone(),
                text_model: args.llm.text_model.clone(),
                image_model: args.llm.image_model.clone(),
                timeout: Duration::from_secs(args.llm.timeout_secs),
            },
            retry: RetryConfig {
                max_attempts: args.llm.max_attempts,
                ..RetryConfig::default()
            },
            gemini,
        }
    }
}
