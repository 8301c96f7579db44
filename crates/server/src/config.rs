use shared_types::{AiConfig, AppConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and `.env`, then store the parsed config in the global
/// `OnceLock`. Only the first call has effect.
///
/// If the file is missing or unparseable, every setting takes its default.
pub fn load_config() {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::warn!(path = CONFIG_PATH, error = %e, "config file not found, using defaults");
                AppConfig::default()
            }
        };
        tracing::info!(features = ?config.features, model = %config.ai.model, "configuration loaded");
        config
    });
}

/// Parse config text, falling back to defaults on malformed input.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::error!(path = CONFIG_PATH, error = %e, "failed to parse config, using defaults");
        AppConfig::default()
    })
}

fn config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

/// The loaded feature flags. All-off if `load_config()` hasn't run yet.
pub fn feature_flags() -> &'static FeatureFlags {
    &config().features
}

pub fn ai_config() -> &'static AiConfig {
    &config().ai
}

/// Key for the remote text-generation service, if configured.
pub fn ai_api_key() -> Option<String> {
    std::env::var("AI_API_KEY").ok().filter(|key| !key.trim().is_empty())
}
