use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional collaborators are active.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Every field defaults to `false` so that a
/// missing or incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Call the remote text-generation service for AI insights.
    /// When off, insight panels show the canned text.
    #[serde(default)]
    pub ai_insights: bool,
    /// Show the notification bell and flyout in the header bar.
    #[serde(default)]
    pub notifications: bool,
}

/// Settings for the remote text-generation service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiConfig {
    #[serde(default = "AiConfig::default_endpoint")]
    pub endpoint: String,
    #[serde(default = "AiConfig::default_model")]
    pub model: String,
}

impl AiConfig {
    fn default_endpoint() -> String {
        "https://generativelanguage.googleapis.com/v1beta/models".to_string()
    }

    fn default_model() -> String {
        "gemini-1.5-flash".to_string()
    }

    /// Full `generateContent` URL for the configured model.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            model: Self::default_model(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub ai: AiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.ai_insights);
        assert!(!flags.notifications);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.features, FeatureFlags::default());
        assert_eq!(config.ai, AiConfig::default());
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            notifications = true

            [ai]
            model = "gemini-2.0-flash"
            "#,
        )
        .unwrap();
        assert!(config.features.notifications);
        assert!(!config.features.ai_insights);
        assert_eq!(config.ai.model, "gemini-2.0-flash");
        assert_eq!(config.ai.endpoint, AiConfig::default().endpoint);
    }

    #[test]
    fn generate_url_joins_endpoint_and_model() {
        let ai = AiConfig {
            endpoint: "http://localhost:9000/models/".to_string(),
            model: "tiny".to_string(),
        };
        assert_eq!(
            ai.generate_url(),
            "http://localhost:9000/models/tiny:generateContent"
        );
    }
}
