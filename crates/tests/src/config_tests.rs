use pretty_assertions::assert_eq;
use server::config::{feature_flags, parse_config};
use shared_types::{AiConfig, FeatureFlags};

#[test]
fn partial_file_keeps_defaults_for_missing_keys() {
    let config = parse_config(
        r#"
        [features]
        notifications = true
        "#,
    );
    assert!(config.features.notifications);
    assert!(!config.features.ai_insights);
    assert_eq!(config.ai, AiConfig::default());
}

#[test]
fn custom_endpoint_builds_generate_url() {
    let config = parse_config(
        r#"
        [features]
        ai_insights = true

        [ai]
        endpoint = "http://localhost:9000/models/"
        model = "test-model"
        "#,
    );
    assert!(config.features.ai_insights);
    assert_eq!(
        config.ai.generate_url(),
        "http://localhost:9000/models/test-model:generateContent"
    );
}

#[test]
fn malformed_file_disables_everything() {
    let config = parse_config("[features\nai_insights = ");
    assert_eq!(config.features, FeatureFlags::default());
}

#[test]
fn flags_are_off_before_config_is_loaded() {
    assert_eq!(feature_flags(), &FeatureFlags::default());
}

#[test]
fn shipped_config_file_parses() {
    let contents = include_str!("../../../config.toml");
    let config = parse_config(contents);
    assert!(config.features.notifications);
    assert_eq!(config.ai, AiConfig::default());
}
