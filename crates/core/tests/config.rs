use classify_core::config::{self, DEFAULT_INTENT_UPSTREAM, DEFAULT_PORT};
use classify_core::rules::{load_table, IconRuleSet};
use classify_core::{ClassifierKind, IconCategory};
use std::fs;
use tempfile::tempdir;

#[test]
fn file_values_override_defaults() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("gateway.toml");
    fs::write(
        &path,
        r#"
        [server]
        intent_upstream_url = "http://upstream.local/predict"
        request_timeout_secs = 0

        [client]
        base_url = "https://api.example.com"

        [client.endpoints]
        emotion = "/v2/emotion"
        "#,
    )
    .unwrap();

    let cfg = config::load(Some(path.to_str().unwrap())).unwrap();

    assert_eq!(cfg.server.intent_upstream_url, "http://upstream.local/predict");
    assert_eq!(cfg.server.timeout(), None);
    assert_eq!(
        cfg.client.endpoint_url(ClassifierKind::EmotionText),
        "https://api.example.com/v2/emotion"
    );
    assert_eq!(
        cfg.client.endpoint_url(ClassifierKind::IntentText),
        "https://api.example.com/api/predict/intent"
    );
    if std::env::var_os("PORT").is_none() {
        assert_eq!(cfg.server.port, DEFAULT_PORT);
    }
}

#[test]
fn defaults_match_the_stock_deployment() {
    let cfg = config::AppConfig::default();
    assert_eq!(cfg.server.port, 3001);
    assert_eq!(cfg.server.intent_upstream_url, DEFAULT_INTENT_UPSTREAM);
    assert_eq!(cfg.client.base_url, "http://localhost:3001");
    assert!(cfg.icons.rules_path.is_none());
}

#[test]
fn emotion_rules_can_be_replaced_from_toml() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("icons.toml");
    fs::write(
        &path,
        r#"
        fallback = "neutral"

        [[rules]]
        keywords = ["fear", "scared"]
        category = "dissatisfied"

        [[rules]]
        keywords = ["surprise"]
        category = "very_satisfied"
        "#,
    )
    .unwrap();

    let table = load_table(&path).unwrap();
    assert_eq!(table.rules.len(), 2);
    assert_eq!(table.resolve("Scared stiff"), IconCategory::Dissatisfied);
    assert_eq!(table.resolve("happy"), IconCategory::Neutral);

    let set = IconRuleSet::load(Some(&path)).unwrap();
    assert_eq!(set.resolve(ClassifierKind::EmotionText, "SURPRISE"), IconCategory::VerySatisfied);
    assert_eq!(set.resolve(ClassifierKind::Image, "fear"), IconCategory::FlightTakeoff);
}

#[test]
fn missing_rules_file_is_an_error() {
    let temp = tempdir().unwrap();
    assert!(IconRuleSet::load(Some(&temp.path().join("absent.toml"))).is_err());
}
