use std::fs;
use std::path::Path;

use nexabrowser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use nexabrowser::types::settings::{SearchEngine, Settings, StartupBehavior, Theme};

fn temp_config_path() -> String {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json").to_string_lossy().to_string();
    // Leak the tempdir so it doesn't get cleaned up during the test
    std::mem::forget(dir);
    path
}

fn write_config(path: &str, content: &str) {
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.theme, Theme::System);
    assert_eq!(settings.search_engine, SearchEngine::Nexasearch);
    assert_eq!(settings.startup, StartupBehavior::Homepage);
    assert!(settings.extra.is_empty());
}

#[test]
fn test_load_missing_file_yields_defaults() {
    let mut engine = SettingsEngine::new(Some(temp_config_path()));
    assert_eq!(engine.load(), Settings::default());
}

#[test]
fn test_load_full_document() {
    let path = temp_config_path();
    write_config(
        &path,
        r#"{"theme": "dark", "searchEngine": "duckduckgo", "startup": "blank"}"#,
    );

    let mut engine = SettingsEngine::new(Some(path));
    let settings = engine.load();
    assert_eq!(settings.theme, Theme::Dark);
    assert_eq!(settings.search_engine, SearchEngine::Duckduckgo);
    assert_eq!(settings.startup, StartupBehavior::Blank);
}

#[test]
fn test_load_partial_document_fills_defaults() {
    let path = temp_config_path();
    write_config(&path, r#"{"theme": "light"}"#);

    let mut engine = SettingsEngine::new(Some(path));
    let settings = engine.load();
    assert_eq!(settings.theme, Theme::Light);
    assert_eq!(settings.search_engine, SearchEngine::Nexasearch);
    assert_eq!(settings.startup, StartupBehavior::Homepage);
}

#[test]
fn test_load_garbage_yields_defaults() {
    let path = temp_config_path();
    write_config(&path, "not json at all");

    let mut engine = SettingsEngine::new(Some(path.clone()));
    assert_eq!(engine.load(), Settings::default());

    // A JSON document that is not an object is treated the same way
    write_config(&path, "[1, 2, 3]");
    assert_eq!(engine.load(), Settings::default());
}

#[test]
fn test_unknown_keys_survive_load() {
    let path = temp_config_path();
    write_config(&path, r#"{"theme": "dark", "sidebarWidth": 240}"#);

    let mut engine = SettingsEngine::new(Some(path));
    let settings = engine.load();
    assert_eq!(settings.extra["sidebarWidth"], serde_json::json!(240));
}

#[test]
fn test_save_merges_patch_over_document() {
    let path = temp_config_path();
    write_config(&path, r#"{"theme": "dark", "sidebarWidth": 240}"#);

    let mut engine = SettingsEngine::new(Some(path.clone()));
    engine.load();
    let saved = engine.save(&serde_json::json!({"searchEngine": "yahoo"}));
    assert_eq!(saved.search_engine, SearchEngine::Yahoo);
    assert_eq!(saved.theme, Theme::Dark);

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["theme"], serde_json::json!("dark"));
    assert_eq!(doc["searchEngine"], serde_json::json!("yahoo"));
    assert_eq!(doc["sidebarWidth"], serde_json::json!(240));
}

#[test]
fn test_save_creates_file_and_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join("nested")
        .join("deeper")
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    std::mem::forget(dir);

    let mut engine = SettingsEngine::new(Some(path.clone()));
    engine.save(&serde_json::json!({"theme": "light"}));
    assert!(Path::new(&path).exists());

    let mut engine2 = SettingsEngine::new(Some(path));
    assert_eq!(engine2.load().theme, Theme::Light);
}

#[test]
fn test_save_invalid_patch_keeps_previous_settings() {
    let path = temp_config_path();
    let mut engine = SettingsEngine::new(Some(path));
    engine.load();

    // theme must be a string; the merged document no longer deserializes
    let saved = engine.save(&serde_json::json!({"theme": 42}));
    assert_eq!(saved.theme, Theme::System);
    assert_eq!(engine.settings().theme, Theme::System);
}

#[test]
fn test_settings_accessor_tracks_last_load() {
    let path = temp_config_path();
    write_config(&path, r#"{"searchEngine": "google"}"#);

    let mut engine = SettingsEngine::new(Some(path));
    assert_eq!(engine.settings().search_engine, SearchEngine::Nexasearch);
    engine.load();
    assert_eq!(engine.settings().search_engine, SearchEngine::Google);
}

#[test]
fn test_unrecognized_enum_values_fall_back() {
    let path = temp_config_path();
    write_config(&path, r#"{"searchEngine": "askjeeves"}"#);

    let mut engine = SettingsEngine::new(Some(path));
    assert_eq!(engine.load().search_engine, SearchEngine::Nexasearch);
}

#[test]
fn test_serialization_uses_camel_case() {
    let json = serde_json::to_value(Settings::default()).unwrap();
    assert!(json.get("searchEngine").is_some());
    assert!(json.get("search_engine").is_none());
    assert_eq!(json["theme"], serde_json::json!("system"));
    assert_eq!(json["startup"], serde_json::json!("homepage"));
}
