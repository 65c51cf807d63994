use nexabrowser::services::update_checker::UpdateChecker;
use nexabrowser::types::update::UpdateCheckResult;

#[test]
fn test_current_version_is_build_version() {
    let checker = UpdateChecker::new();
    assert_eq!(checker.current_version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_newer_release_reports_update() {
    let checker = UpdateChecker::new();
    let result = checker.interpret_response(
        200,
        r#"{"tag_name": "v99.0.0", "html_url": "https://github.com/Northy2410/NexaBrowser/releases/tag/v99.0.0"}"#,
    );
    assert_eq!(result.update_available, Some(true));
    assert_eq!(result.latest_version.as_deref(), Some("99.0.0"));
    assert_eq!(
        result.download_url.as_deref(),
        Some("https://github.com/Northy2410/NexaBrowser/releases/tag/v99.0.0")
    );
    assert!(result.error.is_none());
}

#[test]
fn test_same_version_reports_no_update() {
    let checker = UpdateChecker::new();
    let body = format!(r#"{{"tag_name": "v{}"}}"#, env!("CARGO_PKG_VERSION"));
    let result = checker.interpret_response(200, &body);
    assert_eq!(result.update_available, Some(false));
    assert!(result.error.is_none());
}

#[test]
fn test_v_prefix_is_stripped() {
    let checker = UpdateChecker::new();
    let result = checker.interpret_response(200, r#"{"tag_name": "v2.5.0"}"#);
    assert_eq!(result.latest_version.as_deref(), Some("2.5.0"));

    let bare = checker.interpret_response(200, r#"{"tag_name": "2.5.0"}"#);
    assert_eq!(bare.latest_version.as_deref(), Some("2.5.0"));
}

#[test]
fn test_any_differing_tag_counts_as_update() {
    // The comparison is string inequality, so an older tag also reads
    // as an available update
    let checker = UpdateChecker::new();
    let result = checker.interpret_response(200, r#"{"tag_name": "v0.0.1"}"#);
    assert_eq!(result.update_available, Some(true));
}

#[test]
fn test_404_means_no_releases() {
    let checker = UpdateChecker::new();
    let result = checker.interpret_response(404, "");
    assert_eq!(
        result.error.as_deref(),
        Some("No releases found. Check your GitHub repository settings.")
    );
    assert_eq!(result.update_available, None);
    assert_eq!(result.latest_version, None);
    assert_eq!(result.current_version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_other_statuses_are_network_errors() {
    let checker = UpdateChecker::new();
    for status in [403u16, 500, 503] {
        let result = checker.interpret_response(status, "{}");
        assert_eq!(
            result.error.as_deref(),
            Some("Unable to check for updates. Please check your internet connection."),
            "status {}",
            status
        );
    }
}

#[test]
fn test_malformed_body_reports_the_parse_error() {
    let checker = UpdateChecker::new();
    let garbage = checker.interpret_response(200, "<!DOCTYPE html>");
    let message = garbage.error.expect("parse failure must carry an error");
    assert!(!message.is_empty());
    // The parse error's own text, not the canned connection message
    assert_ne!(
        message,
        "Unable to check for updates. Please check your internet connection."
    );
}

#[test]
fn test_body_without_tag_is_a_network_error() {
    let checker = UpdateChecker::new();
    let missing_tag = checker.interpret_response(200, r#"{"html_url": "https://example.com"}"#);
    assert_eq!(
        missing_tag.error.as_deref(),
        Some("Unable to check for updates. Please check your internet connection.")
    );
}

#[test]
fn test_missing_html_url_is_tolerated() {
    let checker = UpdateChecker::new();
    let result = checker.interpret_response(200, r#"{"tag_name": "v3.0.0"}"#);
    assert!(result.error.is_none());
    assert_eq!(result.download_url, None);
}

#[test]
fn test_failure_serialization_omits_absent_fields() {
    let result = UpdateCheckResult::failure("1.0.0", "boom");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["error"], serde_json::json!("boom"));
    assert_eq!(json["currentVersion"], serde_json::json!("1.0.0"));
    assert!(json.get("updateAvailable").is_none());
    assert!(json.get("latestVersion").is_none());
    assert!(json.get("downloadUrl").is_none());
}

#[test]
fn test_success_serialization_uses_camel_case() {
    let checker = UpdateChecker::new();
    let result = checker.interpret_response(200, r#"{"tag_name": "v9.9.9", "html_url": "https://example.com"}"#);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["updateAvailable"], serde_json::json!(true));
    assert_eq!(json["latestVersion"], serde_json::json!("9.9.9"));
    assert_eq!(json["downloadUrl"], serde_json::json!("https://example.com"));
    assert!(json.get("error").is_none());
}
