use serde::{Deserialize, Serialize};

/// Outcome of an update check. Always produced, even on failure: errors are
/// reported through the `error` field rather than a failed call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCheckResult {
    pub current_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UpdateCheckResult {
    /// A result carrying only an error message.
    pub fn failure(current_version: &str, message: &str) -> Self {
        Self {
            current_version: current_version.to_string(),
            latest_version: None,
            update_available: None,
            download_url: None,
            error: Some(message.to_string()),
        }
    }
}
