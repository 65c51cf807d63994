use serde::{Deserialize, Serialize};

/// Identifier for a tab. Allocated from an increasing counter, never reused.
pub type TabId = u64;

/// Represents a browser tab with its current state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tab {
    pub id: TabId,
    pub url: String,
    pub title: String,
    pub favicon: Option<String>,
}

/// A partial update to a tab. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct TabUpdate {
    pub url: Option<String>,
    pub title: Option<String>,
    pub favicon: Option<String>,
}

impl TabUpdate {
    pub fn url(url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
            ..Self::default()
        }
    }

    pub fn title(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }
}
