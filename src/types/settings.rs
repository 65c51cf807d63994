use serde::{Deserialize, Serialize};

/// User settings persisted as JSON in the config directory.
///
/// Unknown keys round-trip through `extra` so a newer settings file survives
/// a load/save cycle with an older build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub search_engine: SearchEngine,
    #[serde(default)]
    pub startup: StartupBehavior,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            search_engine: SearchEngine::Nexasearch,
            startup: StartupBehavior::Homepage,
            extra: serde_json::Map::new(),
        }
    }
}

/// Theme mode selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

/// Supported search engines. Unrecognized values fall back to NexaSearch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    Google,
    Bing,
    Yahoo,
    Duckduckgo,
    #[default]
    #[serde(other)]
    Nexasearch,
}

impl SearchEngine {
    /// Home page URL for this engine.
    pub fn home_url(&self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/",
            SearchEngine::Bing => "https://www.bing.com/",
            SearchEngine::Yahoo => "https://search.yahoo.com/",
            SearchEngine::Duckduckgo => "https://duckduckgo.com/",
            SearchEngine::Nexasearch => "https://northy2410.github.io/NexaSearch",
        }
    }

    /// Query URL prefix. The percent-encoded query is appended directly.
    pub fn search_prefix(&self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/search?q=",
            SearchEngine::Bing => "https://www.bing.com/search?q=",
            SearchEngine::Yahoo => "https://search.yahoo.com/search?p=",
            SearchEngine::Duckduckgo => "https://duckduckgo.com/?q=",
            SearchEngine::Nexasearch => "https://northy2410.github.io/NexaSearch?q=",
        }
    }
}

/// What the browser opens in the first tab on launch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartupBehavior {
    #[default]
    Homepage,
    Blank,
}
