// NexaBrowser Settings Engine
// Persists user settings as a JSON file at the platform-specific config path.
// Loading never fails from the caller's point of view: any read or parse
// problem is logged and defaults are used. Saving shallow-merges a partial
// patch over the on-disk document so unknown keys survive.

use std::fs;
use std::path::Path;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::Settings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Settings;
    fn save(&mut self, partial: &serde_json::Value) -> Settings;
    fn settings(&self) -> &Settings;
    fn config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: Settings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => {
                let config_dir = platform::get_config_dir();
                config_dir
                    .join("settings.json")
                    .to_string_lossy()
                    .to_string()
            }
        };

        Self {
            config_path,
            settings: Settings::default(),
        }
    }

    /// Reads the raw settings document from disk.
    fn read_document(&self) -> Result<serde_json::Map<String, serde_json::Value>, SettingsError> {
        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;
        let value: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        match value {
            serde_json::Value::Object(map) => Ok(map),
            _ => Err(SettingsError::SerializationError(
                "Config file is not a JSON object".to_string(),
            )),
        }
    }

    /// Writes the settings document as pretty-printed JSON, creating the
    /// config directory if needed.
    fn write_document(
        &self,
        doc: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }
        let json = serde_json::to_string_pretty(doc).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;
        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;
        Ok(())
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// A missing file yields defaults. A malformed or unreadable file is
    /// logged and also yields defaults; the error is never surfaced.
    fn load(&mut self) -> Settings {
        if !Path::new(&self.config_path).exists() {
            self.settings = Settings::default();
            return self.settings.clone();
        }

        match self.read_document() {
            Ok(doc) => {
                match serde_json::from_value(serde_json::Value::Object(doc)) {
                    Ok(settings) => self.settings = settings,
                    Err(e) => {
                        eprintln!("[SETTINGS] Invalid settings values, using defaults: {}", e);
                        self.settings = Settings::default();
                    }
                }
            }
            Err(e) => {
                eprintln!("[SETTINGS] Load failed, using defaults: {}", e);
                self.settings = Settings::default();
            }
        }
        self.settings.clone()
    }

    /// Shallow-merges `partial` over the on-disk document and persists.
    ///
    /// Top-level keys from the patch replace keys in the stored document;
    /// keys absent from the patch are untouched, including keys this build
    /// does not know about. In-memory settings are updated before the write,
    /// so a failed write is logged but does not roll back state.
    fn save(&mut self, partial: &serde_json::Value) -> Settings {
        let mut doc = match self.read_document() {
            Ok(doc) => doc,
            Err(_) => {
                // Missing or unreadable file: start from the current settings
                match serde_json::to_value(&self.settings) {
                    Ok(serde_json::Value::Object(map)) => map,
                    _ => serde_json::Map::new(),
                }
            }
        };

        if let serde_json::Value::Object(patch) = partial {
            for (key, value) in patch {
                doc.insert(key.clone(), value.clone());
            }
        }

        match serde_json::from_value(serde_json::Value::Object(doc.clone())) {
            Ok(settings) => self.settings = settings,
            Err(e) => eprintln!("[SETTINGS] Merged settings invalid, keeping previous: {}", e),
        }

        if let Err(e) = self.write_document(&doc) {
            eprintln!("[SETTINGS] Save failed: {}", e);
        }

        self.settings.clone()
    }

    /// Returns a reference to the current in-memory settings.
    fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the path to the config file.
    fn config_path(&self) -> &str {
        &self.config_path
    }
}
