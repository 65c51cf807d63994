// NexaBrowser platform paths for Windows
// Config: %APPDATA%/NexaBrowser

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for NexaBrowser on Windows.
/// `%APPDATA%/NexaBrowser`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("NexaBrowser")
}
