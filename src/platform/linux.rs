// NexaBrowser platform paths for Linux
// Config: ~/.config/nexabrowser

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for NexaBrowser on Linux.
/// Uses `$XDG_CONFIG_HOME/nexabrowser` if set, otherwise `~/.config/nexabrowser`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("nexabrowser")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("nexabrowser")
    }
}
