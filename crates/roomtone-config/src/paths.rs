//! Platform-specific config paths.
//!
//! - Linux: `~/.config/roomtone/roomtone.toml`
//! - macOS: `~/Library/Application Support/roomtone/roomtone.toml`
//! - Windows: `%APPDATA%\roomtone\roomtone.toml`

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "roomtone";

/// File name of the settings file.
const SETTINGS_FILE: &str = "roomtone.toml";

/// Returns the user-specific configuration directory.
///
/// Falls back to the current directory if the platform config directory
/// cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Path where [`Settings::resolve`](crate::Settings::resolve) looks when no
/// explicit path is given.
pub fn default_settings_path() -> PathBuf {
    user_config_dir().join(SETTINGS_FILE)
}
