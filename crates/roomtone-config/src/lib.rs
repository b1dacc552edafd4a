//! Settings for the roomtone tools.
//!
//! Settings live in a small TOML file. Every field is optional; missing
//! fields take their defaults, and a missing file means all defaults.
//!
//! # Example
//!
//! ```rust,no_run
//! use roomtone_config::Settings;
//!
//! // Explicit path, or the user config file if present, or defaults
//! let settings = Settings::resolve(None).unwrap();
//! println!("target RT60: {} s", settings.target_rt60);
//! ```

mod error;
mod settings;

/// Platform-specific config paths.
pub mod paths;

pub use error::ConfigError;
pub use paths::{default_settings_path, user_config_dir};
pub use settings::{ReportFormat, Settings};
