//! Settings file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::paths::default_settings_path;

/// How analysis results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable table.
    #[default]
    Text,
    /// One JSON object.
    Json,
}

/// User settings.
///
/// # TOML Format
///
/// ```toml
/// target_rt60 = 0.4
/// bits_per_sample = 24
/// report = "json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Compensator target in seconds when none is given on the command line.
    pub target_rt60: f32,

    /// Bit depth for written WAV files (16, 24 or 32).
    pub bits_per_sample: u16,

    /// Report output format.
    pub report: ReportFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_rt60: 0.5,
            bits_per_sample: 32,
            report: ReportFormat::Text,
        }
    }
}

impl Settings {
    /// Load and validate settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Parse and validate settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(toml_str)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Pick the settings to run with.
    ///
    /// An explicit path must exist. Without one, the user settings file is
    /// used if present, otherwise defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let path = default_settings_path();
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save the settings to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the settings to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.target_rt60.is_finite() && self.target_rt60 > 0.0) {
            return Err(ConfigError::Validation {
                field: "target_rt60",
                reason: format!("{} s must be a positive number", self.target_rt60),
            });
        }
        if !matches!(self.bits_per_sample, 16 | 24 | 32) {
            return Err(ConfigError::Validation {
                field: "bits_per_sample",
                reason: format!("{} is not one of 16, 24, 32", self.bits_per_sample),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml("report = \"json\"\n").unwrap();
        assert_eq!(settings.report, ReportFormat::Json);
        assert_eq!(settings.target_rt60, 0.5);
        assert_eq!(settings.bits_per_sample, 32);
    }

    #[test]
    fn rejects_non_positive_target() {
        let err = Settings::from_toml("target_rt60 = 0.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation {
                field: "target_rt60",
                ..
            }
        ));
    }

    #[test]
    fn rejects_odd_bit_depth() {
        let err = Settings::from_toml("bits_per_sample = 20").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation {
                field: "bits_per_sample",
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_report_format() {
        let err = Settings::from_toml("report = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("roomtone.toml");
        let settings = Settings {
            target_rt60: 0.35,
            bits_per_sample: 24,
            report: ReportFormat::Json,
        };

        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempdir().unwrap();
        let err = Settings::resolve(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }
}
