//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::KeyBindings;
use super::stepping::StepCount;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Slider configuration
    #[serde(default)]
    pub slider: SliderSettings,
    /// Last selected level (0.0 to 1.0)
    #[serde(default)]
    pub level: f32,
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Custom keybindings
    #[serde(default)]
    pub keybindings: KeyBindings,
}

/// Slider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSettings {
    /// Number of levels, including off
    #[serde(default = "default_step_count")]
    pub step_count: f32,
    /// SVG used as the dot stencil; the built-in circle when unset
    #[serde(default)]
    pub dot_mask: Option<PathBuf>,
}

fn default_step_count() -> f32 {
    5.0
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            step_count: default_step_count(),
            dot_mask: None,
        }
    }
}

impl SliderSettings {
    /// Validated step count, falling back to the default when invalid
    pub fn step_count(&self) -> StepCount {
        match StepCount::new(self.step_count) {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!("Invalid step count in settings ({}), using default", e);
                StepCount::new(default_step_count()).unwrap_or_default()
            }
        }
    }
}

/// Display and interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    /// Move the dot without animation
    #[serde(default)]
    pub reduce_motion: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            reduce_motion: false,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "trivialtorch", "TrivialTorch")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::info!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("trivial-torch-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = temp_file("round_trip.json");
        let mut settings = Settings::default();
        settings.level = 0.75;
        settings.slider.step_count = 3.0;
        settings.slider.dot_mask = Some(PathBuf::from("/tmp/mask.svg"));
        settings.display.reduce_motion = true;

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "level": 0.5 }"#).unwrap();
        assert_eq!(settings.level, 0.5);
        assert_eq!(settings.slider, SliderSettings::default());
        assert!(settings.display.dark_mode);
        assert_eq!(settings.keybindings, KeyBindings::default());
    }

    #[test]
    fn test_invalid_step_count_falls_back() {
        let slider = SliderSettings {
            step_count: 1.0,
            dot_mask: None,
        };
        assert_eq!(slider.step_count().levels(), 5);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from_file(&temp_file("does_not_exist.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let path = temp_file("garbage.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();
        let err = Settings::load_from_file(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        let _ = std::fs::remove_file(&path);
    }
}
