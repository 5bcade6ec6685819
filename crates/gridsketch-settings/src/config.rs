//! Configuration and settings management for GridSketch
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats; the default file lives in the platform config
//! directory.
//!
//! Configuration is organized into logical sections:
//! - Canvas limits and an optional canvas created at startup
//! - Display preferences (glyphs, prompt, banner)
//! - Logging level and format

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log levels accepted by `logging.level`.
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Canvas settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Largest width accepted by `new`
    pub max_width: usize,
    /// Largest height accepted by `new`
    pub max_height: usize,
    /// Width of a canvas created at startup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_width: Option<usize>,
    /// Height of a canvas created at startup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_height: Option<usize>,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            max_width: 200,
            max_height: 200,
            initial_width: None,
            initial_height: None,
        }
    }
}

impl CanvasSettings {
    /// The startup canvas size, when both dimensions are configured.
    pub fn initial_size(&self) -> Option<(usize, usize)> {
        self.initial_width.zip(self.initial_height)
    }
}

/// Display preference settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Character printed for a set cell
    pub set_glyph: char,
    /// Character printed for a clear cell
    pub clear_glyph: char,
    /// Prompt printed before each command
    pub prompt: String,
    /// Print the welcome line on startup
    pub show_banner: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            set_glyph: '*',
            clear_glyph: '.',
            prompt: "> ".to_string(),
            show_banner: true,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter level, overridden by `RUST_LOG`
    pub level: String,
    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Canvas settings
    pub canvas: CanvasSettings,
    /// Display preferences
    pub display: DisplaySettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Location of the per-user config file.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("gridsketch").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Loads `path` when given, otherwise the default file if it exists,
    /// otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Ok(default) if default.exists() => Self::load_from_file(&default),
            _ => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.canvas.max_width == 0 {
            return Err(SettingsError::invalid(
                "canvas.max_width",
                "must be greater than zero",
            ));
        }
        if self.canvas.max_height == 0 {
            return Err(SettingsError::invalid(
                "canvas.max_height",
                "must be greater than zero",
            ));
        }

        match (self.canvas.initial_width, self.canvas.initial_height) {
            (Some(width), Some(height)) => {
                if width == 0 || width > self.canvas.max_width {
                    return Err(SettingsError::invalid(
                        "canvas.initial_width",
                        format!("must be between 1 and {}", self.canvas.max_width),
                    ));
                }
                if height == 0 || height > self.canvas.max_height {
                    return Err(SettingsError::invalid(
                        "canvas.initial_height",
                        format!("must be between 1 and {}", self.canvas.max_height),
                    ));
                }
            }
            (None, None) => {}
            _ => {
                return Err(SettingsError::invalid(
                    "canvas.initial_width",
                    "initial_width and initial_height must be set together",
                ));
            }
        }

        for (key, glyph) in [
            ("display.set_glyph", self.display.set_glyph),
            ("display.clear_glyph", self.display.clear_glyph),
        ] {
            if glyph.is_control() {
                return Err(SettingsError::invalid(key, "must be a printable character"));
            }
        }
        if self.display.set_glyph == self.display.clear_glyph {
            return Err(SettingsError::invalid(
                "display.clear_glyph",
                "must differ from display.set_glyph",
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(SettingsError::invalid(
                "logging.level",
                format!("expected one of {}", LOG_LEVELS.join(", ")),
            ));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
