//! GridSketch Settings Crate
//!
//! Handles application configuration files and their validation.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, DisplaySettings, LoggingSettings, LOG_LEVELS};
pub use error::{SettingsError, SettingsResult};
