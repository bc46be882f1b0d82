//! Configuration loading for the byeol launch screen.
//!
//! Settings live in a TOML file in the platform config directory. A
//! missing file is replaced with defaults, and every section falls back
//! field by field while unknown keys are ignored.

use std::path::{Path, PathBuf};

use byeol_core::{StarfieldOptions, parse_color};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

mod error;

pub use error::ConfigError;

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Starfield background settings.
    pub starfield: StarfieldSection,
    /// Launch screen settings.
    pub ui: UiSection,
}

/// Starfield background settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldSection {
    /// Star count per unit of screen area.
    pub density: f64,
    /// Multiplier applied to each star's randomized drift speed.
    pub speed_factor: f64,
    /// Star color: `#RGB`, `#RRGGBB`, or a named color.
    pub color: String,
}

/// Launch screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiSection {
    /// Headlines rotated in the hero panel.
    pub headlines: Vec<String>,
    /// Seconds between headline rotations.
    pub rotation_secs: u64,
    /// Signup spots opened per calendar day.
    pub spots_per_day: u32,
    /// Frame interval for the event loop in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for StarfieldSection {
    fn default() -> Self {
        Self {
            density: 0.05,
            speed_factor: 0.015,
            color: "#FFFFFF".to_string(),
        }
    }
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            headlines: vec![
                "The Night Sky, In Your Terminal".to_string(),
                "Ambient Starfields While You Work".to_string(),
                "Zero Distraction, Pure Drift".to_string(),
                "Early Access Opening Soon".to_string(),
            ],
            rotation_secs: 3,
            spots_per_day: 14,
            tick_rate_ms: 33,
        }
    }
}

impl Config {
    /// Platform config directory for byeol, if one can be determined.
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "byeol").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            toml::from_str(&contents).map_err(ConfigError::Parse)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.toml`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let serialized = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::Write)
    }

    /// Starfield tuning resolved from this config.
    ///
    /// An unparseable color keeps the default fill rather than failing the
    /// whole config.
    pub fn starfield_options(&self) -> StarfieldOptions {
        let mut opts = StarfieldOptions {
            density: self.starfield.density as f32,
            speed_factor: self.starfield.speed_factor as f32,
            ..StarfieldOptions::default()
        };
        if let Some(color) = parse_color(&self.starfield.color) {
            opts.color = color;
        }
        opts
    }
}
