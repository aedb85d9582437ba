//! Configuration file handling for the hourglass animation.
//!
//! The config lives at `<config dir>/hourglass/config.toml`. Every field is
//! optional; a missing file means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use hourglass_core::{ACCENT_PALETTE, DisplayMode, HourglassTheme, Paint};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_FILE: &str = "config.toml";

/// Refresh rate bounds.
const MIN_FPS: u32 = 1;
const MAX_FPS: u32 = 120;

/// Errors that can occur while loading or saving the config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display mode flag. Anything but `"light"` is dark.
    pub mode: DisplayMode,
    /// Accent paint for the sand mask and outline.
    pub accent: Paint,
    /// Refresh ticks per second.
    pub fps: u32,
    /// Largest glyph side, in terminal columns.
    pub max_size: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Dark,
            accent: ACCENT_PALETTE[0],
            fps: 30,
            max_size: 60,
        }
    }
}

impl Config {
    /// Path of the config file in the platform config directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("", "", "hourglass")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from `path`, falling back to defaults when the file does not
    /// exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config.normalized())
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text).map_err(io_err)?;
        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Clamp out-of-range values.
    pub fn normalized(mut self) -> Self {
        self.fps = self.fps.clamp(MIN_FPS, MAX_FPS);
        self.max_size = self.max_size.max(2);
        self
    }

    /// The theme described by this config.
    pub fn theme(&self) -> HourglassTheme {
        HourglassTheme::new(self.mode, self.accent)
    }

    /// Store a theme back into this config.
    pub fn set_theme(&mut self, theme: &HourglassTheme) {
        self.mode = theme.mode;
        self.accent = theme.accent;
    }

    /// Milliseconds between refresh ticks.
    pub fn tick_ms(&self) -> u64 {
        1000 / u64::from(self.fps.clamp(MIN_FPS, MAX_FPS))
    }
}
