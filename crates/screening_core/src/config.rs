//! Application settings read from an optional `config.toml`.

use crate::error::{CoreError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub log_level: String,
    /// Longest side of the preview texture in pixels.
    pub preview_max_side: u32,
    pub show_disclaimer: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            preview_max_side: 1024,
            show_disclaimer: true,
        }
    }
}

impl AppConfig {
    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(CoreError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&raw).map_err(|source| CoreError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses `log_level`. The caller falls back to INFO on error and reports
    /// it once a subscriber is installed.
    pub fn tracing_level(&self) -> Result<tracing::Level> {
        self.log_level
            .parse()
            .map_err(|_| CoreError::LogLevel(self.log_level.clone()))
    }
}
