//! Configuration loading for sysdash.
//!
//! `~/.sysdash/config.toml`, entirely optional: a missing file means
//! defaults (built-in demo data, Unicode glyphs). Environment variables
//! override the file: `SYSDASH_ENDPOINT` for the base URL, `SYSDASH_ASCII`
//! for ASCII-only glyphs.

use std::time::Duration;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use sysdash_types::ui::UiOptions;

use sysdash_client::DEMO_DELAY;

#[derive(Debug, Default, Deserialize)]
pub struct DashConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Base URL of the users service. Absent: serve built-in demo data.
    pub endpoint: Option<String>,
    /// Artificial delay for the demo source, in milliseconds.
    pub demo_delay_ms: Option<u64>,
    /// Use ASCII-only glyphs for the sort indicator and spinner.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl DashConfig {
    /// Loads the config file if one exists. `Ok(None)` when there is no
    /// file (or no home directory); errors only for an unreadable or
    /// unparseable file that does exist.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(source) => Err(ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolved base URL: `SYSDASH_ENDPOINT` wins over the config file;
    /// `None` selects the built-in demo source.
    #[must_use]
    pub fn endpoint(&self) -> Option<String> {
        env::var("SYSDASH_ENDPOINT")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.app.as_ref().and_then(|app| app.endpoint.clone()))
    }

    /// Artificial delay for the demo source.
    #[must_use]
    pub fn demo_delay(&self) -> Duration {
        self.app
            .as_ref()
            .and_then(|app| app.demo_delay_ms)
            .map_or(DEMO_DELAY, Duration::from_millis)
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        let ascii_env = env::var("SYSDASH_ASCII").is_ok_and(|value| value != "0");
        UiOptions {
            ascii_only: ascii_env || app.is_some_and(|app| app.ascii_only),
            high_contrast: app.is_some_and(|app| app.high_contrast),
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".sysdash").join("config.toml"))
}
