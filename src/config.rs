//! Game configuration
//!
//! Defaults can be overridden by an optional JSON config file, and command
//! line flags override both.

use crate::core::EvaluationRule;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Directory name under the platform data dir
const APP_DIR: &str = "wordle_daily";

/// Errors raised while loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// How letters present elsewhere in the secret are scored
    #[serde(default)]
    pub rule: EvaluationRule,

    /// How long a rejection notice stays on screen, in milliseconds
    #[serde(default = "default_notice_ms")]
    pub notice_ms: u64,

    /// Saved session file; the platform data dir is used when unset
    #[serde(default)]
    pub state_file: Option<PathBuf>,

    /// Custom word list file; the embedded list is used when unset
    #[serde(default)]
    pub wordlist: Option<PathBuf>,
}

fn default_notice_ms() -> u64 {
    2000
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rule: EvaluationRule::default(),
            notice_ms: default_notice_ms(),
            state_file: None,
            wordlist: None,
        }
    }
}

impl GameConfig {
    /// Load a config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Notice display time as a Duration
    #[must_use]
    pub const fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }

    /// Resolved session file, if any location is available
    #[must_use]
    pub fn state_path(&self) -> Option<PathBuf> {
        self.state_file.clone().or_else(default_state_path)
    }

    /// Log file written while the TUI owns the terminal
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.state_path()
            .and_then(|path| path.parent().map(|dir| dir.join("wordle_daily.log")))
            .unwrap_or_else(|| PathBuf::from("wordle_daily.log"))
    }
}

/// `<data dir>/wordle_daily/session.json`
#[must_use]
pub fn default_state_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join("session.json"))
}
