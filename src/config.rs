// config.rs

use std::path::PathBuf;
use std::time::Duration;

pub const STATE_VAR: &str = "TERMFOLIO_STATE";
pub const REVEAL_VAR: &str = "TERMFOLIO_REVEAL_MS";
pub const DEFAULT_REVEAL: Duration = Duration::from_millis(35);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TERMFOLIO_REVEAL_MS must be a whole number of milliseconds, got {0:?}")]
    RevealInterval(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file holding history and theme; `None` keeps state in memory.
    pub state_path: Option<PathBuf>,
    pub reveal_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_path: None,
            reveal_interval: DEFAULT_REVEAL,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let state_path = lookup(STATE_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let reveal_interval = match lookup(REVEAL_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::RevealInterval(raw))?,
            None => DEFAULT_REVEAL,
        };
        Ok(Self {
            state_path,
            reveal_interval,
        })
    }
}
