//! Game settings.
//!
//! Settings are read from a RON file. Every key is optional and falls back to
//! the defaults below, so `()` is a valid config.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_MAX_ATTEMPTS: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows on the board. The game restarts once they are all used.
    pub max_attempts: u8,
    /// Fixed seed for the secret generator, random if unset.
    pub seed: Option<u64>,
    /// Show pegs best first instead of under the slot they score.
    pub sorted_feedback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
            sorted_feedback: true,
        }
    }
}

impl Config {
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_ron(&text)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidMaxAttempts);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(Config::from_ron("()").unwrap(), Config::default());
    }

    #[test]
    fn partial_config() {
        let config = Config::from_ron("(max_attempts: 6, seed: Some(99))").unwrap();
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.seed, Some(99));
        assert!(config.sorted_feedback);
    }

    #[test]
    fn zero_attempts_rejected() {
        assert!(matches!(
            Config::from_ron("(max_attempts: 0)"),
            Err(ConfigError::InvalidMaxAttempts)
        ));
    }

    #[test]
    fn malformed() {
        assert!(matches!(
            Config::from_ron("(max_attempts: \"ten\")"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Config::load(Path::new("does/not/exist.ron")),
            Err(ConfigError::Io(_))
        ));
    }
}
