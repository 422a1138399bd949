use std::path::PathBuf;

use thiserror::Error;

const SEED_ENV_VAR: &str = "ADVENTURE_SEED";
const SCRIPT_ENV_VAR: &str = "ADVENTURE_SCRIPT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{SEED_ENV_VAR} must be an unsigned integer, got `{0}`")]
    InvalidSeed(String),
}

/// Runtime switches, all read from the environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: Option<u64>,
    pub script: Option<PathBuf>,
}

impl GameConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(SEED_ENV_VAR).ok().as_deref(),
            std::env::var(SCRIPT_ENV_VAR).ok().as_deref(),
        )
    }

    fn from_values(seed: Option<&str>, script: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            seed: parse_seed(seed)?,
            script: script
                .map(str::trim)
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_seed(raw: Option<&str>) -> Result<Option<u64>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidSeed(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_environment_means_defaults() {
        assert_eq!(
            GameConfig::from_values(None, None),
            Ok(GameConfig::default())
        );
    }

    #[test]
    fn values_are_parsed() {
        let config =
            GameConfig::from_values(Some(" 42 "), Some("run.txt")).expect("valid config");
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.script, Some(PathBuf::from("run.txt")));
    }

    #[test]
    fn malformed_seed_is_rejected() {
        assert_eq!(
            GameConfig::from_values(Some("-3"), None),
            Err(ConfigError::InvalidSeed("-3".to_string()))
        );
    }

    #[test]
    fn blank_script_path_means_terminal_input() {
        let config = GameConfig::from_values(Some(""), Some("  ")).expect("valid config");
        assert_eq!(config, GameConfig::default());
    }
}
