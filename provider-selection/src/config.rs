use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::{CRITERIA, DEFAULT_PROVIDERS, DEFAULT_WEIGHTS};

/// Initial session state. Every key is optional; missing keys take the built-in defaults.
///
/// ```toml
/// weights = [0.35, 0.25, 0.20, 0.10, 0.10]
///
/// [[alternatives]]
/// name = "A1 IndiHome"
/// scores = [3, 3, 1, 1, 3]
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub weights: [f64; CRITERIA],
    pub alternatives: Vec<ProviderConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProviderConfig {
    pub name: String,
    pub scores: [f64; CRITERIA],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            alternatives: DEFAULT_PROVIDERS
                .iter()
                .map(|(name, scores)| ProviderConfig {
                    name: name.to_string(),
                    scores: *scores,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    /// Load config from a TOML file. A missing file means defaults; a file that exists but
    /// cannot be read or parsed is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("config loaded from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod test {
    use super::{Config, ConfigError, ProviderConfig};
    use crate::DEFAULT_WEIGHTS;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_override() {
        let config = Config::from_toml(
            r#"
            [[alternatives]]
            name = "A6 Starlink"
            scores = [2, 5, 4.5, 5, 1]
            "#,
        )
        .unwrap();
        assert_eq!(config.weights, DEFAULT_WEIGHTS);
        assert_eq!(
            config.alternatives,
            [ProviderConfig {
                name: "A6 Starlink".into(),
                scores: [2.0, 5.0, 4.5, 5.0, 1.0],
            }]
        );
    }

    #[test]
    fn wrong_arity_is_rejected() {
        assert!(Config::from_toml("weights = [0.5, 0.5]").is_err());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/isp-rank.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("isp-rank-{}.toml", std::process::id()));
        std::fs::write(&path, "weights = [0.5, 0.5").unwrap();
        let result = Config::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));

        let err = Config::load(std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
