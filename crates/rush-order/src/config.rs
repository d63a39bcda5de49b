//! Rush order configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `AIMS_RUSH_LOCALITIES_FILE` - YAML file with a `supported_localities` list
//! - `AIMS_RUSH_LOCALITIES` - Comma-separated list of supported localities
//!
//! When both are set the file wins. When neither is set the built-in
//! whitelist ([`DEFAULT_LOCALITIES`]) is used.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding a comma-separated locality list.
pub const LOCALITIES_ENV: &str = "AIMS_RUSH_LOCALITIES";

/// Environment variable pointing at a YAML locality file.
pub const LOCALITIES_FILE_ENV: &str = "AIMS_RUSH_LOCALITIES_FILE";

/// Address suffixes that support rush delivery.
///
/// Kept verbatim: "haf noij" and "hof chis minh" look like mangled spellings of
/// "hà nội" and "hồ chí minh", but they are accepted today and changing them
/// changes which addresses qualify.
pub const DEFAULT_LOCALITIES: &[&str] = &[
    "hanoi",
    "ha noi",
    "haf noij",
    "hn",
    "hcm",
    "hochiminh",
    "hof chis minh",
    "hà nội",
    "hồ chí minh",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Failed to read locality file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse locality file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Rush order configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RushOrderConfig {
    /// Lower-case address suffixes eligible for rush delivery.
    pub supported_localities: Vec<String>,
}

impl Default for RushOrderConfig {
    fn default() -> Self {
        Self {
            supported_localities: DEFAULT_LOCALITIES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl RushOrderConfig {
    /// Create a configuration from an explicit locality list.
    ///
    /// Entries are lower-cased and otherwise kept as written, so a leading
    /// space can mark a word boundary. Blank entries are dropped.
    #[must_use]
    pub fn with_localities<I, S>(localities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            supported_localities: normalize(localities),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the locality file cannot be read or parsed,
    /// or if a locality list is present but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` in place of the process environment.
    ///
    /// # Errors
    ///
    /// See [`RushOrderConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(LOCALITIES_FILE_ENV) {
            tracing::debug!(path = %path, "Loading rush localities from file");
            return Self::from_file(Path::new(&path));
        }

        match lookup(LOCALITIES_ENV) {
            Some(raw) => {
                let config = Self::with_localities(raw.split(',').map(str::trim));
                if config.supported_localities.is_empty() {
                    return Err(ConfigError::InvalidEnvVar(
                        LOCALITIES_ENV.to_string(),
                        "must list at least one locality".to_string(),
                    ));
                }
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a YAML file.
    ///
    /// ```yaml
    /// supported_localities:
    ///   - hanoi
    ///   - hcm
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, or if the
    /// list is empty.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content, path)
    }

    fn from_yaml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let parsed: Self =
            serde_yaml::from_str(content).map_err(|source| ConfigError::ParseFile {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::with_localities(parsed.supported_localities);
        if config.supported_localities.is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                LOCALITIES_FILE_ENV.to_string(),
                format!("{} lists no localities", path.display()),
            ));
        }
        Ok(config)
    }
}

fn normalize<I, S>(localities: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    localities
        .into_iter()
        .filter(|s| !s.as_ref().trim().is_empty())
        .map(|s| s.as_ref().to_lowercase())
        .collect()
}
