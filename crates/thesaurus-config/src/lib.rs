use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;
use self::oxford::OxfordConfig;

pub mod network;
pub mod oxford;

pub const DEFAULT_CONFIG_PATH: &str = "~/.define.conf.json";

/// Contents of the JSON config file. Unknown keys are ignored so the file can
/// be shared with other tools.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "OxfordDictionary")]
    pub oxford: OxfordConfig,
    #[serde(rename = "Thesaurus")]
    pub network: NetworkConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Config {
    /// Read a config file, `~` expanded
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let path = expand_home(path);
        let data = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Resolve against the process environment
    pub fn resolve(path: &Path) -> Result<Self, ConfigError> {
        Self::resolve_with(path, |key| env::var(key).ok())
    }

    /// Credentials come from the environment when `OXFORD_DICTIONARY_APP_ID`
    /// is set, and the file then only contributes its other sections (a
    /// missing or broken file is fine). Otherwise the file is required.
    pub fn resolve_with(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        match OxfordConfig::from_env(lookup) {
            Some(oxford) => {
                let file = Self::load(path).unwrap_or_default();
                Ok(Self { oxford, ..file })
            }
            None => Self::load(path),
        }
    }
}

/// Replace a leading `~` with the home directory. Paths are returned as is
/// when there is no home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
