//! Configuration loading from TOML, YAML, or JSON files.

use crate::schema::Config;
use babel_common::{BabelError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Supported configuration file formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.yaml` or `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Detects the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(BabelError::Config(format!(
                "Unsupported configuration format: {}",
                path.display()
            ))),
        }
    }

    /// Parses `content` in this format.
    pub fn parse(self, content: &str) -> Result<Config> {
        match self {
            Self::Toml => {
                toml::from_str(content).map_err(|e| BabelError::Serialization(e.to_string()))
            }
            Self::Yaml => {
                serde_yaml::from_str(content).map_err(|e| BabelError::Serialization(e.to_string()))
            }
            Self::Json => {
                serde_json::from_str(content).map_err(|e| BabelError::Serialization(e.to_string()))
            }
        }
    }
}

/// Configuration loader.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads configuration from file.
    ///
    /// Sections and fields missing from the file take their defaults.
    pub fn load(&self) -> Result<Config> {
        let format = ConfigFormat::from_path(&self.path)?;
        debug!("Reading configuration from {:?} as {:?}", self.path, format);

        let content = fs::read_to_string(&self.path)?;
        let config = format.parse(&content)?;

        info!("Loaded configuration from {:?}", self.path);
        Ok(config)
    }

    /// Loads configuration from file, or the defaults when the file does not exist.
    pub fn load_or_default(&self) -> Result<Config> {
        if self.path.exists() {
            self.load()
        } else {
            info!(
                "Configuration file {:?} not found, using defaults",
                self.path
            );
            Ok(Config::default())
        }
    }
}
