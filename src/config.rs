use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Settings for a dataset generation run, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of samples to generate.
    pub samples: usize,
    /// Seed for reproducible runs. Unseeded runs use the thread-local RNG.
    pub seed: Option<u64>,
    /// Share of the samples held out for validation.
    pub validation_split: f64,
    /// Where the dataset JSON is written.
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            samples: 5000,
            seed: None,
            validation_split: 0.2,
            output: PathBuf::from("dataset.json"),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: "read",
            path: path.to_path_buf(),
            source,
        })?;
        let config: GeneratorConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(Error::InvalidConfiguration {
                message: "samples must be > 0".into(),
            });
        }
        if !(0.0..1.0).contains(&self.validation_split) {
            return Err(Error::InvalidConfiguration {
                message: "validation_split must be in [0, 1)".into(),
            });
        }
        Ok(())
    }
}
