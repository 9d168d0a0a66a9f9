//! Loading threshold configuration from YAML or JSON.

use std::fs;
use std::path::Path;

use super::schema::ThresholdConfig;
use super::validate::validate_config;
use crate::error::{Error, Result};

impl ThresholdConfig {
    /// Parse and validate a YAML document. JSON is accepted as a YAML subset.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: ThresholdConfig = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("failed to parse threshold config: {e}")))?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: Some(path.to_path_buf()),
            message: format!("failed to read file: {e}"),
        })?;

        let config = Self::from_yaml_str(&content).map_err(|e| match e {
            Error::Config { path: None, message } => {
                Error::Config { path: Some(path.to_path_buf()), message }
            }
            other => other,
        })?;

        tracing::debug!(
            path = %path.display(),
            metrics = config.metrics.len(),
            "loaded threshold config"
        );
        Ok(config)
    }
}
