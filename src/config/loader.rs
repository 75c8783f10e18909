//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AdministrativeRoster, EngineConfig};

/// Loads and provides access to the engine configuration.
///
/// # File Structure
///
/// ```yaml
/// metadata:
///   name: "Planta Quito"
///   jurisdiction: "EC"
///   version: "2025-01-01"
/// administrative:
///   employees:
///     - emp_009
///   areas:
///     - "Talento Humano"
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
/// assert!(loader.roster().is_administrative("emp_009", None));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] when the file cannot be read.
    /// - [`EngineError::ConfigParseError`] when the YAML is invalid or a
    ///   required field is missing.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: EngineConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Wraps an already-built configuration (used by tests and embedders).
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the full configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the administrative roster.
    pub fn roster(&self) -> &AdministrativeRoster {
        &self.config.administrative
    }
}
