use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::app::domain::Configuration;

/// Reads the configuration file once, falling back to defaults.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    path: PathBuf,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new(Configuration::default_path())
    }
}

impl ConfigResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration, or the defaults if the file is missing or malformed.
    ///
    /// Never fails and never writes to disk.
    pub fn resolve(&self) -> Configuration {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match Configuration::parse(&contents) {
                Ok(config) => {
                    info!(path = %self.path.display(), "loaded configuration");
                    config
                }
                Err(e) => {
                    warn!(path = %self.path.display(), "failed to parse configuration: {e}. Using defaults.");
                    Configuration::default()
                }
            },
            Err(e) => {
                debug!(path = %self.path.display(), "configuration not readable ({e}), using defaults");
                Configuration::default()
            }
        }
    }
}
