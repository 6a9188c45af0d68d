//! Configuration for the documented project.
//!
//! All options are carried as an explicit [`Config`] value threaded into the
//! renderer and assembler; there is no ambient global state. A JSON settings
//! file can seed the configuration, with command-line flags layered on top.

use crate::error::{Error, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the JSON settings file, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".mfs.json";

/// All user-defined settings for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title of the generated documentation; required before rendering starts
    pub title: Option<String>,
    /// Description shown under the title; required before rendering starts
    pub description: Option<String>,
    /// Directory the source files are read from
    pub directory: PathBuf,
    /// Directory the documents are written to
    pub destination: PathBuf,
    /// File/directory name prefixes excluded from scanning
    pub excluded_prefixes: Vec<String>,
    /// When true, everything goes into one document instead of one per file
    pub single_doc_mode: bool,
    /// When true, function source code is embedded as fenced code blocks
    pub show_source: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            directory: PathBuf::from("."),
            destination: PathBuf::from("."),
            excluded_prefixes: vec![".".to_string(), "__".to_string(), "test_".to_string()],
            single_doc_mode: false,
            show_source: false,
        }
    }
}

impl Config {
    /// Reads the settings file, if one exists.
    ///
    /// Returns `Ok(None)` when the file is absent. Unknown keys are reported
    /// with a warning and ignored, so an old settings file keeps working.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationInvalid`] when the file exists but is not
    /// valid JSON for this configuration.
    pub fn load(path: &Path) -> Result<Option<Config>> {
        if !path.exists() {
            debug!("No configuration file at {}", path.display());
            return Ok(None);
        }

        info!("Reading configuration file: {}", path.display());
        let content = fs::read_to_string(path)?;

        let value: serde_json::Value = serde_json::from_str(&content)?;
        if let serde_json::Value::Object(map) = &value {
            for key in map.keys() {
                if !KNOWN_KEYS.contains(&key.as_str()) {
                    warn!("Ignoring unknown configuration key found: {}", key);
                }
            }
        }

        let config: Config = serde_json::from_value(value)?;
        Ok(Some(config))
    }

    /// Writes the effective settings to disk as JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        info!("Saving configuration file to {}", path.display());
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Fails fast on an unusable configuration, before any rendering work.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationInvalid`] when the title or description
    /// is missing.
    pub fn validate(&self) -> Result<()> {
        if self.title.as_deref().map_or(true, str::is_empty) {
            return Err(Error::ConfigurationInvalid(
                "title must be defined".to_string(),
            ));
        }
        if self.description.as_deref().map_or(true, str::is_empty) {
            return Err(Error::ConfigurationInvalid(
                "description must be defined".to_string(),
            ));
        }
        Ok(())
    }
}

const KNOWN_KEYS: &[&str] = &[
    "title",
    "description",
    "directory",
    "destination",
    "excluded_prefixes",
    "single_doc_mode",
    "show_source",
];
