//! Configuration file discovery and loading.
//!
//! This module handles locating and loading shelve configuration files,
//! either from an explicit path or by discovery in the working directory.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Name of the configuration file discovered in the working directory.
pub const CONFIG_FILE_NAME: &str = "shelve.yaml";

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use shelve::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load(None, Path::new(".")).unwrap();
/// println!("dry run: {:?}", config.dry_run);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve the configuration for a run.
    ///
    /// With an explicit path the file must exist and parse. Without one, a
    /// `shelve.yaml` in `working_dir` is used when present; otherwise every
    /// field falls back to its default.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit path does not exist, or if a file
    /// that was found cannot be read, parsed, or validated.
    pub fn load(explicit: Option<&Path>, working_dir: &Path) -> Result<Config> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::Validation {
                    field: "config".to_string(),
                    message: format!("file not found: {}", path.display()),
                });
            }
            return Self::load_file(path);
        }

        let discovered = working_dir.join(CONFIG_FILE_NAME);
        if discovered.exists() {
            return Self::load_file(&discovered);
        }

        Ok(Config::default())
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the YAML is invalid, or
    /// a field value fails validation.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        let config: Config = serde_yaml::from_str(&contents)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Check field-level constraints the schema cannot express.
    fn validate(config: &Config) -> Result<()> {
        if let Some(threshold) = config.reuse_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(Error::Validation {
                    field: "reuse_threshold".to_string(),
                    message: format!("must be between 0 and 1, got {threshold}"),
                });
            }
        }
        Ok(())
    }
}
