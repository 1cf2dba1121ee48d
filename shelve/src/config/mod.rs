//! Configuration system for shelve.
//!
//! This module provides file-based configuration with support for:
//! - A YAML configuration file (`shelve.yaml`)
//! - Explicit configuration paths via `--config`
//! - Validation of field values at load time
//!
//! # Configuration Precedence
//!
//! Settings are resolved with the following precedence (highest to
//! lowest):
//!
//! 1. Command-line flags
//! 2. Configuration file (`--config PATH`, or `shelve.yaml` discovered in
//!    the working directory)
//! 3. Built-in defaults
//!
//! The merge itself happens in the CLI when it resolves its options; this
//! module only loads and validates the file layer.
//!
//! # Examples
//!
//! Loading with discovery:
//!
//! ```no_run
//! use shelve::config::ConfigLoader;
//! use std::path::Path;
//!
//! let config = ConfigLoader::load(None, Path::new(".")).unwrap();
//! println!("link mode: {:?}", config.link);
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use shelve::config::{Config, LinkMode};
//!
//! let config = Config {
//!     output: Some("/data/sorted".into()),
//!     link: Some(LinkMode::Copy),
//!     ..Default::default()
//! };
//! assert_eq!(config.link, Some(LinkMode::Copy));
//! ```

pub mod loader;
pub mod schema;

// Re-export key types at module root
pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use schema::{Config, LinkMode};
