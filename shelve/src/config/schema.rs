//! Configuration schema definitions.
//!
//! This module defines the configuration file structure for shelve. Every
//! field is optional; unset fields fall back to built-in defaults when the
//! CLI resolves its options.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::operations::LinkType;

/// Complete configuration structure.
///
/// Mirrors the `shelve.yaml` file format. Command-line flags override any
/// value set here.
///
/// # Examples
///
/// ```
/// use shelve::config::{Config, LinkMode};
///
/// let config = Config {
///     input: Some("~/Downloads".into()),
///     link: Some(LinkMode::Soft),
///     ..Default::default()
/// };
/// assert_eq!(config.link, Some(LinkMode::Soft));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory whose files are organized.
    pub input: Option<PathBuf>,

    /// Directory receiving the organized layout. Defaults to
    /// `{input}/organized`.
    pub output: Option<PathBuf>,

    /// Preview operations without touching the filesystem.
    pub dry_run: Option<bool>,

    /// Route execution events to the run log file instead of stdout.
    pub silent: Option<bool>,

    /// Link flavor used when materializing operations.
    pub link: Option<LinkMode>,

    /// Directory for timestamped run logs. Defaults to `./logs`.
    pub log_dir: Option<PathBuf>,

    /// Exact run log file path, overriding `log_dir`.
    pub log_file: Option<PathBuf>,

    /// Similarity score at or above which an existing folder is reused
    /// instead of creating the desired one. Must be within [0, 1].
    pub reuse_threshold: Option<f64>,
}

/// Link flavor selector, as written in configuration files and on the
/// command line.
///
/// # Examples
///
/// ```
/// use shelve::config::LinkMode;
///
/// let mode = LinkMode::Hard;
/// assert_eq!(mode.to_string(), "hard");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LinkMode {
    /// Hard links.
    Hard,
    /// Symbolic links.
    Soft,
    /// Plain copies.
    Copy,
}

impl LinkMode {
    /// The planner-level link type this mode selects.
    #[must_use]
    pub const fn link_type(self) -> LinkType {
        match self {
            Self::Hard => LinkType::Hardlink,
            Self::Soft => LinkType::Symlink,
            Self::Copy => LinkType::Copy,
        }
    }
}

impl std::fmt::Display for LinkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hard => write!(f, "hard"),
            Self::Soft => write!(f, "soft"),
            Self::Copy => write!(f, "copy"),
        }
    }
}
