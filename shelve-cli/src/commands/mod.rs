//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `by_date`: Organize files into {year}/{month} folders by modification time
//! - `by_type`: Organize files into folders by file type
//! - `classify`: Organize files using classification metadata
//! - `completions`: Generate shell completion scripts

pub mod by_date;
pub mod by_type;
pub mod classify;
pub mod completions;

pub use by_date::ByDateCommand;
pub use by_type::ByTypeCommand;
pub use classify::ClassifyCommand;
pub use completions::CompletionsCommand;
