//! Quill Configuration System
//!
//! Provides project configuration for Quill programs:
//! - Project configuration (quill.toml)
//! - Environment variable overrides (QUILL_*)
//! - Resolution of configured paths against the project root
//!
//! # Configuration Hierarchy
//!
//! Later sources override earlier ones:
//! 1. Project config (./quill.toml, searched upwards)
//! 2. Environment variables (QUILL_SOURCE, QUILL_INPUT)
//! 3. CLI arguments (handled by the caller)
//!
//! # Example
//!
//! ```no_run
//! use quill_config::ConfigLoader;
//! use std::path::Path;
//!
//! let loader = ConfigLoader::new();
//! let config = loader.load_from_directory(Path::new(".")).unwrap();
//! println!("source: {:?}", config.source_path());
//! ```

pub mod loader;
pub mod project;

use std::path::PathBuf;
use thiserror::Error;

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "quill.toml";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Invalid version: {0}")]
    InvalidVersion(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

// Re-export main types
pub use loader::{Config, ConfigLoader};
pub use project::{PackageConfig, ProjectConfig, RunConfig};
