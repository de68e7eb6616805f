//! CLI configuration via environment variables
//!
//! Project settings live in quill.toml (see `quill-config`); these are the
//! per-user presentation switches.

use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Default to JSON diagnostic output (QUILL_DIAGNOSTICS=json)
    pub default_json: bool,
    /// Disable colored output (QUILL_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            default_json: env::var("QUILL_DIAGNOSTICS")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            no_color: env::var("QUILL_NO_COLOR").is_ok() || env::var("NO_COLOR").is_ok(),
        }
    }
}
