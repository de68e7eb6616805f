//! Configuration Loader
//!
//! Finds `quill.toml`, applies environment overrides and resolves configured
//! paths.

use crate::project::ProjectConfig;
use crate::{ConfigResult, CONFIG_FILE_NAME};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding `run.source`
pub const ENV_SOURCE: &str = "QUILL_SOURCE";
/// Environment variable overriding `run.input`
pub const ENV_INPUT: &str = "QUILL_INPUT";

/// Configuration loader
///
/// Precedence, lowest first:
/// 1. Project config (quill.toml)
/// 2. Environment variables (QUILL_*)
/// 3. CLI arguments (handled by caller)
#[derive(Debug, Default)]
pub struct ConfigLoader;

/// Loaded configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Project configuration, with environment overrides applied
    pub project: ProjectConfig,

    /// Project root directory (where quill.toml was found)
    pub project_root: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find quill.toml. Finding none is not
    /// an error: the result is a default config with no project root.
    pub fn load_from_directory(&self, start_dir: &Path) -> ConfigResult<Config> {
        let (project_root, project_config) = self.find_project_config(start_dir)?;
        let project_config = self.apply_env_overrides(project_config);

        Ok(Config {
            project: project_config,
            project_root,
        })
    }

    /// Load configuration from a specific project config file
    pub fn load_from_file(&self, config_path: &Path) -> ConfigResult<Config> {
        let project_config = ProjectConfig::load_from_file(config_path)?;
        let project_config = self.apply_env_overrides(project_config);

        let project_root = config_path.parent().map(|p| p.to_path_buf());

        Ok(Config {
            project: project_config,
            project_root,
        })
    }

    /// Find project configuration by walking up directory tree
    fn find_project_config(
        &self,
        start_dir: &Path,
    ) -> ConfigResult<(Option<PathBuf>, ProjectConfig)> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);

            if config_path.exists() {
                let project_config = ProjectConfig::load_from_file(&config_path)?;
                return Ok((Some(current), project_config));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Ok((None, ProjectConfig::default())),
            }
        }
    }

    /// Apply QUILL_SOURCE / QUILL_INPUT; empty values are ignored
    fn apply_env_overrides(&self, mut config: ProjectConfig) -> ProjectConfig {
        if let Some(source) = env_path(ENV_SOURCE) {
            config.run_mut().source = Some(source);
        }

        if let Some(input) = env_path(ENV_INPUT) {
            config.run_mut().input = Some(input);
        }

        config
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

impl Config {
    /// Get the project root directory
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    /// Get the package name
    pub fn package_name(&self) -> Option<&str> {
        self.project.package_name()
    }

    /// Check if this is a project (has quill.toml)
    pub fn is_project(&self) -> bool {
        self.project_root.is_some()
    }

    /// Configured source file, resolved against the project root
    pub fn source_path(&self) -> Option<PathBuf> {
        self.project.run_source().map(|p| self.resolve(p))
    }

    /// Configured input file, resolved against the project root
    pub fn input_path(&self) -> Option<PathBuf> {
        self.project.run_input().map(|p| self.resolve(p))
    }

    /// Relative paths are taken from the project root; absolute paths and
    /// configs without a root are left alone
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.project_root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}
