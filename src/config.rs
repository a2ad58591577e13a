//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/deployctl/deployctl.toml`
//! 3. Local config: `<project_dir>/.deployctl.toml`
//! 4. Command-line overrides (`--file`, `--project-dir`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Default orchestration file, relative to the project directory.
pub const DEFAULT_COMPOSE_FILE: &str = "docker-compose.yml";

/// A named URL printed after services come up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoint {
    pub name: String,
    pub url: String,
}

/// Unified configuration for deployctl.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Orchestration tool command (default: ["docker", "compose"])
    pub compose_command: Vec<String>,
    /// Orchestration file passed via `-f` (default: docker-compose.yml)
    pub compose_file: PathBuf,
    /// Working directory for the tool (default: cwd)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_dir: Option<PathBuf>,
    /// URLs listed after `up`
    pub endpoints: Vec<Endpoint>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            compose_command: vec!["docker".into(), "compose".into()],
            compose_file: PathBuf::from(DEFAULT_COMPOSE_FILE),
            project_dir: None,
            endpoints: vec![],
        }
    }
}

/// Command-line values that take precedence over every config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub compose_file: Option<PathBuf>,
    pub project_dir: Option<PathBuf>,
}

/// Get the XDG config directory for deployctl.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "deployctl").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("deployctl.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".deployctl.toml")
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// The local config is looked up in `overrides.project_dir`, or the
    /// current directory when none is given.
    pub fn load(overrides: &Overrides) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), overrides)
    }

    /// Same as [`Settings::load`] with an explicit global config path.
    pub fn load_from(global: Option<&Path>, overrides: &Overrides) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("compose_command", defaults.compose_command.clone())
            .map_err(config_err)?
            .set_default(
                "compose_file",
                defaults.compose_file.to_string_lossy().to_string(),
            )
            .map_err(config_err)?;

        if let Some(global_path) = global {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).format(FileFormat::Toml));
            }
        }

        let local_dir = overrides
            .project_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let local_path = local_config_path(&local_dir);
        if local_path.exists() {
            builder = builder.add_source(File::from(local_path).format(FileFormat::Toml));
        }

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.apply_overrides(overrides);
        Ok(settings)
    }

    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(file) = &overrides.compose_file {
            self.compose_file = file.clone();
        }
        if let Some(dir) = &overrides.project_dir {
            self.project_dir = Some(dir.clone());
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
