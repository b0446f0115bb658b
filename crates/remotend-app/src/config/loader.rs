//! Configuration loader with hierarchical merging.
//!
//! # Load Order
//!
//! 1. Default values (compile-time)
//! 2. Global config (`~/.remotend/launcher.toml`)
//! 3. Environment variables (`REMOTEND_*`)
//!
//! Each layer overrides the previous.

use super::{default_config_path, ConfigError, LauncherConfig};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Helper macro for parsing boolean environment variables.
macro_rules! parse_env_bool {
    ($field:expr, $var:literal) => {
        if let Ok(val) = std::env::var($var) {
            $field = parse_bool(&val)
                .ok_or_else(|| ConfigError::invalid_env_var($var, "expected bool"))?;
        }
    };
}

/// Configuration loader with builder pattern.
///
/// # Example
///
/// ```no_run
/// use remotend_app::ConfigLoader;
///
/// let config = ConfigLoader::new()
///     .with_global_config("/etc/remotend/launcher.toml")
///     .load()?;
/// # Ok::<(), remotend_app::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Global config file path (defaults to ~/.remotend/launcher.toml).
    global_config_path: Option<PathBuf>,

    /// Skip environment variable loading.
    skip_env: bool,

    /// Skip global config loading.
    skip_global: bool,
}

impl ConfigLoader {
    /// Creates a new loader with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom global config path.
    #[must_use]
    pub fn with_global_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.global_config_path = Some(path.into());
        self
    }

    /// Skips environment variable loading.
    ///
    /// Useful for testing with deterministic config.
    #[must_use]
    pub fn skip_env_vars(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Skips global config loading.
    #[must_use]
    pub fn skip_global_config(mut self) -> Self {
        self.skip_global = true;
        self
    }

    /// Loads and merges configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file exists but cannot be read
    /// or parsed, or an environment variable holds an invalid value.
    /// A missing config file is not an error.
    pub fn load(&self) -> Result<LauncherConfig, ConfigError> {
        let mut config = LauncherConfig::default();

        if !self.skip_global {
            let global_path = self
                .global_config_path
                .clone()
                .unwrap_or_else(default_config_path);

            if let Some(global_config) = load_file(&global_path)? {
                debug!(path = %global_path.display(), "Loaded launcher config");
                config.merge(&global_config);
            }
        }

        if !self.skip_env {
            apply_env_vars(&mut config)?;
        }

        Ok(config)
    }
}

/// Loads a config file, returning None if it doesn't exist.
fn load_file(path: &Path) -> Result<Option<LauncherConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config =
        LauncherConfig::from_toml(&content).map_err(|e| ConfigError::parse_toml(path, e))?;

    Ok(Some(config))
}

/// Applies environment variable overrides.
fn apply_env_vars(config: &mut LauncherConfig) -> Result<(), ConfigError> {
    parse_env_bool!(config.debug, "REMOTEND_DEBUG");

    if let Ok(val) = std::env::var("REMOTEND_LOG_LEVEL") {
        config.logging.level = val;
    }

    if let Some(val) = std::env::var_os("REMOTEND_LOG_FILE") {
        config.logging.file = true;
        config.logging.file_path = Some(PathBuf::from(val));
    }

    if let Some(val) = std::env::var_os("REMOTEND_APP_PROGRAM") {
        if val.is_empty() {
            return Err(ConfigError::invalid_env_var(
                "REMOTEND_APP_PROGRAM",
                "expected a program path",
            ));
        }
        config.app.program = PathBuf::from(val);
    }

    Ok(())
}

/// Parses a boolean from string.
///
/// Accepts: "true", "false", "1", "0", "yes", "no", "on", "off"
/// (case-insensitive).
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
