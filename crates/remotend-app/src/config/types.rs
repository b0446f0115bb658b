//! Configuration types.
//!
//! All types implement [`Default`] for compile-time fallback values.

use serde::Deserialize;
use std::path::PathBuf;

/// Program started as the windowed application.
pub const DEFAULT_APP_PROGRAM: &str = "remotend-ui";

/// Main launcher configuration, after merging all layers.
///
/// # Example
///
/// ```
/// use remotend_app::LauncherConfig;
///
/// let config = LauncherConfig::default();
/// assert!(!config.debug);
/// assert_eq!(config.logging.level, "warn");
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LauncherConfig {
    /// Debug logging on the terminal.
    pub debug: bool,

    /// Application runtime configuration.
    pub app: AppConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl LauncherConfig {
    /// Deserializes from TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Merges another config into this one.
    ///
    /// Values from `other` override values in `self` only if they
    /// differ from the default.
    pub fn merge(&mut self, other: &Self) {
        let default = Self::default();

        if other.debug != default.debug {
            self.debug = other.debug;
        }

        self.app.merge(&other.app);
        self.logging.merge(&other.logging);
    }
}

/// How the windowed application is started.
///
/// # Example TOML
///
/// ```toml
/// [app]
/// program = "/usr/lib/remotend/remotend-ui"
/// args = ["--no-sandbox"]
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Executable to run. Bare names are looked up on `PATH`.
    pub program: PathBuf,

    /// Arguments placed before the forwarded command line.
    pub args: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_APP_PROGRAM),
            args: Vec::new(),
        }
    }
}

impl AppConfig {
    fn merge(&mut self, other: &Self) {
        let default = Self::default();

        if other.program != default.program {
            self.program.clone_from(&other.program);
        }
        if other.args != default.args {
            self.args.clone_from(&other.args);
        }
    }
}

/// Logging configuration.
///
/// # Example TOML
///
/// ```toml
/// [logging]
/// level = "info"
/// file = true
/// file_path = "/var/log/remotend"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Terminal log level when `RUST_LOG` is not set.
    pub level: String,

    /// Also append logs to `<file_path>/launcher.log`.
    pub file: bool,

    /// Log directory (default: `~/.remotend/logs`).
    pub file_path: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            file: false,
            file_path: None,
        }
    }
}

impl LoggingConfig {
    /// Log file name inside the log directory.
    pub const FILE_NAME: &'static str = "launcher.log";

    /// Log directory, falling back to `~/.remotend/logs`.
    #[must_use]
    pub fn resolved_file_path(&self) -> PathBuf {
        self.file_path
            .clone()
            .unwrap_or_else(|| super::default_config_dir().join("logs"))
    }

    /// Full path of the log file.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.resolved_file_path().join(Self::FILE_NAME)
    }

    fn merge(&mut self, other: &Self) {
        let default = Self::default();

        if other.level != default.level {
            self.level.clone_from(&other.level);
        }
        if other.file != default.file {
            self.file = other.file;
        }
        if other.file_path.is_some() {
            self.file_path.clone_from(&other.file_path);
        }
    }
}
