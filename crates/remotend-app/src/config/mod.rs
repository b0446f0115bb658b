//! Launcher configuration with layered loading.
//!
//! # Architecture
//!
//! ```text
//! Priority (highest to lowest):
//!
//! ┌──────────────────────────────────────────────┐
//! │  1. Environment Variables (REMOTEND_*)       │  Runtime override
//! ├──────────────────────────────────────────────┤
//! │  2. Global Config (~/.remotend/launcher.toml) │  User defaults
//! ├──────────────────────────────────────────────┤
//! │  3. Default Values (compile-time)            │  Fallback
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The core library location and entry symbol are not configurable here.
//! They are fixed at build time (see `remotend_core::default_library_path`).
//!
//! # Environment Variables
//!
//! | Variable | Config Field | Type |
//! |----------|--------------|------|
//! | `REMOTEND_CONFIG` | config file path (read by the binary) | PathBuf |
//! | `REMOTEND_DEBUG` | `debug` | bool |
//! | `REMOTEND_LOG_LEVEL` | `logging.level` | String |
//! | `REMOTEND_LOG_FILE` | `logging.file_path` (enables `logging.file`) | PathBuf |
//! | `REMOTEND_APP_PROGRAM` | `app.program` | PathBuf |
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.remotend/launcher.toml
//! debug = false
//!
//! [app]
//! program = "/usr/lib/remotend/remotend-ui"
//! args = []
//!
//! [logging]
//! level = "warn"
//! file = true
//! file_path = "/var/log/remotend"
//! ```

mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use types::{AppConfig, LauncherConfig, LoggingConfig, DEFAULT_APP_PROGRAM};

/// Environment variable naming an alternate config file.
pub const CONFIG_PATH_ENV: &str = "REMOTEND_CONFIG";

/// Default global config directory.
pub fn default_config_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".remotend")
}

/// Default global config file path.
pub fn default_config_path() -> std::path::PathBuf {
    default_config_dir().join("launcher.toml")
}

/// Config file path: `REMOTEND_CONFIG` if set, else [`default_config_path`].
pub fn config_path_from_env() -> std::path::PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(default_config_path)
}
