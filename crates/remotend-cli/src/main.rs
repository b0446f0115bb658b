//! remotend launcher.
//!
//! Gives the optional native core (`libremotend`) the first say over the
//! process, then starts the windowed application.
//!
//! The launcher has no options of its own: every argument is forwarded to
//! the application. `--cm` anywhere on the command line starts it in
//! connection-manager mode.
//!
//! # Configuration
//!
//! Loaded with priority:
//!
//! 1. Environment variables (`REMOTEND_*`)
//! 2. Config file (`REMOTEND_CONFIG`, default `~/.remotend/launcher.toml`)
//! 3. Default values
//!
//! A broken config file is reported and skipped; it never blocks startup.
//!
//! # Environment Variables
//!
//! - `REMOTEND_CONFIG`: Alternate config file
//! - `REMOTEND_DEBUG`: Debug logging on stderr (`true`/`false`)
//! - `REMOTEND_LOG_LEVEL`: Terminal log level when `RUST_LOG` is unset
//! - `REMOTEND_LOG_FILE`: Log directory; enables file logging
//! - `REMOTEND_APP_PROGRAM`: Application executable

mod tracing_writer;

use anyhow::{Context, Result};
use remotend_app::config::config_path_from_env;
use remotend_app::{
    AppError, Bootstrap, ConfigLoader, CoreLoader, DynamicCore, ErrorCode, LauncherConfig,
    LoggingConfig, ProcessRuntime,
};
use std::fs::File;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn main() -> Result<()> {
    let config = load_config();
    init_tracing(&config);

    let core = DynamicCore::new();
    debug!(
        library = %core.library().display(),
        symbol = core.entry_symbol(),
        "Probing core"
    );

    let bootstrap = Bootstrap::new(
        CoreLoader::new(core),
        ProcessRuntime::from_config(&config.app),
    );
    let outcome = bootstrap
        .run(std::env::args_os())
        .map_err(AppError::from)
        .context("Failed to start application")?;

    std::process::exit(outcome.exit_code());
}

/// Loads the launcher config, falling back rather than failing.
///
/// A broken file is skipped (env vars still apply). A broken env var
/// falls back to defaults.
fn load_config() -> LauncherConfig {
    let path = config_path_from_env();

    match ConfigLoader::new()
        .with_global_config(&path)
        .load()
        .map_err(AppError::from)
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring launcher config [{}]: {e}", e.code());
            ConfigLoader::new()
                .skip_global_config()
                .load()
                .unwrap_or_default()
        }
    }
}

// --- Tracing setup: independent terminal and file filters ---
//
// Terminal (stderr): debug config > RUST_LOG env > logging.level
// File:              always "debug"
fn init_tracing(config: &LauncherConfig) {
    let terminal_filter = if config.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level))
    };

    let terminal_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let log_file = if config.logging.file {
        open_log_file(&config.logging)
    } else {
        None
    };

    if let Some(file) = log_file {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(tracing_writer::LogFileMakeWriter::new(file));

        tracing_subscriber::registry()
            .with(terminal_layer.with_filter(terminal_filter))
            .with(file_layer.with_filter(EnvFilter::new("debug")))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(terminal_layer.with_filter(terminal_filter))
            .init();
    }
}

/// Opens `<log_dir>/launcher.log` in append mode.
///
/// Returns `None` if the directory or file cannot be created (non-fatal).
fn open_log_file(logging: &LoggingConfig) -> Option<File> {
    let log_dir = logging.resolved_file_path();
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!(
            "Warning: cannot create log directory {}: {e}",
            log_dir.display()
        );
        return None;
    }

    let log_path = logging.log_file();
    match open_append(&log_path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {e}", log_path.display());
            None
        }
    }
}

fn open_append(path: &Path) -> std::io::Result<File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}
