//! Application-level error type.
//!
//! [`AppError`] unifies all internal errors for the application layer.

use crate::config::ConfigError;
use crate::runtime::RuntimeError;
use remotend_core::ErrorCode;
use thiserror::Error;

/// Unified application error.
///
/// # Example
///
/// ```
/// use remotend_app::{AppError, RuntimeError};
///
/// let err = RuntimeError::spawn("remotend-ui", std::io::ErrorKind::NotFound.into());
/// let app_err: AppError = err.into();
/// eprintln!("Error: {}", app_err);
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Application runtime could not be started
    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

impl ErrorCode for AppError {
    fn code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.code(),
            Self::Runtime(e) => e.code(),
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            Self::Config(e) => e.is_recoverable(),
            Self::Runtime(e) => e.is_recoverable(),
        }
    }
}
