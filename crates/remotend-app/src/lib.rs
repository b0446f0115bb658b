//! remotend launcher application layer.
//!
//! This crate provides:
//!
//! - **Bootstrap**: core handshake, then mode scan, then application start
//! - **ApplicationRuntime**: the seam to the windowed application
//! - **Config**: layered launcher configuration
//! - **AppError**: unified application-level error type
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Core Layer                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  remotend-core (CoreLoader, DynamicCore, RunMode)            │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Application Layer  ◄── HERE                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  remotend-app (Bootstrap, ProcessRuntime, LauncherConfig)    │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Frontend Layer                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  remotend-cli (tracing setup, process exit)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Error Handling Strategy
//!
//! ```text
//! CoreError ──► absorbed by CoreLoader (never surfaces)
//!
//! ConfigError, RuntimeError
//!          ↓ From impl
//!     AppError (this crate)
//!          ↓ anyhow::Error / eprintln
//!     CLI output
//! ```

pub mod bootstrap;
pub mod config;
mod error;
pub mod runtime;

pub use bootstrap::{BootOutcome, Bootstrap};
pub use config::{
    AppConfig, ConfigError, ConfigLoader, LauncherConfig, LoggingConfig, DEFAULT_APP_PROGRAM,
};
pub use error::AppError;
pub use runtime::{AppLaunch, ApplicationRuntime, ProcessRuntime, RuntimeError, RUN_MODE_ENV};

// Re-export from Core Layer
pub use remotend_core::{
    CoreDecision, CoreError, CoreLoader, CoreProbe, CoreSource, DynamicCore, EntryPoint,
    ErrorCode, RunMode, CONNECTION_MANAGER_FLAG, CORE_ENTRY_SYMBOL,
};
