//! Core probe errors.
//!
//! Both variants are absorbed by [`CoreLoader`](crate::CoreLoader) and
//! turned into a "continue" decision. They exist so the absent case stays
//! distinguishable from a deliberate stop in logs and tests.

use thiserror::Error;

/// Machine-readable error interface.
///
/// Codes are UPPER_SNAKE_CASE, prefixed with their domain (`CORE_`,
/// `CONFIG_`, `RUNTIME_`), and stable once published.
///
/// # Example
///
/// ```
/// use remotend_core::{CoreError, ErrorCode};
///
/// let err = CoreError::library_not_found("libremotend.so", "file not found");
/// assert_eq!(err.code(), "CORE_LIBRARY_NOT_FOUND");
/// assert!(err.is_recoverable());
/// ```
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    fn code(&self) -> &'static str;

    /// Returns `true` if the caller can carry on after this error.
    fn is_recoverable(&self) -> bool;
}

/// Why the core could not be reached.
///
/// Underlying loader errors are kept as text so decisions stay
/// `Clone + PartialEq`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The shared library is absent or could not be loaded.
    #[error("failed to load core library '{library}': {reason}")]
    LibraryNotFound {
        /// Path or file name passed to the loader.
        library: String,
        /// Loader error text.
        reason: String,
    },

    /// The library loaded but does not export the entry point.
    #[error("failed to resolve '{symbol}' in '{library}': {reason}")]
    SymbolNotFound {
        /// Entry symbol that was looked up.
        symbol: String,
        /// Library the lookup ran against.
        library: String,
        /// Loader error text.
        reason: String,
    },
}

impl CoreError {
    /// Creates a library-not-found error.
    pub fn library_not_found(library: impl Into<String>, reason: impl ToString) -> Self {
        Self::LibraryNotFound {
            library: library.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a symbol-not-found error.
    pub fn symbol_not_found(
        symbol: impl Into<String>,
        library: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::SymbolNotFound {
            symbol: symbol.into(),
            library: library.into(),
            reason: reason.to_string(),
        }
    }
}

impl ErrorCode for CoreError {
    fn code(&self) -> &'static str {
        match self {
            Self::LibraryNotFound { .. } => "CORE_LIBRARY_NOT_FOUND",
            Self::SymbolNotFound { .. } => "CORE_SYMBOL_NOT_FOUND",
        }
    }

    fn is_recoverable(&self) -> bool {
        // The core is an optional enhancement; neither case blocks startup.
        true
    }
}
