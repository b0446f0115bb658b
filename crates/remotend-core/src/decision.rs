//! Startup decision produced by the core handshake.

use crate::CoreError;

/// Outcome of one pass through [`CoreLoader`](crate::CoreLoader).
///
/// Three internal states collapse to two observable ones at the gate:
///
/// | Decision | `should_continue()` |
/// |----------|---------------------|
/// | `ExtensionAbsent(_)` | `true` |
/// | `ExtensionRequestsContinue` | `true` |
/// | `ExtensionRequestsStop` | `false` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreDecision {
    /// The core could not be loaded or resolved.
    ExtensionAbsent(CoreError),
    /// The entry point returned `false`: it fully handled this run.
    ExtensionRequestsStop,
    /// The entry point returned `true`.
    ExtensionRequestsContinue,
}

impl CoreDecision {
    /// Maps the entry point's return value, unchanged.
    #[must_use]
    pub fn from_entry_result(continue_startup: bool) -> Self {
        if continue_startup {
            Self::ExtensionRequestsContinue
        } else {
            Self::ExtensionRequestsStop
        }
    }

    /// Returns `true` unless the core explicitly asked to stop.
    #[must_use]
    pub fn should_continue(&self) -> bool {
        !matches!(self, Self::ExtensionRequestsStop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_result_passthrough() {
        assert_eq!(
            CoreDecision::from_entry_result(true),
            CoreDecision::ExtensionRequestsContinue
        );
        assert_eq!(
            CoreDecision::from_entry_result(false),
            CoreDecision::ExtensionRequestsStop
        );
    }

    #[test]
    fn only_stop_halts() {
        let absent = CoreDecision::ExtensionAbsent(CoreError::library_not_found("x", "y"));
        assert!(absent.should_continue());
        assert!(CoreDecision::ExtensionRequestsContinue.should_continue());
        assert!(!CoreDecision::ExtensionRequestsStop.should_continue());
    }
}
