//! Core loader: probe, call, normalize.
//!
//! # Flow
//!
//! ```text
//! START ─► probe ─┬─ Unavailable(LibraryNotFound) ─► CONTINUE (diagnostic)
//!                 ├─ Unavailable(SymbolNotFound)  ─► CONTINUE (diagnostic)
//!                 └─ Available(entry) ─► CALL ─► RESULT (passthrough)
//! ```
//!
//! Each call to [`CoreLoader::decide`] is one terminal pass through this
//! machine. Nothing is cached between passes.

mod dynamic;

pub use dynamic::{default_library_path, DynamicCore, CORE_ENTRY_SYMBOL, CORE_LIBRARY_NAME};

use crate::{CoreDecision, CoreError, ErrorCode};
use std::fmt;
use std::io::{self, Write};
use tracing::debug;

/// A resolved, not yet called entry point.
///
/// Calling consumes it: the handshake calls the core exactly once.
pub struct EntryPoint {
    call: Box<dyn FnOnce() -> bool>,
}

impl EntryPoint {
    /// Wraps a callable as an entry point.
    pub fn new(call: impl FnOnce() -> bool + 'static) -> Self {
        Self {
            call: Box::new(call),
        }
    }

    /// Calls the entry point and returns its answer verbatim.
    pub fn call(self) -> bool {
        (self.call)()
    }
}

impl fmt::Debug for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryPoint").finish_non_exhaustive()
    }
}

/// Result of probing for the optional core.
#[derive(Debug)]
pub enum CoreProbe {
    /// The core is absent or malformed.
    Unavailable(CoreError),
    /// The entry point resolved and can be called.
    Available(EntryPoint),
}

/// Where the core comes from.
///
/// [`DynamicCore`] is the production source. Implementations must not
/// panic: every failure is reported as [`CoreProbe::Unavailable`].
pub trait CoreSource {
    /// Attempts to locate the core and resolve its entry point.
    fn probe(&self) -> CoreProbe;
}

impl<T: CoreSource + ?Sized> CoreSource for &T {
    fn probe(&self) -> CoreProbe {
        (**self).probe()
    }
}

impl<T: CoreSource + ?Sized> CoreSource for Box<T> {
    fn probe(&self) -> CoreProbe {
        (**self).probe()
    }
}

/// Runs the core handshake.
///
/// # Example
///
/// ```
/// use remotend_core::{CoreDecision, CoreLoader, CoreProbe, CoreSource, EntryPoint};
///
/// struct Handled;
///
/// impl CoreSource for Handled {
///     fn probe(&self) -> CoreProbe {
///         CoreProbe::Available(EntryPoint::new(|| false))
///     }
/// }
///
/// let loader = CoreLoader::new(Handled);
/// assert_eq!(loader.decide(), CoreDecision::ExtensionRequestsStop);
/// assert!(!loader.invoke());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreLoader<S = DynamicCore> {
    source: S,
}

impl<S: CoreSource> CoreLoader<S> {
    /// Creates a loader over the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Performs one pass of the handshake and returns the full decision.
    ///
    /// Probe failures are reported on stderr and become
    /// [`CoreDecision::ExtensionAbsent`].
    pub fn decide(&self) -> CoreDecision {
        match self.source.probe() {
            CoreProbe::Unavailable(err) => {
                report_unavailable(&err);
                CoreDecision::ExtensionAbsent(err)
            }
            CoreProbe::Available(entry) => {
                debug!("Calling core entry point");
                let continue_startup = entry.call();
                debug!(continue_startup, "Core entry point returned");
                CoreDecision::from_entry_result(continue_startup)
            }
        }
    }

    /// Returns `true` if normal startup should continue.
    ///
    /// Never fails: only an explicit `false` from the core returns `false`.
    pub fn invoke(&self) -> bool {
        self.decide().should_continue()
    }
}

/// Reports an unreachable core.
///
/// The stderr line is written regardless of the tracing setup; the
/// structured event is for log files and debug output.
fn report_unavailable(err: &CoreError) {
    // Nothing useful to do if stderr itself is gone.
    let _ = write_diagnostic(&mut io::stderr().lock(), err);

    match err {
        CoreError::LibraryNotFound { library, reason } => {
            debug!(
                code = err.code(),
                library = %library,
                error = %reason,
                "Core library not loaded, continuing startup"
            );
        }
        CoreError::SymbolNotFound {
            symbol,
            library,
            reason,
        } => {
            debug!(
                code = err.code(),
                symbol = %symbol,
                library = %library,
                error = %reason,
                "Core entry point not found, continuing startup"
            );
        }
    }
}

fn write_diagnostic(out: &mut impl Write, err: &CoreError) -> io::Result<()> {
    writeln!(out, "remotend: {err}; continuing startup")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// In-process stand-in for the native core.
    enum FakeCore {
        Missing,
        NoEntry,
        Returns { value: bool, calls: Rc<Cell<u32>> },
    }

    impl FakeCore {
        fn returns(value: bool) -> (Self, Rc<Cell<u32>>) {
            let calls = Rc::new(Cell::new(0));
            (
                Self::Returns {
                    value,
                    calls: Rc::clone(&calls),
                },
                calls,
            )
        }
    }

    impl CoreSource for FakeCore {
        fn probe(&self) -> CoreProbe {
            match self {
                Self::Missing => CoreProbe::Unavailable(CoreError::library_not_found(
                    "libremotend.so",
                    "cannot open shared object file",
                )),
                Self::NoEntry => CoreProbe::Unavailable(CoreError::symbol_not_found(
                    CORE_ENTRY_SYMBOL,
                    "libremotend.so",
                    "undefined symbol",
                )),
                Self::Returns { value, calls } => {
                    let value = *value;
                    let calls = Rc::clone(calls);
                    CoreProbe::Available(EntryPoint::new(move || {
                        calls.set(calls.get() + 1);
                        value
                    }))
                }
            }
        }
    }

    #[test]
    fn missing_library_continues() {
        let loader = CoreLoader::new(FakeCore::Missing);
        let decision = loader.decide();

        assert!(matches!(
            decision,
            CoreDecision::ExtensionAbsent(CoreError::LibraryNotFound { .. })
        ));
        assert!(loader.invoke());
    }

    #[test]
    fn missing_entry_point_continues() {
        let loader = CoreLoader::new(FakeCore::NoEntry);
        let decision = loader.decide();

        match decision {
            CoreDecision::ExtensionAbsent(CoreError::SymbolNotFound { symbol, .. }) => {
                assert_eq!(symbol, CORE_ENTRY_SYMBOL);
            }
            other => panic!("expected SymbolNotFound, got {other:?}"),
        }
        assert!(loader.invoke());
    }

    #[test]
    fn entry_true_continues() {
        let (core, calls) = FakeCore::returns(true);
        let loader = CoreLoader::new(core);

        assert_eq!(loader.decide(), CoreDecision::ExtensionRequestsContinue);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn entry_false_stops() {
        let (core, calls) = FakeCore::returns(false);
        let loader = CoreLoader::new(core);

        assert!(!loader.invoke());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn decide_calls_entry_once_per_pass() {
        let (core, calls) = FakeCore::returns(true);
        let loader = CoreLoader::new(core);

        loader.decide();
        loader.invoke();

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn repeated_invocations_agree() {
        for core in [FakeCore::Missing, FakeCore::NoEntry] {
            let loader = CoreLoader::new(core);
            assert_eq!(loader.decide(), loader.decide());
        }
        for value in [true, false] {
            let (core, _) = FakeCore::returns(value);
            let loader = CoreLoader::new(core);
            assert_eq!(loader.invoke(), loader.invoke());
            assert_eq!(loader.invoke(), value);
        }
    }

    #[test]
    fn borrowed_and_boxed_sources() {
        let core = FakeCore::Missing;
        assert!(CoreLoader::new(&core).invoke());

        let boxed: Box<dyn CoreSource> = Box::new(FakeCore::returns(false).0);
        assert!(!CoreLoader::new(boxed).invoke());
    }

    #[test]
    fn diagnostic_names_library_and_reason() {
        let mut out = Vec::new();
        let err = CoreError::library_not_found("libremotend.so", "cannot open shared object file");
        write_diagnostic(&mut out, &err).unwrap();

        let line = String::from_utf8(out).unwrap();
        assert_eq!(
            line,
            "remotend: failed to load core library 'libremotend.so': \
             cannot open shared object file; continuing startup\n"
        );
    }

    #[test]
    fn diagnostic_names_unresolved_symbol() {
        let mut out = Vec::new();
        let err = CoreError::symbol_not_found(CORE_ENTRY_SYMBOL, "libremotend.so", "undefined symbol");
        write_diagnostic(&mut out, &err).unwrap();

        let line = String::from_utf8(out).unwrap();
        assert!(line.contains(CORE_ENTRY_SYMBOL));
        assert!(line.contains("undefined symbol"));
        assert!(line.ends_with("continuing startup\n"));
    }

    #[test]
    fn entry_point_debug_is_opaque() {
        let entry = EntryPoint::new(|| true);
        assert_eq!(format!("{entry:?}"), "EntryPoint { .. }");
        assert!(entry.call());
    }
}
