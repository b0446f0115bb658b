//! Process entry sequence.
//!
//! ```text
//! CoreLoader.invoke() ── false ──► BootOutcome::Stopped (exit 0)
//!        │
//!      true
//!        ▼
//! RunMode::from_args(argv) ──► runtime.run(AppLaunch) ──► BootOutcome::Exited(code)
//! ```
//!
//! The command line is not looked at, and the runtime is not started,
//! until the core has let startup continue.

use crate::runtime::{AppLaunch, ApplicationRuntime};
use remotend_core::{CoreLoader, CoreSource, RunMode};
use std::ffi::OsString;
use tracing::{debug, info};

/// How a bootstrap run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootOutcome {
    /// The core handled the run; the application was never started.
    Stopped,
    /// The application ran and exited with this code.
    Exited(i32),
}

impl BootOutcome {
    /// Process exit code for this outcome.
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Stopped => 0,
            Self::Exited(code) => code,
        }
    }
}

/// Core handshake followed by gated application startup.
pub struct Bootstrap<S, R> {
    loader: CoreLoader<S>,
    runtime: R,
}

impl<S, R> Bootstrap<S, R>
where
    S: CoreSource,
    R: ApplicationRuntime,
{
    /// Creates a bootstrap over a loader and the application runtime.
    pub fn new(loader: CoreLoader<S>, runtime: R) -> Self {
        Self { loader, runtime }
    }

    /// Runs the entry sequence with the process command line.
    ///
    /// `argv` is only consumed if the core lets startup continue. Arguments
    /// reach the runtime unchanged, whether or not they are valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns the runtime's own error if the application could not be
    /// run. Core load and resolution failures never surface here.
    pub fn run<I, A>(self, argv: I) -> Result<BootOutcome, R::Error>
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        if !self.loader.invoke() {
            info!("Core handled this run, exiting");
            return Ok(BootOutcome::Stopped);
        }

        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let mode = RunMode::from_args(&argv);
        debug!(%mode, "Run mode selected");

        let code = self.runtime.run(AppLaunch::new(mode, argv))?;
        Ok(BootOutcome::Exited(code))
    }
}
