//! Application runtime: the seam to the windowed application.
//!
//! The launcher never looks inside the application. It hands over an
//! [`AppLaunch`] (mode + untouched command line) and passes the returned
//! exit code through.

use remotend_core::{ErrorCode, RunMode};
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::AppConfig;

/// Environment variable carrying the run mode into the application process.
pub const RUN_MODE_ENV: &str = "REMOTEND_RUN_MODE";

/// Everything the application is started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLaunch {
    /// Mode selected from the command line.
    pub mode: RunMode,
    /// Full command line, program name included, exactly as the OS gave it.
    pub argv: Vec<OsString>,
}

impl AppLaunch {
    /// Creates a launch value.
    #[must_use]
    pub fn new(mode: RunMode, argv: Vec<OsString>) -> Self {
        Self { mode, argv }
    }

    /// Arguments after the program name.
    #[must_use]
    pub fn forwarded_args(&self) -> &[OsString] {
        self.argv.get(1..).unwrap_or_default()
    }
}

/// The windowed application, started once the core lets startup continue.
pub trait ApplicationRuntime {
    /// Failure to start or supervise the application.
    type Error;

    /// Runs the application to completion and returns its exit code.
    fn run(self, launch: AppLaunch) -> Result<i32, Self::Error>;
}

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The application process could not be started.
    #[error("failed to start '{}': {source}", .program.display())]
    Spawn {
        /// Program that was started.
        program: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The application process could not be waited on.
    #[error("failed to wait for '{}': {source}", .program.display())]
    Wait {
        /// Program that was running.
        program: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl RuntimeError {
    /// Creates a spawn error.
    pub fn spawn(program: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Creates a wait error.
    pub fn wait(program: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Wait {
            program: program.into(),
            source,
        }
    }
}

impl ErrorCode for RuntimeError {
    fn code(&self) -> &'static str {
        match self {
            Self::Spawn { .. } => "RUNTIME_SPAWN_FAILED",
            Self::Wait { .. } => "RUNTIME_WAIT_FAILED",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}

/// Runs the application as a child process.
///
/// Command line: `program [app.args...] [forwarded args...]`, with
/// [`RUN_MODE_ENV`] set to the run mode. The child inherits stdio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRuntime {
    program: PathBuf,
    args: Vec<String>,
}

impl ProcessRuntime {
    /// Creates a runtime for the given program with no leading arguments.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Creates a runtime from the `[app]` config section.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.program.clone()).with_args(config.args.clone())
    }

    /// Sets arguments placed before the forwarded command line.
    #[must_use]
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    fn command(&self, launch: &AppLaunch) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .args(launch.forwarded_args())
            .env(RUN_MODE_ENV, launch.mode.as_str());
        cmd
    }
}

impl ApplicationRuntime for ProcessRuntime {
    type Error = RuntimeError;

    fn run(self, launch: AppLaunch) -> Result<i32, RuntimeError> {
        info!(
            program = %self.program.display(),
            mode = %launch.mode,
            "Starting application"
        );

        let mut child = self
            .command(&launch)
            .spawn()
            .map_err(|e| RuntimeError::spawn(&self.program, e))?;
        let status = child
            .wait()
            .map_err(|e| RuntimeError::wait(&self.program, e))?;

        let code = exit_code(status);
        debug!(code, "Application exited");
        Ok(code)
    }
}

/// Maps an exit status to a process exit code.
///
/// A signal death becomes `128 + signal`, as a shell reports it.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
