//! Application run mode selected from the command line.

use std::ffi::OsStr;
use std::fmt;

/// Token that selects [`RunMode::ConnectionManager`].
pub const CONNECTION_MANAGER_FLAG: &str = "--cm";

/// Mode the application is started in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RunMode {
    /// Regular windowed application.
    #[default]
    Normal,
    /// Connection-manager window.
    ConnectionManager,
}

impl RunMode {
    /// Scans the whole argument list for [`CONNECTION_MANAGER_FLAG`].
    ///
    /// Position, order and duplicates don't matter. Everything else is
    /// ignored here and left for the application, including arguments that
    /// are not valid UTF-8.
    ///
    /// # Example
    ///
    /// ```
    /// use remotend_core::RunMode;
    ///
    /// assert_eq!(RunMode::from_args(["prog", "extra", "--cm"]), RunMode::ConnectionManager);
    /// assert_eq!(RunMode::from_args(["prog", "--other"]), RunMode::Normal);
    /// ```
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let flag = OsStr::new(CONNECTION_MANAGER_FLAG);
        if args.into_iter().any(|arg| arg.as_ref() == flag)
        {
            Self::ConnectionManager
        } else {
            Self::Normal
        }
    }

    /// Stable name, used when handing the mode to the application.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::ConnectionManager => "connection-manager",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
