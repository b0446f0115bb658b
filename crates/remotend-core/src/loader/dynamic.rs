//! Native core loaded through `libloading`.

use super::{CoreProbe, CoreSource, EntryPoint};
use crate::CoreError;
use libloading::Library;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Logical name of the core library (`libremotend.so`, `libremotend.dylib`,
/// `remotend.dll`).
pub const CORE_LIBRARY_NAME: &str = "remotend";

/// Symbol the core must export: `extern "C" fn() -> bool`.
///
/// `true` lets normal startup continue, `false` means the core handled
/// the run and the process should exit.
pub const CORE_ENTRY_SYMBOL: &str = "remotend_core_main";

#[cfg(feature = "system-install")]
const CORE_INSTALL_PATH: &str = "/usr/lib/remotend/libremotend.so";

type CoreMainFn = unsafe extern "C" fn() -> bool;

/// Location the launcher loads the core from.
///
/// The bare platform file name, resolved through the loader search path.
/// With the `system-install` feature, the fixed install path instead.
pub fn default_library_path() -> PathBuf {
    #[cfg(feature = "system-install")]
    {
        PathBuf::from(CORE_INSTALL_PATH)
    }
    #[cfg(not(feature = "system-install"))]
    {
        PathBuf::from(libloading::library_filename(CORE_LIBRARY_NAME))
    }
}

/// Core backed by a shared library on disk.
///
/// Each [`probe`](CoreSource::probe) opens the library with lazy binding
/// and resolves [`CORE_ENTRY_SYMBOL`]. Once the entry point has been
/// called the library is never unloaded.
#[derive(Debug, Clone)]
pub struct DynamicCore {
    library: PathBuf,
    entry_symbol: String,
}

impl DynamicCore {
    /// Creates a source for the default library and entry symbol.
    #[must_use]
    pub fn new() -> Self {
        Self {
            library: default_library_path(),
            entry_symbol: CORE_ENTRY_SYMBOL.to_string(),
        }
    }

    /// Loads from a specific path instead of [`default_library_path`].
    #[must_use]
    pub fn with_library(mut self, path: impl Into<PathBuf>) -> Self {
        self.library = path.into();
        self
    }

    /// Resolves a different entry symbol.
    #[must_use]
    pub fn with_entry_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.entry_symbol = symbol.into();
        self
    }

    /// Library path this source loads.
    pub fn library(&self) -> &Path {
        &self.library
    }

    /// Entry symbol this source resolves.
    pub fn entry_symbol(&self) -> &str {
        &self.entry_symbol
    }

    #[cfg(unix)]
    fn open(&self) -> Result<Library, libloading::Error> {
        use libloading::os::unix::{Library as UnixLibrary, RTLD_LAZY, RTLD_LOCAL};

        // SAFETY: loading runs the library's initializers. The core is a
        // trusted component shipped alongside the launcher.
        unsafe { UnixLibrary::open(Some(&self.library), RTLD_LAZY | RTLD_LOCAL) }.map(Library::from)
    }

    #[cfg(not(unix))]
    fn open(&self) -> Result<Library, libloading::Error> {
        // SAFETY: see the unix variant.
        unsafe { Library::new(&self.library) }
    }
}

impl Default for DynamicCore {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreSource for DynamicCore {
    fn probe(&self) -> CoreProbe {
        let library_name = self.library.display().to_string();

        let library = match self.open() {
            Ok(library) => library,
            Err(e) => {
                return CoreProbe::Unavailable(CoreError::library_not_found(library_name, e));
            }
        };
        debug!(library = %library_name, "Core library loaded");

        // SAFETY: the symbol type matches the documented entry point
        // contract. The copied fn pointer is only called while `library`
        // is alive (it moves into the entry point below).
        let symbol = unsafe { library.get::<CoreMainFn>(self.entry_symbol.as_bytes()) };
        let entry: CoreMainFn = match symbol {
            Ok(symbol) => *symbol,
            Err(e) => {
                return CoreProbe::Unavailable(CoreError::symbol_not_found(
                    &self.entry_symbol,
                    library_name,
                    e,
                ))
            }
        };
        debug!(symbol = %self.entry_symbol, "Core entry point resolved");

        CoreProbe::Available(EntryPoint::new(move || {
            // SAFETY: no arguments, C ABI, returns bool; see CORE_ENTRY_SYMBOL.
            let continue_startup = unsafe { entry() };
            // The core may have left threads or callbacks behind.
            std::mem::forget(library);
            continue_startup
        }))
    }
}
