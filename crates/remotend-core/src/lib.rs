//! remotend core probe.
//!
//! Before the application starts, the launcher gives an optional native
//! component ("the core") the chance to take over the process. This crate
//! owns that handshake:
//!
//! - [`CoreLoader`]: probes a [`CoreSource`], calls the entry point and
//!   normalizes every outcome into a [`CoreDecision`]
//! - [`DynamicCore`]: the production source backed by `libloading`
//! - [`RunMode`]: the mode flag scanned from the command line once the
//!   core lets startup continue
//!
//! # Handshake
//!
//! ```text
//! CoreLoader::decide()
//!     │
//!     ├─ probe ──► Unavailable(LibraryNotFound) ──► ExtensionAbsent  ─┐
//!     │                                                              ├─► continue
//!     ├─ probe ──► Unavailable(SymbolNotFound)  ──► ExtensionAbsent  ─┤
//!     │                                                              │
//!     └─ probe ──► Available(entry) ──► entry() ─┬─ true  ──► ExtensionRequestsContinue
//!                                                └─ false ──► ExtensionRequestsStop ──► stop
//! ```
//!
//! Load and resolution failures never escape the loader. Only an explicit
//! `false` from a resolved entry point stops startup.

mod decision;
mod error;
mod loader;
mod mode;

pub use decision::CoreDecision;
pub use error::{CoreError, ErrorCode};
pub use loader::{
    default_library_path, CoreLoader, CoreProbe, CoreSource, DynamicCore, EntryPoint,
    CORE_ENTRY_SYMBOL, CORE_LIBRARY_NAME,
};
pub use mode::{RunMode, CONNECTION_MANAGER_FLAG};
