//! Stand-in for the native core, compiled to a cdylib by the tests.
//!
//! Built with `--cfg continue_startup` it lets startup continue; without
//! it, it claims the run.

use std::sync::atomic::{AtomicU32, Ordering};

static CALLS: AtomicU32 = AtomicU32::new(0);

#[no_mangle]
pub extern "C" fn remotend_core_main() -> bool {
    CALLS.fetch_add(1, Ordering::SeqCst);
    cfg!(continue_startup)
}

#[no_mangle]
pub extern "C" fn remotend_core_calls() -> u32 {
    CALLS.load(Ordering::SeqCst)
}
