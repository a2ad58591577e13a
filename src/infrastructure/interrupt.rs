//! Ctrl-C handling
//!
//! The handler only records that an interrupt happened. The running child
//! gets the signal through the terminal's process group and exits on its
//! own; the runner then reports the interrupt instead of the child's code.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Install the process-wide handler. Call once, from `main`.
pub fn install_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        INTERRUPTED.store(true, Ordering::SeqCst);
    })?;
    debug!("interrupt handler installed");
    Ok(())
}

/// Whether Ctrl-C was pressed since startup.
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}
