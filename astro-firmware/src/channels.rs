//! Inter-task communication
//!
//! Static signals shared between the Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicBool;

use astro_core::climb::ClimbAction;

/// Operator command for the climb task
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum ClimbCommand {
    /// Run a named action (ignored while a climb is running)
    Start(ClimbAction),
    /// Stop the running climb
    Cancel,
    /// Take the current attitude as level (ignored while a climb is running)
    ZeroLean,
}

/// Commands from the start button
pub static CLIMB_CMD: Signal<CriticalSectionRawMutex, ClimbCommand> = Signal::new();

/// True while a climb sequence is running (written by the climb task)
pub static CLIMB_ACTIVE: AtomicBool = AtomicBool::new(false);
