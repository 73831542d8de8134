//! Climb steps and sequencing
//!
//! A climb is five steps run strictly in order. Each step captures the leg
//! switch counts when it starts, shapes the leg power every tick, and
//! reports when it is done. Any step can abort the whole climb by raising
//! the sequence's cancel flag; the runner checks the flag every tick and
//! zeroes every actuator on the way out.

pub mod action;
pub mod sequence;
pub mod step;

#[cfg(test)]
pub(crate) mod mock;

use core::sync::atomic::{AtomicU8, Ordering};

pub use action::ClimbAction;
pub use sequence::ClimbSequence;
pub use step::{ClimbStep, LegSnapshot, StepKind};

/// Why a climb stopped early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AbortReason {
    /// Front floor sensor lost the floor while retracting the front leg
    FrontFloorLost,
    /// Back floor sensor lost the floor while retracting the back leg
    BackFloorLost,
    /// Chassis leaned back past the limit while retracting the back leg
    LeanLimit,
    /// Stopped by the operator or another task
    Cancelled,
}

impl AbortReason {
    const fn code(self) -> u8 {
        match self {
            AbortReason::FrontFloorLost => 1,
            AbortReason::BackFloorLost => 2,
            AbortReason::LeanLimit => 3,
            AbortReason::Cancelled => 4,
        }
    }

    const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(AbortReason::FrontFloorLost),
            2 => Some(AbortReason::BackFloorLost),
            3 => Some(AbortReason::LeanLimit),
            4 => Some(AbortReason::Cancelled),
            _ => None,
        }
    }
}

/// Result of one step tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepStatus {
    Running,
    Finished,
    Aborted(AbortReason),
}

/// Sequence-wide cancellation flag
///
/// Only plain loads and stores are used, so this works on cores without
/// compare-and-swap. The first reason raised during a tick may be
/// overwritten by a later one; either way the climb stops.
#[derive(Debug, Default)]
pub struct CancelFlag {
    reason: AtomicU8,
}

impl CancelFlag {
    pub const fn new() -> Self {
        Self {
            reason: AtomicU8::new(0),
        }
    }

    /// Raise the flag
    pub fn cancel(&self, reason: AbortReason) {
        self.reason.store(reason.code(), Ordering::Release);
    }

    /// Reason the flag was raised, if it is
    pub fn reason(&self) -> Option<AbortReason> {
        AbortReason::from_code(self.reason.load(Ordering::Acquire))
    }

    pub fn is_raised(&self) -> bool {
        self.reason().is_some()
    }

    /// Lower the flag (done when a sequence starts)
    pub fn clear(&self) {
        self.reason.store(0, Ordering::Release);
    }
}
