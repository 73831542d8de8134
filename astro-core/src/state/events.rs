//! Events that drive the sequence state machine

use crate::climb::AbortReason;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceEvent {
    /// Operator asked for the climb to run
    Start,
    /// Active step finished and another one follows
    StepFinished,
    /// Last step finished
    SequenceFinished,
    /// Active step hit its abort condition
    Abort(AbortReason),
    /// Operator (or another task) cancelled the climb
    Cancel,
}
