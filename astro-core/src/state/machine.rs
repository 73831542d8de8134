//! State machine definition

use super::events::SequenceEvent;
use crate::climb::AbortReason;

/// Sequence states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceState {
    /// Never started
    #[default]
    Idle,
    /// Step at this index is active
    Running(usize),
    /// Every step finished
    Finished,
    /// Stopped early; all actuators were zeroed
    Aborted(AbortReason),
}

impl SequenceState {
    /// Check if a step is active
    pub fn is_running(&self) -> bool {
        matches!(self, SequenceState::Running(_))
    }

    /// Check if the sequence ran and stopped (either way)
    pub fn is_done(&self) -> bool {
        matches!(self, SequenceState::Finished | SequenceState::Aborted(_))
    }

    /// Index of the active step
    pub fn step_index(&self) -> Option<usize> {
        match self {
            SequenceState::Running(index) => Some(*index),
            _ => None,
        }
    }

    /// Process an event and return the next state
    pub fn transition(self, event: SequenceEvent) -> Self {
        use SequenceEvent::*;
        use SequenceState::*;

        match (self, event) {
            // Start (or restart)
            (Idle | Finished | Aborted(_), Start) => Running(0),

            // Running transitions
            (Running(index), StepFinished) => Running(index + 1),
            (Running(_), SequenceFinished) => Finished,
            (Running(_), Abort(reason)) => Aborted(reason),
            (Running(_), Cancel) => Aborted(AbortReason::Cancelled),

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_run() {
        let mut state = SequenceState::Idle.transition(SequenceEvent::Start);
        assert_eq!(state, SequenceState::Running(0));

        for expected in 1..5 {
            state = state.transition(SequenceEvent::StepFinished);
            assert_eq!(state, SequenceState::Running(expected));
        }

        state = state.transition(SequenceEvent::SequenceFinished);
        assert_eq!(state, SequenceState::Finished);
        assert!(state.is_done());
    }

    #[test]
    fn test_abort_from_running() {
        let state = SequenceState::Running(2);
        assert_eq!(
            state.transition(SequenceEvent::Abort(AbortReason::FrontFloorLost)),
            SequenceState::Aborted(AbortReason::FrontFloorLost)
        );
        assert_eq!(
            state.transition(SequenceEvent::Cancel),
            SequenceState::Aborted(AbortReason::Cancelled)
        );
    }

    #[test]
    fn test_restart_after_done() {
        let aborted = SequenceState::Aborted(AbortReason::LeanLimit);
        assert_eq!(aborted.transition(SequenceEvent::Start), SequenceState::Running(0));
        assert_eq!(
            SequenceState::Finished.transition(SequenceEvent::Start),
            SequenceState::Running(0)
        );
    }

    #[test]
    fn test_ignored_events() {
        // Start while running does not restart
        assert_eq!(
            SequenceState::Running(3).transition(SequenceEvent::Start),
            SequenceState::Running(3)
        );
        // Nothing to cancel when idle
        assert_eq!(
            SequenceState::Idle.transition(SequenceEvent::Cancel),
            SequenceState::Idle
        );
        assert_eq!(
            SequenceState::Finished.transition(SequenceEvent::StepFinished),
            SequenceState::Finished
        );
    }

    #[test]
    fn test_step_index() {
        assert_eq!(SequenceState::Running(1).step_index(), Some(1));
        assert_eq!(SequenceState::Idle.step_index(), None);
        assert!(SequenceState::Running(0).is_running());
        assert!(!SequenceState::Idle.is_done());
    }
}
