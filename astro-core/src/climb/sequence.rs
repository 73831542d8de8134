//! Climb sequence runner
//!
//! Runs a list of climb steps to exhaustion or abort, one tick at a time.
//! The caller samples the climber's sensors before each tick.

use heapless::Vec;

use crate::state::{SequenceEvent, SequenceState};
use crate::traits::{Climber, DriveTrain, KeyValueStore};

use super::action::ClimbAction;
use super::step::{ClimbStep, StepKind};
use super::{AbortReason, CancelFlag, StepStatus};

/// Ordered climb steps and the runner state
#[derive(Debug)]
pub struct ClimbSequence {
    action: ClimbAction,
    steps: Vec<ClimbStep, { StepKind::COUNT }>,
    state: SequenceState,
    cancel: CancelFlag,
}

impl ClimbSequence {
    /// Build the sequence for a named action
    ///
    /// With `controls_drive` the drive steps also push the drive train and
    /// every step start stops it.
    pub fn new(action: ClimbAction, controls_drive: bool) -> Self {
        let mut steps = Vec::new();
        for &kind in action.steps() {
            if steps.push(ClimbStep::new(kind, controls_drive)).is_err() {
                break;
            }
        }

        Self {
            action,
            steps,
            state: SequenceState::Idle,
            cancel: CancelFlag::new(),
        }
    }

    /// The full five-step climb
    pub fn climb_up() -> Self {
        Self::new(ClimbAction::ClimbUp, true)
    }

    pub fn action(&self) -> ClimbAction {
        self.action
    }

    pub fn state(&self) -> SequenceState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step that is currently running
    pub fn active_step(&self) -> Option<&ClimbStep> {
        self.state.step_index().and_then(|index| self.steps.get(index))
    }

    /// Flag shared with the steps; raising it stops the climb on the next tick
    pub fn cancel_flag(&self) -> &CancelFlag {
        &self.cancel
    }

    /// Request a stop; takes effect on the next tick
    pub fn cancel(&self) {
        if self.state.is_running() {
            self.cancel.cancel(AbortReason::Cancelled);
        }
    }

    /// Start (or restart) the sequence and initialize the first step
    ///
    /// Does nothing while already running.
    pub fn start<C, D, S>(&mut self, climber: &C, drive: &mut D, store: &mut S) -> SequenceState
    where
        C: Climber,
        D: DriveTrain,
        S: KeyValueStore,
    {
        if self.state.is_running() {
            return self.state;
        }

        self.cancel.clear();

        #[cfg(feature = "defmt")]
        defmt::info!("climb: {} starting", self.action.name());

        self.apply(SequenceEvent::Start);
        if self.steps.is_empty() {
            self.apply(SequenceEvent::SequenceFinished);
        } else if let Some(step) = self.steps.first_mut() {
            step.initialize(climber, drive, store);
        }
        self.state
    }

    /// Run one control tick
    ///
    /// Checks the cancel flag, then ticks the active step. When the step
    /// finishes its outputs are zeroed and the next step is initialized; it
    /// first executes on the following tick.
    pub fn tick<C, D, S>(&mut self, climber: &mut C, drive: &mut D, store: &mut S) -> SequenceState
    where
        C: Climber,
        D: DriveTrain,
        S: KeyValueStore,
    {
        let Some(index) = self.state.step_index() else {
            return self.state;
        };
        let Some(step) = self.steps.get_mut(index) else {
            self.apply(SequenceEvent::SequenceFinished);
            return self.state;
        };

        if let Some(reason) = self.cancel.reason() {
            step.end(climber, drive);
            let event = match reason {
                AbortReason::Cancelled => SequenceEvent::Cancel,
                other => SequenceEvent::Abort(other),
            };
            self.apply(event);
            return self.state;
        }

        match step.tick(climber, drive, &self.cancel) {
            StepStatus::Running => {}
            StepStatus::Aborted(reason) => {
                step.end(climber, drive);
                self.apply(SequenceEvent::Abort(reason));
            }
            StepStatus::Finished => {
                step.end(climber, drive);

                #[cfg(feature = "defmt")]
                defmt::info!("climb: {} finished", step.kind().name());

                let next = index + 1;
                if next < self.steps.len() {
                    self.apply(SequenceEvent::StepFinished);
                    if let Some(step) = self.steps.get_mut(next) {
                        step.initialize(&*climber, drive, store);
                    }
                } else {
                    self.apply(SequenceEvent::SequenceFinished);
                }
            }
        }

        self.state
    }

    fn apply(&mut self, event: SequenceEvent) {
        let next = self.state.transition(event);

        #[cfg(feature = "defmt")]
        log_transition(self.action, next);

        self.state = next;
    }
}

#[cfg(feature = "defmt")]
fn log_transition(action: ClimbAction, state: SequenceState) {
    match state {
        SequenceState::Aborted(reason) => {
            defmt::warn!("climb: {} aborted: {}", action.name(), reason)
        }
        SequenceState::Finished => defmt::info!("climb: {} complete", action.name()),
        _ => {}
    }
}
