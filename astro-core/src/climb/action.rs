//! Named climb actions
//!
//! The dashboard lists the full climb plus each step on its own, so a step
//! can be rerun by hand after an abort.

use super::step::StepKind;

/// Something the operator can run by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClimbAction {
    /// All five steps in order
    ClimbUp,
    /// One step on its own
    Single(StepKind),
}

impl ClimbAction {
    /// Every action, in dashboard order
    pub const ALL: [ClimbAction; 6] = [
        ClimbAction::ClimbUp,
        ClimbAction::Single(StepKind::ExtendBothLegs),
        ClimbAction::Single(StepKind::DriveToFrontSensor),
        ClimbAction::Single(StepKind::RetractFrontLegs),
        ClimbAction::Single(StepKind::DriveToBackSensor),
        ClimbAction::Single(StepKind::RetractBackLegs),
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            ClimbAction::ClimbUp => "Climb Up",
            ClimbAction::Single(kind) => kind.name(),
        }
    }

    /// Look an action up by its dashboard name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.name() == name)
    }

    /// Steps this action runs, in order
    pub fn steps(&self) -> &'static [StepKind] {
        match self {
            ClimbAction::ClimbUp => &StepKind::ALL,
            ClimbAction::Single(kind) => kind_slice(*kind),
        }
    }
}

fn kind_slice(kind: StepKind) -> &'static [StepKind] {
    match kind {
        StepKind::ExtendBothLegs => &[StepKind::ExtendBothLegs],
        StepKind::DriveToFrontSensor => &[StepKind::DriveToFrontSensor],
        StepKind::RetractFrontLegs => &[StepKind::RetractFrontLegs],
        StepKind::DriveToBackSensor => &[StepKind::DriveToBackSensor],
        StepKind::RetractBackLegs => &[StepKind::RetractBackLegs],
    }
}
