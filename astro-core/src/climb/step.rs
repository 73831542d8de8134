//! Climb steps
//!
//! One struct for every step; `StepKind` selects the control law,
//! completion test and abort test.

use crate::balance::{extend_both, maintain_back};
use crate::config::ClimbConfig;
use crate::traits::{Climber, DriveTrain, KeyValueStore, LegActuator};

use super::{AbortReason, CancelFlag, StepStatus};

/// Drive train power while the climb wheels pull the robot forward
pub const DRIVE_ASSIST_POWER: f32 = 0.15;

/// The five climb steps, in climb order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepKind {
    /// Lift the robot by extending both legs together
    ExtendBothLegs,
    /// Roll forward on the climb wheels until the front sensor sees the step
    DriveToFrontSensor,
    /// Pull the front leg up onto the step
    RetractFrontLegs,
    /// Roll forward until the back sensor sees the step
    DriveToBackSensor,
    /// Pull the back leg up
    RetractBackLegs,
}

impl StepKind {
    /// Number of steps in a full climb
    pub const COUNT: usize = 5;

    /// All steps, in climb order
    pub const ALL: [StepKind; Self::COUNT] = [
        StepKind::ExtendBothLegs,
        StepKind::DriveToFrontSensor,
        StepKind::RetractFrontLegs,
        StepKind::DriveToBackSensor,
        StepKind::RetractBackLegs,
    ];

    /// Operator-facing name
    pub const fn name(self) -> &'static str {
        match self {
            StepKind::ExtendBothLegs => "Extend Both Legs",
            StepKind::DriveToFrontSensor => "Drive To Front Sensor",
            StepKind::RetractFrontLegs => "Retract Front Legs",
            StepKind::DriveToBackSensor => "Drive To Back Sensor",
            StepKind::RetractBackLegs => "Retract Back Legs",
        }
    }

    /// True for the steps that push the chassis forward
    pub const fn is_drive(self) -> bool {
        matches!(self, StepKind::DriveToFrontSensor | StepKind::DriveToBackSensor)
    }
}

/// Limit switch trip counts captured when a step starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LegSnapshot {
    pub front_extended: u32,
    pub front_retracted: u32,
    pub back_extended: u32,
    pub back_retracted: u32,
}

impl LegSnapshot {
    pub fn capture<C: Climber>(climber: &C) -> Self {
        Self {
            front_extended: climber.front_leg().extended_count(),
            front_retracted: climber.front_leg().retracted_count(),
            back_extended: climber.back_leg().extended_count(),
            back_retracted: climber.back_leg().retracted_count(),
        }
    }
}

/// One climb step
#[derive(Debug, Clone)]
pub struct ClimbStep {
    kind: StepKind,
    config: ClimbConfig,
    snapshot: LegSnapshot,
    controls_drive: bool,
}

impl ClimbStep {
    /// Create a step; `controls_drive` gives it the drive train
    pub fn new(kind: StepKind, controls_drive: bool) -> Self {
        Self {
            kind,
            config: ClimbConfig::default(),
            snapshot: LegSnapshot::default(),
            controls_drive,
        }
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    pub fn config(&self) -> &ClimbConfig {
        &self.config
    }

    pub fn snapshot(&self) -> &LegSnapshot {
        &self.snapshot
    }

    /// Start the step: snapshot the switches, reload tunables, stop the drive
    pub fn initialize<C, D, S>(&mut self, climber: &C, drive: &mut D, store: &mut S)
    where
        C: Climber,
        D: DriveTrain,
        S: KeyValueStore,
    {
        self.snapshot = LegSnapshot::capture(climber);
        self.config = ClimbConfig::load(store);
        if self.controls_drive {
            drive.stop();
        }

        #[cfg(feature = "defmt")]
        defmt::info!("climb: {} started", self.kind.name());
    }

    /// Check the abort condition for this step
    pub fn abort_reason<C: Climber>(&self, climber: &C) -> Option<AbortReason> {
        match self.kind {
            StepKind::RetractFrontLegs if !climber.front_leg().is_over_floor() => {
                Some(AbortReason::FrontFloorLost)
            }
            StepKind::RetractBackLegs if !climber.back_leg().is_over_floor() => {
                Some(AbortReason::BackFloorLost)
            }
            // Only leaning back is checked here; forward lean while the back
            // leg comes up is left to the operator.
            StepKind::RetractBackLegs if climber.lean() > self.config.max_lean_down => {
                Some(AbortReason::LeanLimit)
            }
            _ => None,
        }
    }

    /// Apply this tick's control law
    pub fn execute<C: Climber, D: DriveTrain>(&mut self, climber: &mut C, drive: &mut D) {
        let cfg = self.config;
        let lean = climber.lean();

        match self.kind {
            StepKind::ExtendBothLegs => {
                let power = extend_both(cfg.extend_speed, lean, cfg.max_lean_up);
                climber.front_leg_mut().set_motor_power(power.front);
                climber.back_leg_mut().set_motor_power(power.back);
            }
            StepKind::DriveToFrontSensor | StepKind::DriveToBackSensor => {
                climber.set_wheel_power(cfg.wheel_power);
                maintain_back_leg(climber, &cfg);
                if self.controls_drive {
                    drive.set_power(DRIVE_ASSIST_POWER, DRIVE_ASSIST_POWER);
                }
            }
            StepKind::RetractFrontLegs => {
                maintain_back_leg(climber, &cfg);
                let front = if lean < -cfg.max_lean_down {
                    0.0
                } else {
                    cfg.retract_speed
                };
                climber.front_leg_mut().set_motor_power(front);
            }
            StepKind::RetractBackLegs => {
                climber.back_leg_mut().set_motor_power(cfg.retract_speed);
            }
        }
    }

    /// Check the completion condition for this step
    pub fn is_finished<C: Climber>(&self, climber: &C) -> bool {
        let snap = &self.snapshot;
        match self.kind {
            StepKind::ExtendBothLegs => {
                climber.front_leg().has_extended(snap.front_extended)
                    && climber.back_leg().has_extended(snap.back_extended)
            }
            StepKind::DriveToFrontSensor => climber.front_leg().is_over_floor(),
            StepKind::RetractFrontLegs => climber.front_leg().has_retracted(snap.front_retracted),
            StepKind::DriveToBackSensor => climber.back_leg().is_over_floor(),
            StepKind::RetractBackLegs => climber.back_leg().has_retracted(snap.back_retracted),
        }
    }

    /// Stop every output this step may have driven
    pub fn end<C: Climber, D: DriveTrain>(&mut self, climber: &mut C, drive: &mut D) {
        climber.stop_all();
        if self.controls_drive {
            drive.stop();
        }
    }

    /// Run one control tick: abort check, control law, completion check
    ///
    /// On abort the reason is raised on `cancel` and no motor is written;
    /// the runner is expected to call `end`.
    pub fn tick<C: Climber, D: DriveTrain>(
        &mut self,
        climber: &mut C,
        drive: &mut D,
        cancel: &CancelFlag,
    ) -> StepStatus {
        if let Some(reason) = self.abort_reason(climber) {
            cancel.cancel(reason);
            return StepStatus::Aborted(reason);
        }

        self.execute(climber, drive);

        if self.is_finished(climber) {
            StepStatus::Finished
        } else {
            StepStatus::Running
        }
    }
}

fn maintain_back_leg<C: Climber>(climber: &mut C, cfg: &ClimbConfig) {
    let command = maintain_back(climber.lean(), cfg.max_lean_down);
    if let Some(power) = command.power(cfg.extend_speed, cfg.retract_speed) {
        climber.back_leg_mut().set_motor_power(power);
    }
}
