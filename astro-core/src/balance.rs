//! Balance / power shaping
//!
//! Pure functions that turn a desired leg power and the chassis lean into
//! the power actually commanded on each leg. There is no closed loop here:
//! the leg that is "ahead" is slowed or stopped until the other catches up.
//!
//! Lean sign: negative = leaning forward (front low), positive = leaning
//! backward (back low).

/// Power reduction per degree of lean
pub const REDUCTION_PER_DEGREE: f32 = 0.05;

/// Largest fraction `reduce_power` will take off
pub const MAX_REDUCTION: f32 = 0.25;

/// Lean the back leg holds while the front wheels move over the step
pub const DESIRED_LEAN: f32 = -2.0;

/// Half-width of the band around `DESIRED_LEAN` where the back leg stops
pub const LEAN_DEAD_ZONE: f32 = 1.0;

/// Scale `power` down in proportion to `lean`
///
/// Reduction is 5% per degree, capped at 25%. `lean` is expected to be
/// non-negative; callers pass the magnitude.
pub fn reduce_power(power: f32, lean: f32) -> f32 {
    let reduction = (REDUCTION_PER_DEGREE * lean).min(MAX_REDUCTION);
    power * (1.0 - reduction)
}

/// True when the chassis leans forward
pub fn is_leaning_forward(lean: f32) -> bool {
    lean < 0.0
}

/// Power for both legs
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LegPower {
    pub front: f32,
    pub back: f32,
}

impl LegPower {
    pub const fn both(power: f32) -> Self {
        Self {
            front: power,
            back: power,
        }
    }
}

/// Shape the power for extending both legs together
///
/// Leaning forward means the back leg is ahead: it is reduced, or stopped
/// past `max_lean_up`. Leaning backward does the same to the front leg.
pub fn extend_both(power: f32, lean: f32, max_lean_up: f32) -> LegPower {
    let mut out = LegPower::both(power);

    if is_leaning_forward(lean) {
        out.back = if lean < -max_lean_up {
            0.0
        } else {
            reduce_power(out.back, -lean)
        };
    } else {
        out.front = if lean > max_lean_up {
            0.0
        } else {
            reduce_power(out.front, lean)
        };
    }

    out
}

/// What the back leg should do to hold the chassis near `DESIRED_LEAN`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BackLegCommand {
    /// Too far forward: pull the back leg up
    Retract,
    /// Too far back: push the back leg down
    Extend,
    /// Inside the dead zone
    Stop,
    /// Between the dead zone and the hard limit: leave the motor alone
    Hold,
}

impl BackLegCommand {
    /// Motor power for this command, or None to keep the previous one
    pub fn power(self, extend_speed: f32, retract_speed: f32) -> Option<f32> {
        match self {
            BackLegCommand::Retract => Some(retract_speed),
            BackLegCommand::Extend => Some(extend_speed),
            BackLegCommand::Stop => Some(0.0),
            BackLegCommand::Hold => None,
        }
    }
}

/// Decide the back leg command from the current lean
pub fn maintain_back(lean: f32, max_lean_down: f32) -> BackLegCommand {
    if lean < DESIRED_LEAN - max_lean_down {
        BackLegCommand::Retract
    } else if lean > DESIRED_LEAN + max_lean_down {
        BackLegCommand::Extend
    } else if lean > DESIRED_LEAN - LEAN_DEAD_ZONE && lean < DESIRED_LEAN + LEAN_DEAD_ZONE {
        BackLegCommand::Stop
    } else {
        BackLegCommand::Hold
    }
}
