//! Leg actuator trait
//!
//! A leg is one lift motor with a limit switch at each end of travel and a
//! floor proximity sensor next to it. The robot has two: front and back.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which leg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LegId {
    /// Leg at the front of the chassis
    Front,
    /// Leg at the back of the chassis (carries the climb wheels)
    Back,
}

impl LegId {
    /// Display name, used as a telemetry key prefix
    pub const fn name(self) -> &'static str {
        match self {
            LegId::Front => "Front",
            LegId::Back => "Back",
        }
    }
}

/// Leg actuator
///
/// IMPORTANT: `set_motor_power` has NO safety checks beyond clamping to
/// [-1, +1]. The climb steps are responsible for stopping the motor at the
/// ends of travel.
pub trait LegActuator {
    /// Which leg this is
    fn id(&self) -> LegId;

    /// Apply power to the lift motor (positive extends, negative retracts)
    fn set_motor_power(&mut self, power: f32);

    /// Last commanded lift motor power
    fn motor_power(&self) -> f32;

    /// Sample limit and floor sensors (called once per control tick)
    fn update(&mut self);

    /// True while the fully-extended switch is tripped
    fn is_extended(&self) -> bool;

    /// Number of times the fully-extended switch has tripped
    fn extended_count(&self) -> u32;

    /// True while the fully-retracted switch is tripped
    fn is_retracted(&self) -> bool;

    /// Number of times the fully-retracted switch has tripped
    fn retracted_count(&self) -> u32;

    /// True when the floor sensor next to this leg sees the floor
    fn is_over_floor(&self) -> bool;

    /// Check if the leg reached full extension since `prior_count`
    ///
    /// This is the safe way to test for full extension: it also catches
    /// the leg having drifted back off the switch.
    fn has_extended(&self, prior_count: u32) -> bool {
        self.is_extended() || self.extended_count() != prior_count
    }

    /// Check if the leg reached full retraction since `prior_count`
    fn has_retracted(&self, prior_count: u32) -> bool {
        self.is_retracted() || self.retracted_count() != prior_count
    }

    /// Stop the lift motor
    fn stop(&mut self) {
        self.set_motor_power(0.0);
    }
}
