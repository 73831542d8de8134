//! Climber subsystem trait
//!
//! The climb steps only ever talk to the climber through this trait: two
//! legs, the wheels under the back leg, and the chassis lean.

use super::leg::LegActuator;

/// Climbing mechanism: both legs, climb wheels and lean
pub trait Climber {
    /// Leg implementation (both legs share a type)
    type Leg: LegActuator;

    /// Front leg
    fn front_leg(&self) -> &Self::Leg;

    /// Front leg, mutable
    fn front_leg_mut(&mut self) -> &mut Self::Leg;

    /// Back leg
    fn back_leg(&self) -> &Self::Leg;

    /// Back leg, mutable
    fn back_leg_mut(&mut self) -> &mut Self::Leg;

    /// Set power on the wheels attached to the back leg, in [-1, +1]
    fn set_wheel_power(&mut self, power: f32);

    /// Last commanded wheel power
    fn wheel_power(&self) -> f32;

    /// Degrees the chassis is leaning forward (negative) or backward (positive)
    fn lean(&self) -> f32;

    /// Stop both leg motors and the climb wheels
    fn stop_all(&mut self) {
        self.front_leg_mut().set_motor_power(0.0);
        self.back_leg_mut().set_motor_power(0.0);
        self.set_wheel_power(0.0);
    }
}
