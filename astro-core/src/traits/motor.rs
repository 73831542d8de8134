//! Motor output trait
//!
//! Every actuator on the climber (leg motors, climb wheels, drive sides) is
//! an open-loop power output in the range [-1, +1].

/// Clamp a power command to [-1, +1]
///
/// Non-finite values map to zero.
pub fn clamp_power(power: f32) -> f32 {
    if power.is_finite() {
        power.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Open-loop motor power output
pub trait PowerOutput {
    /// Set the output power in [-1, +1]
    ///
    /// Positive is forward (extend for legs). Implementations clamp.
    fn set_power(&mut self, power: f32);

    /// Last commanded power
    fn power(&self) -> f32;

    /// Enable brake (true) or coast (false) when power is zero
    ///
    /// Outputs without a neutral mode setting ignore this.
    fn set_brake_mode(&mut self, _enable: bool) {}

    /// Command zero power
    fn stop(&mut self) {
        self.set_power(0.0);
    }
}
