//! Drive train facade trait
//!
//! The climb only needs to hold the chassis still or creep it forward, so
//! the facade exposes raw side power and stop. Operator mappings (arcade,
//! tank, curvature) live outside the climb core.

/// Two-sided drive train
pub trait DriveTrain {
    /// Apply power to the left and right sides, each in [-1, +1]
    fn set_power(&mut self, left: f32, right: f32);

    /// Stop all drive motors
    fn stop(&mut self) {
        self.set_power(0.0, 0.0);
    }
}
