//! Inertial sensor abstractions

/// Chassis attitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Attitude {
    /// Rotation about the lateral axis (nose up positive)
    pub pitch: f32,
    /// Rotation about the longitudinal axis
    pub roll: f32,
}

/// Source of chassis attitude
pub trait Orientation {
    /// Error type for sensor reads
    type Error;

    /// Read the current attitude
    fn read_attitude(&mut self) -> Result<Attitude, Self::Error>;
}
