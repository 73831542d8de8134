//! Tank drive facade
//!
//! The climb only ever stops the drive or nudges it forward, so this is a
//! thin wrapper: side power in, inversion and brake mode fixed at
//! construction.

use astro_core::config::DriveHwConfig;
use astro_core::traits::{clamp_power, DriveTrain, PowerOutput};

/// Drive behaviour chosen at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriveConfig {
    pub left_inverted: bool,
    pub right_inverted: bool,
    /// Brake (rather than coast) at zero power
    pub brake_mode: bool,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            left_inverted: true,
            right_inverted: false,
            brake_mode: true,
        }
    }
}

impl From<&DriveHwConfig> for DriveConfig {
    fn from(hw: &DriveHwConfig) -> Self {
        Self {
            left_inverted: hw.left.inverted,
            right_inverted: hw.right.inverted,
            brake_mode: hw.brake_mode,
        }
    }
}

/// Two-sided drive train
pub struct TankDrive<L, R> {
    left: L,
    right: R,
    config: DriveConfig,
}

impl<L: PowerOutput, R: PowerOutput> TankDrive<L, R> {
    /// Wrap the side outputs; they should not invert on their own
    pub fn new(mut left: L, mut right: R, config: DriveConfig) -> Self {
        left.set_brake_mode(config.brake_mode);
        right.set_brake_mode(config.brake_mode);
        left.stop();
        right.stop();
        Self {
            left,
            right,
            config,
        }
    }

    pub fn config(&self) -> &DriveConfig {
        &self.config
    }

    /// Commanded (pre-inversion) power per side
    pub fn power(&self) -> (f32, f32) {
        let left = signed(self.left.power(), self.config.left_inverted);
        let right = signed(self.right.power(), self.config.right_inverted);
        (left, right)
    }
}

impl<L: PowerOutput, R: PowerOutput> DriveTrain for TankDrive<L, R> {
    fn set_power(&mut self, left: f32, right: f32) {
        self.left
            .set_power(signed(clamp_power(left), self.config.left_inverted));
        self.right
            .set_power(signed(clamp_power(right), self.config.right_inverted));
    }

    fn stop(&mut self) {
        self.left.stop();
        self.right.stop();
    }
}

fn signed(power: f32, inverted: bool) -> f32 {
    if inverted {
        -power
    } else {
        power
    }
}
