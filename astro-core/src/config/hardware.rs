//! Hardware map
//!
//! Pin assignments and wiring quirks for the two robots. The layout mirrors
//! the competition robot; the practice robot differs only in how its IMU is
//! mounted.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sensor::FloorThreshold;

/// Default I2C address of the MPU-6050 (AD0 low)
pub const DEFAULT_IMU_ADDRESS: u8 = 0x68;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Active-low input with pull-up, the usual wiring for a switch to ground
    pub const fn switch_to_ground(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }
}

/// PWM motor controller output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotorHwConfig {
    /// PWM-capable GPIO
    pub pin: u8,
    /// Reverse the motor direction
    pub inverted: bool,
}

impl MotorHwConfig {
    pub const fn new(pin: u8, inverted: bool) -> Self {
        Self { pin, inverted }
    }
}

/// One leg: two limit switches, a floor sensor and the lift motor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegHwConfig {
    /// Switch tripped at full extension
    pub extended: PinConfig,
    /// Switch tripped at full retraction
    pub retracted: PinConfig,
    /// ADC channel of the floor proximity sensor
    pub floor_channel: u8,
    /// Lift motor
    pub motor: MotorHwConfig,
}

/// Which IMU axis measures forward/backward lean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LeanAxis {
    #[default]
    Pitch,
    /// Controller mounted rotated 90 degrees
    Roll,
}

/// IMU wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImuHwConfig {
    pub sda_pin: u8,
    pub scl_pin: u8,
    /// 7-bit I2C address
    pub address: u8,
    /// Axis that measures lean
    pub lean_axis: LeanAxis,
    /// Negate the axis so that forward lean reads negative
    pub invert_lean: bool,
}

impl Default for ImuHwConfig {
    fn default() -> Self {
        Self {
            sda_pin: 4,
            scl_pin: 5,
            address: DEFAULT_IMU_ADDRESS,
            lean_axis: LeanAxis::Pitch,
            invert_lean: false,
        }
    }
}

/// Drive train wiring and behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriveHwConfig {
    pub left: MotorHwConfig,
    pub right: MotorHwConfig,
    /// Brake (rather than coast) at zero power
    pub brake_mode: bool,
}

impl Default for DriveHwConfig {
    fn default() -> Self {
        Self {
            left: MotorHwConfig::new(10, true),
            right: MotorHwConfig::new(11, false),
            brake_mode: true,
        }
    }
}

/// Complete robot wiring
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RobotHwConfig {
    pub front_leg: LegHwConfig,
    pub back_leg: LegHwConfig,
    /// Climb wheel motor that is commanded directly
    pub wheel_leader: MotorHwConfig,
    /// Climb wheel motor that mirrors the leader
    pub wheel_follower: MotorHwConfig,
    pub drive: DriveHwConfig,
    pub imu: ImuHwConfig,
    /// Operator button that starts (or cancels) the climb
    pub start_button: PinConfig,
    /// How floor sensor voltages are thresholded
    pub floor_threshold: FloorThreshold,
}

impl RobotHwConfig {
    /// Competition robot
    pub fn competition() -> Self {
        Self::default()
    }

    /// Practice robot: controller mounted rotated, lean comes from roll
    pub fn practice() -> Self {
        let mut config = Self::default();
        config.imu.lean_axis = LeanAxis::Roll;
        config
    }
}

impl Default for RobotHwConfig {
    fn default() -> Self {
        Self {
            front_leg: LegHwConfig {
                extended: PinConfig::switch_to_ground(7),
                retracted: PinConfig::switch_to_ground(8),
                floor_channel: 0,
                motor: MotorHwConfig::new(14, false),
            },
            back_leg: LegHwConfig {
                extended: PinConfig::switch_to_ground(9),
                retracted: PinConfig::switch_to_ground(6),
                floor_channel: 1,
                motor: MotorHwConfig::new(15, false),
            },
            wheel_leader: MotorHwConfig::new(16, false),
            wheel_follower: MotorHwConfig::new(17, true),
            drive: DriveHwConfig::default(),
            imu: ImuHwConfig::default(),
            start_button: PinConfig::switch_to_ground(2),
            floor_threshold: FloorThreshold::SOFTWARE,
        }
    }
}
