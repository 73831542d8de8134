//! Astro Hardware Abstraction Layer
//!
//! This crate defines the peripheral traits the climber drivers are written
//! against. A board crate (the RP2040 firmware today) implements them for
//! its concrete peripherals, and host tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  astro-core (climb logic, no hardware)  │
//! └─────────────────────────────────────────┘
//!                     ▲
//!                     │ core traits
//! ┌─────────────────────────────────────────┐
//! │  astro-drivers (legs, drive, IMU, ...)  │
//! └─────────────────────────────────────────┘
//!                     │ hal traits
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  astro-hal (this crate)                 │
//! └─────────────────────────────────────────┘
//!                     ▲
//!                     │ impls
//! ┌─────────────────────────────────────────┐
//! │  astro-firmware (RP2040 / Embassy)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital inputs (limit switches, buttons)
//! - [`analog::AnalogInput`], [`analog::AnalogTrigger`] - Floor proximity sensors
//! - [`pwm::PwmChannel`] - Motor controller signal outputs
//! - [`i2c::I2cBus`] - I2C bus operations (IMU)
//! - [`imu::Orientation`] - Chassis attitude source

#![no_std]
#![deny(unsafe_code)]

pub mod analog;
pub mod gpio;
pub mod i2c;
pub mod imu;
pub mod pwm;

// Re-export key traits at crate root for convenience
pub use analog::{AnalogInput, AnalogTrigger};
pub use gpio::InputPin;
pub use i2c::I2cBus;
pub use imu::{Attitude, Orientation};
pub use pwm::PwmChannel;
