//! Inertial sensor drivers

pub mod bus;
pub mod mpu6050;

pub use bus::BlockingI2c;
pub use mpu6050::{ImuError, Mpu6050};
