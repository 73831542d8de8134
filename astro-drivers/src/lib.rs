//! Hardware driver implementations
//!
//! Concrete implementations of the astro-core traits on top of the
//! astro-hal peripheral traits:
//!
//! - Limit switches (polled, rising-edge counted) and floor sensors
//! - PWM motor controller outputs and leader/follower motor pairs
//! - Legs, the climber subsystem and the tank drive facade
//! - MPU-6050 accelerometer tilt and the lean estimator
//! - In-memory dashboard store

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod climber;
pub mod drive;
pub mod imu;
pub mod lean;
pub mod leg;
pub mod motor;
pub mod sensor;
pub mod store;

pub use climber::ClimberSubsystem;
pub use drive::{DriveConfig, TankDrive};
pub use lean::LeanEstimator;
pub use leg::Leg;
pub use store::Dashboard;
