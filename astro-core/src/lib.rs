//! Board-agnostic core logic for the Astro climber
//!
//! This crate contains all climb logic that does not depend on specific
//! hardware implementations:
//!
//! - Actuator, sensor, drive and store traits
//! - Limit switch trip counting and floor threshold logic
//! - Balance / power shaping math
//! - Climb steps and the sequence runner
//! - Sequence state machine
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod balance;
pub mod climb;
pub mod config;
pub mod sensor;
pub mod state;
pub mod traits;
