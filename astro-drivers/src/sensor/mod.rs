//! Limit switch and floor sensor drivers

pub mod floor;
pub mod limit;

pub use floor::{AnalogFloorSensor, ComparatorFloorSensor, HysteresisTrigger};
pub use limit::PolledLimitSwitch;
