//! Sensor logic
//!
//! Hardware-independent pieces of the limit and floor sensors: rising-edge
//! counting and voltage thresholding.

pub mod floor;
pub mod limit;

pub use floor::{FloorDetector, FloorThreshold, FLOOR_LOWER_V, FLOOR_THRESHOLD_V, FLOOR_UPPER_V};
pub use limit::TripCounter;
