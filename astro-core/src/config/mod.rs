//! Configuration types
//!
//! Two layers: the hardware map (pins, inversion, lean axis), fixed at
//! build time, and the climb tunables, read from the key-value store at the
//! start of every climb step.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
