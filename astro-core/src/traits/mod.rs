//! Hardware abstraction traits
//!
//! These traits define the interface between the climb logic and the
//! driver implementations (or test doubles).

pub mod climber;
pub mod drive;
pub mod lean;
pub mod leg;
pub mod motor;
pub mod sensor;
pub mod store;

pub use climber::Climber;
pub use drive::DriveTrain;
pub use lean::LeanSource;
pub use leg::{LegActuator, LegId};
pub use motor::{clamp_power, PowerOutput};
pub use sensor::{FloorSensor, LimitSensor};
pub use store::{KeyValueStore, StoreError};
