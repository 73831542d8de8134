//! Motor output drivers

pub mod pair;
pub mod pwm;

pub use pair::MotorPair;
pub use pwm::PwmMotor;
