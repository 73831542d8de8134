//! Climb sequence state machine
//!
//! The runner's lifecycle is explicit, finite and deterministic: every
//! change of state goes through `SequenceState::transition`.

pub mod events;
pub mod machine;

pub use events::SequenceEvent;
pub use machine::SequenceState;
