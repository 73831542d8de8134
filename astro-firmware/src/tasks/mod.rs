//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod button;
pub mod climb;
pub mod limit;
pub mod tick;

pub use button::button_task;
pub use climb::climb_task;
pub use limit::limit_task;
pub use tick::tick_task;
