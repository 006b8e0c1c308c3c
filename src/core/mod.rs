// Engine-independent building blocks: math helpers, scheduled events and the
// event channel shared between the simulation and its observers

pub mod events;
pub mod math;
pub mod schedule;

pub use events::{EventChannel, Subscription};
pub use schedule::Scheduler;
