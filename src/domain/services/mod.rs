pub mod actions;
pub mod events;
mod staging;
mod workflow;

pub use staging::*;
pub use workflow::*;
