//! Configuration and wiring of the clients shared by every actor.

mod settings;
mod stack;

pub use settings::*;
pub use stack::Stack;
