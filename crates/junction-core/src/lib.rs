//! Core traits and types for cycle-driven signal control.
//!
//! Every controller in this workspace advances in ticks of a master clock.
//! All timing — pulse derivation, phase dwell, emergency reaction latency —
//! derives from that tick. No exceptions.

mod observable;
mod tickable;
mod ticks;

pub use observable::{Observable, Value};
pub use tickable::Tickable;
pub use ticks::Ticks;
