//! Cycle-driven signal controller for a four-way road intersection.
//!
//! Three synchronous components are evaluated once per master clock tick:
//! - a tick divider that derives the one-second pulse from the master clock,
//! - a phase timer that counts whole seconds spent in the current phase,
//! - the intersection FSM that walks the eight directional phases and the
//!   pedestrian scramble, and handles emergency preemption.
//!
//! The driver supplies ticks, a reset, and an emergency level; it observes
//! four signal heads and the pedestrian walk flag after each tick settles.

mod config;
mod controller;
mod divider;
mod phase;
pub mod snapshot;
mod timer;

pub use config::{ConfigError, ControllerConfig, DEFAULT_DIVIDER_MODULUS};
pub use controller::Controller;
pub use divider::TickDivider;
pub use phase::{Approach, Light, Phase};
pub use snapshot::Snapshot;
pub use timer::PhaseTimer;
