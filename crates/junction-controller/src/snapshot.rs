//! Output snapshots for drivers and traces.
//!
//! A snapshot captures the observable surface of the controller after a
//! tick settles: the four signal heads, the walk flag, and where the FSM
//! is in its dwell. The harness prints one per second-elapsed pulse,
//! either as a fixed-width text line or (with the `json` feature) as a
//! JSON object per line.

use std::fmt;

use crate::controller::Controller;
use crate::phase::{Approach, Light, Phase};

/// Observable controller state at one pulse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Snapshot {
    /// Seconds since the driver started observing.
    pub second: u64,
    /// Current phase.
    pub phase: Phase,
    /// North approach signal head.
    pub north: Light,
    /// East approach signal head.
    pub east: Light,
    /// South approach signal head.
    pub south: Light,
    /// West approach signal head.
    pub west: Light,
    /// Pedestrian walk signal.
    pub walk: bool,
    /// Whole seconds spent in the current phase.
    pub phase_elapsed: u32,
}

impl Snapshot {
    /// Capture the controller's observable state.
    #[must_use]
    pub fn capture(second: u64, controller: &Controller) -> Self {
        Self {
            second,
            phase: controller.phase(),
            north: controller.light(Approach::North),
            east: controller.light(Approach::East),
            south: controller.light(Approach::South),
            west: controller.light(Approach::West),
            walk: controller.walk(),
            phase_elapsed: controller.phase_elapsed(),
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:>5}s] N:{} E:{} S:{} W:{} walk:{} phase:{} elapsed:{}",
            self.second,
            self.north.letter(),
            self.east.letter(),
            self.south.letter(),
            self.west.letter(),
            if self.walk { 'W' } else { '-' },
            self.phase,
            self.phase_elapsed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControllerConfig;
    use junction_core::Tickable;

    #[test]
    fn capture_reflects_controller() {
        let mut controller = Controller::new(ControllerConfig::accelerated())
            .unwrap_or_else(|e| panic!("accelerated preset must validate: {e}"));
        for _ in 0..4 {
            controller.tick();
        }
        let snapshot = Snapshot::capture(1, &controller);
        assert_eq!(snapshot.phase, Phase::NorthGreen);
        assert_eq!(snapshot.north, Light::Green);
        assert_eq!(snapshot.east, Light::Red);
        assert!(!snapshot.walk);
        assert_eq!(snapshot.phase_elapsed, 1);
    }

    #[test]
    fn display_line_format() {
        let controller = Controller::new(ControllerConfig::accelerated())
            .unwrap_or_else(|e| panic!("accelerated preset must validate: {e}"));
        let snapshot = Snapshot::capture(12, &controller);
        assert_eq!(
            snapshot.to_string(),
            "[   12s] N:G E:R S:R W:R walk:- phase:north-green elapsed:0"
        );
    }
}
