//! Controller configuration.

use std::fmt;

use crate::phase::Phase;

/// Default ticks per second-elapsed pulse: a 1 MHz master clock gives one
/// pulse per physical second.
pub const DEFAULT_DIVIDER_MODULUS: u32 = 1_000_000;

/// Intersection controller configuration, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Ticks per second-elapsed pulse.
    pub divider_modulus: u32,
    /// Dwell of each directional green phase, in seconds.
    pub green_secs: u32,
    /// Dwell of each directional yellow phase, in seconds.
    pub yellow_secs: u32,
    /// Dwell of the pedestrian scramble, in seconds.
    pub walk_secs: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            divider_modulus: DEFAULT_DIVIDER_MODULUS,
            green_secs: 10,
            yellow_secs: 3,
            walk_secs: 10,
        }
    }
}

impl ControllerConfig {
    /// Test/dev preset: default dwells with a four-tick second, so a full
    /// cycle completes in a few hundred ticks instead of sixty-two million.
    #[must_use]
    pub const fn accelerated() -> Self {
        Self {
            divider_modulus: 4,
            green_secs: 10,
            yellow_secs: 3,
            walk_secs: 10,
        }
    }

    /// Reject configurations that would make a phase never advance or the
    /// divider never pulse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.divider_modulus == 0 {
            return Err(ConfigError::ZeroModulus);
        }
        if self.green_secs == 0 {
            return Err(ConfigError::ZeroDuration("green_secs"));
        }
        if self.yellow_secs == 0 {
            return Err(ConfigError::ZeroDuration("yellow_secs"));
        }
        if self.walk_secs == 0 {
            return Err(ConfigError::ZeroDuration("walk_secs"));
        }
        Ok(())
    }

    /// Configured dwell of a phase, in seconds.
    ///
    /// `Emergency` has no dwell: it ends when the emergency level drops.
    #[must_use]
    pub const fn duration_of(&self, phase: Phase) -> Option<u32> {
        match phase {
            Phase::NorthGreen | Phase::EastGreen | Phase::SouthGreen | Phase::WestGreen => {
                Some(self.green_secs)
            }
            Phase::NorthYellow
            | Phase::EastYellow
            | Phase::SouthYellow
            | Phase::WestYellow => Some(self.yellow_secs),
            Phase::WalkAll => Some(self.walk_secs),
            Phase::Emergency => None,
        }
    }
}

/// A configuration rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The divider modulus is zero, so the second pulse would never fire.
    ZeroModulus,
    /// A phase duration is zero, so that phase would never dwell.
    ZeroDuration(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroModulus => write!(f, "divider modulus must be at least 1 tick"),
            Self::ZeroDuration(field) => {
                write!(f, "phase duration {field} must be at least 1 second")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
