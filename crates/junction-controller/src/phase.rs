//! Signal phases and light decode.
//!
//! The controller walks a fixed cycle of eight directional phases followed
//! by an all-red pedestrian scramble:
//!
//! ```text
//! NorthGreen → NorthYellow → EastGreen → EastYellow → SouthGreen →
//! SouthYellow → WestGreen → WestYellow → WalkAll → NorthGreen → …
//! ```
//!
//! `Emergency` sits outside the cycle: it is entered by preemption from any
//! phase and left by resuming the phase that was interrupted.

use std::fmt;

/// A single signal head colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum Light {
    Red,
    Yellow,
    Green,
}

impl Light {
    /// One-letter code for trace output.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Yellow => write!(f, "yellow"),
            Self::Green => write!(f, "green"),
        }
    }
}

/// One of the four approaches to the intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approach {
    North,
    East,
    South,
    West,
}

impl Approach {
    /// All four approaches, in light-bank order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Index into a `[Light; 4]` light bank.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }
}

/// Controller phase. Exactly one is active at any tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum Phase {
    #[default]
    NorthGreen,
    NorthYellow,
    EastGreen,
    EastYellow,
    SouthGreen,
    SouthYellow,
    WestGreen,
    WestYellow,
    /// Pedestrian scramble: all approaches red, walk signal on.
    WalkAll,
    /// Emergency hold: all approaches red until the emergency level drops.
    Emergency,
}

impl Phase {
    /// Successor in the fixed signal cycle.
    ///
    /// `Emergency` is left via the saved phase, not via the cycle; its arm
    /// here is the fail-safe re-entry point into the cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::NorthGreen => Self::NorthYellow,
            Self::NorthYellow => Self::EastGreen,
            Self::EastGreen => Self::EastYellow,
            Self::EastYellow => Self::SouthGreen,
            Self::SouthGreen => Self::SouthYellow,
            Self::SouthYellow => Self::WestGreen,
            Self::WestGreen => Self::WestYellow,
            Self::WestYellow => Self::WalkAll,
            Self::WalkAll | Self::Emergency => Self::NorthGreen,
        }
    }

    /// Light bank for this phase, in `Approach::ALL` order (N, E, S, W).
    ///
    /// At most one approach is non-red; the scramble and the emergency hold
    /// are all-red.
    #[must_use]
    pub const fn lights(self) -> [Light; 4] {
        use Light::{Green, Red, Yellow};
        match self {
            Self::NorthGreen => [Green, Red, Red, Red],
            Self::NorthYellow => [Yellow, Red, Red, Red],
            Self::EastGreen => [Red, Green, Red, Red],
            Self::EastYellow => [Red, Yellow, Red, Red],
            Self::SouthGreen => [Red, Red, Green, Red],
            Self::SouthYellow => [Red, Red, Yellow, Red],
            Self::WestGreen => [Red, Red, Red, Green],
            Self::WestYellow => [Red, Red, Red, Yellow],
            Self::WalkAll | Self::Emergency => [Red, Red, Red, Red],
        }
    }

    /// Whether the pedestrian walk signal is on in this phase.
    #[must_use]
    pub const fn walk(self) -> bool {
        matches!(self, Self::WalkAll)
    }

    /// Raw register encoding of this phase.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::NorthGreen => 0,
            Self::NorthYellow => 1,
            Self::EastGreen => 2,
            Self::EastYellow => 3,
            Self::SouthGreen => 4,
            Self::SouthYellow => 5,
            Self::WestGreen => 6,
            Self::WestYellow => 7,
            Self::WalkAll => 8,
            Self::Emergency => 9,
        }
    }

    /// Decode a raw register encoding.
    ///
    /// Returns `None` for out-of-range codes; callers take the fail-safe
    /// recovery path rather than holding an undefined state.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::NorthGreen),
            1 => Some(Self::NorthYellow),
            2 => Some(Self::EastGreen),
            3 => Some(Self::EastYellow),
            4 => Some(Self::SouthGreen),
            5 => Some(Self::SouthYellow),
            6 => Some(Self::WestGreen),
            7 => Some(Self::WestYellow),
            8 => Some(Self::WalkAll),
            9 => Some(Self::Emergency),
            _ => None,
        }
    }

    /// Stable lowercase name, used in traces and observable queries.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NorthGreen => "north-green",
            Self::NorthYellow => "north-yellow",
            Self::EastGreen => "east-green",
            Self::EastYellow => "east-yellow",
            Self::SouthGreen => "south-green",
            Self::SouthYellow => "south-yellow",
            Self::WestGreen => "west-green",
            Self::WestYellow => "west-yellow",
            Self::WalkAll => "walk-all",
            Self::Emergency => "emergency",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
