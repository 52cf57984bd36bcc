//! Tick divider: derives the second-elapsed pulse from the master clock.

/// Divides the master clock down to the one-second pulse.
///
/// The counter increments every tick. On the tick where it reaches
/// `modulus - 1` the divider emits a one-tick-wide pulse and wraps the
/// counter to 0 for the following tick.
pub struct TickDivider {
    /// Ticks per second-elapsed pulse.
    modulus: u32,
    /// Current tick count within the divider period.
    count: u32,
    /// Pulse emitted by the most recent tick.
    pulse: bool,
}

impl TickDivider {
    /// Create a divider. The caller validates that `modulus` is non-zero.
    #[must_use]
    pub const fn new(modulus: u32) -> Self {
        Self {
            modulus,
            count: 0,
            pulse: false,
        }
    }

    /// Advance by one master clock tick.
    pub fn tick(&mut self) {
        self.pulse = self.count == self.modulus - 1;
        self.count = if self.pulse { 0 } else { self.count + 1 };
    }

    /// Whether the most recent tick completed a divider period.
    #[must_use]
    pub const fn second_elapsed(&self) -> bool {
        self.pulse
    }

    /// Force the counter back to its initial value.
    pub fn reset(&mut self) {
        self.count = 0;
        self.pulse = false;
    }

    /// Debug: current counter value.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }
}
