//! Phase timer: whole seconds spent in the current phase.

/// Counts second-elapsed pulses since the last phase change.
///
/// A clear request from the FSM takes effect on the tick it is raised,
/// whatever the divider is doing; this is what lets an emergency that
/// arrives mid-period still restart the interrupted phase's dwell from
/// zero. When a clear request and a pulse coincide, the clear wins.
pub struct PhaseTimer {
    elapsed: u32,
}

impl PhaseTimer {
    #[must_use]
    pub const fn new() -> Self {
        Self { elapsed: 0 }
    }

    /// Advance by one tick.
    ///
    /// `pulse` is the divider's second-elapsed signal for this tick;
    /// `clear` is the FSM's phase-change request for this tick.
    pub fn advance(&mut self, pulse: bool, clear: bool) {
        if clear {
            self.elapsed = 0;
        } else if pulse {
            self.elapsed += 1;
        }
    }

    /// Whole seconds spent in the current phase.
    #[must_use]
    pub const fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Force the count back to its initial value.
    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}

impl Default for PhaseTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_pulses_only() {
        let mut timer = PhaseTimer::new();
        timer.advance(false, false);
        timer.advance(false, false);
        assert_eq!(timer.elapsed(), 0);
        timer.advance(true, false);
        assert_eq!(timer.elapsed(), 1);
        timer.advance(true, false);
        assert_eq!(timer.elapsed(), 2);
    }

    #[test]
    fn clear_wins_over_pulse() {
        let mut timer = PhaseTimer::new();
        timer.advance(true, false);
        timer.advance(true, false);
        timer.advance(true, true);
        assert_eq!(timer.elapsed(), 0);
    }

    #[test]
    fn clear_takes_effect_between_pulses() {
        let mut timer = PhaseTimer::new();
        timer.advance(true, false);
        timer.advance(false, true);
        assert_eq!(timer.elapsed(), 0);
    }
}
