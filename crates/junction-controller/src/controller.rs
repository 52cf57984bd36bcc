//! Top-level intersection controller.
//!
//! One `tick()` advances every register together: the divider derives the
//! second-elapsed pulse, the FSM computes the next phase and light outputs
//! from {phase, saved phase, elapsed seconds, emergency level, pulse}, and
//! the phase timer advances or clears. Everything latches before `tick()`
//! returns, so an observer between ticks always sees a consistent state.
//!
//! Emergency preemption is tick-immediate: the hold is entered within one
//! tick of the level going high, whatever the current phase or dwell
//! progress. The exit is pulse-aligned: once the level drops, the
//! interrupted phase resumes at the next second-elapsed pulse with a fresh
//! dwell.

use junction_core::{Observable, Tickable, Ticks, Value};

use crate::config::{ConfigError, ControllerConfig};
use crate::divider::TickDivider;
use crate::phase::{Approach, Light, Phase};
use crate::timer::PhaseTimer;

/// Intersection signal controller.
pub struct Controller {
    config: ControllerConfig,
    divider: TickDivider,
    timer: PhaseTimer,
    /// Current phase register.
    phase: Phase,
    /// Phase to resume after an emergency. Written only on entry to the
    /// emergency hold, so it is never `Emergency` itself.
    saved: Phase,
    /// Emergency input level, sampled every tick.
    emergency: bool,
}

impl Controller {
    /// Create a controller in its reset state.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration has a zero divider modulus or
    /// a zero phase duration.
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            divider: TickDivider::new(config.divider_modulus),
            timer: PhaseTimer::new(),
            phase: Phase::NorthGreen,
            saved: Phase::NorthGreen,
            emergency: false,
        })
    }

    /// Force every register back to its initial value, without a tick.
    ///
    /// The emergency level is a driver-owned input and is left untouched.
    pub fn reset(&mut self) {
        self.divider.reset();
        self.timer.reset();
        self.phase = Phase::NorthGreen;
        self.saved = Phase::NorthGreen;
    }

    /// Set the emergency input level. Level-sensitive, not edge-triggered:
    /// the controller samples it on every tick until it is changed again.
    pub fn set_emergency(&mut self, level: bool) {
        self.emergency = level;
    }

    /// Current emergency input level.
    #[must_use]
    pub const fn emergency(&self) -> bool {
        self.emergency
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Phase that will resume after the current emergency ends.
    #[must_use]
    pub const fn saved_phase(&self) -> Phase {
        self.saved
    }

    /// Whole seconds spent in the current phase.
    #[must_use]
    pub const fn phase_elapsed(&self) -> u32 {
        self.timer.elapsed()
    }

    /// Divider counter value.
    #[must_use]
    pub const fn tick_count(&self) -> u32 {
        self.divider.count()
    }

    /// Whether the most recent tick completed a divider period.
    #[must_use]
    pub const fn second_elapsed(&self) -> bool {
        self.divider.second_elapsed()
    }

    /// Signal head shown to one approach.
    #[must_use]
    pub const fn light(&self, approach: Approach) -> Light {
        self.phase.lights()[approach.index()]
    }

    /// All four signal heads, in `Approach::ALL` order.
    #[must_use]
    pub const fn lights(&self) -> [Light; 4] {
        self.phase.lights()
    }

    /// Whether the pedestrian walk signal is on.
    #[must_use]
    pub const fn walk(&self) -> bool {
        self.phase.walk()
    }

    /// Tick until the next second-elapsed pulse.
    ///
    /// Returns the number of ticks executed. Drivers that observe at pulse
    /// boundaries call this once per displayed second.
    pub fn run_second(&mut self) -> Ticks {
        let mut ticks = Ticks::ZERO;
        loop {
            self.tick();
            ticks += Ticks::new(1);
            if self.divider.second_elapsed() {
                return ticks;
            }
        }
    }

    /// Debug poke: force the phase register from a raw encoding.
    ///
    /// An out-of-range code takes the fail-safe path: the controller
    /// recovers to `NorthGreen` rather than holding an undefined state.
    /// Either way the phase timer restarts.
    pub fn set_phase_code(&mut self, code: u8) {
        self.phase = Phase::from_code(code).unwrap_or(Phase::NorthGreen);
        self.timer.reset();
    }
}

impl Tickable for Controller {
    fn tick(&mut self) {
        self.divider.tick();
        let pulse = self.divider.second_elapsed();

        // Combinational step: next phase and timer-clear request from the
        // registers as they stood at the start of this tick.
        let mut next = self.phase;
        let mut clear = false;

        if self.emergency {
            // Preemption dominates every tick the level is high. The saved
            // phase is written only on the entry tick; by the next tick the
            // controller is already in the hold, so a held level never
            // overwrites it.
            if self.phase != Phase::Emergency {
                self.saved = self.phase;
                next = Phase::Emergency;
                clear = true;
            }
        } else {
            match self.phase {
                Phase::Emergency => {
                    // The emergency has cleared: resume the interrupted
                    // phase at the next pulse with a fresh dwell. No dwell
                    // of its own is waited out.
                    if pulse {
                        next = self.saved;
                        clear = true;
                    }
                }
                phase => {
                    if let Some(duration) = self.config.duration_of(phase) {
                        if pulse && self.timer.elapsed() + 1 == duration {
                            next = phase.next();
                            clear = true;
                        }
                    }
                }
            }
        }

        self.timer.advance(pulse, clear);
        self.phase = next;
    }
}

impl Observable for Controller {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "phase" => Some(Value::from(self.phase.name())),
            "phase.code" => Some(Value::from(self.phase.code())),
            "saved_phase" => Some(Value::from(self.saved.name())),
            "phase_elapsed" => Some(Value::from(self.timer.elapsed())),
            "tick_count" => Some(Value::from(self.divider.count())),
            "emergency" => Some(Value::from(self.emergency)),
            "walk" => Some(Value::from(self.walk())),
            "lights.north" => Some(Value::from(self.light(Approach::North).to_string())),
            "lights.east" => Some(Value::from(self.light(Approach::East).to_string())),
            "lights.south" => Some(Value::from(self.light(Approach::South).to_string())),
            "lights.west" => Some(Value::from(self.light(Approach::West).to_string())),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "phase",
            "phase.code",
            "saved_phase",
            "phase_elapsed",
            "tick_count",
            "emergency",
            "walk",
            "lights.north",
            "lights.east",
            "lights.south",
            "lights.west",
        ]
    }
}
