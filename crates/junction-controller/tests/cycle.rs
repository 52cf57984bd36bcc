//! Integration tests for the intersection controller.
//!
//! These drive the controller the way the harness does — at pulse
//! boundaries with an accelerated four-tick second — and check the
//! published cycle order, dwell lengths, emergency preemption/resume,
//! and reset behaviour.

use junction_controller::{Approach, Controller, ControllerConfig, Light, Phase, Snapshot};
use junction_core::{Tickable, Ticks};

/// Accelerated config from the scenario in the controller's contract:
/// four-tick second, green 10 s, yellow 3 s, scramble 10 s.
fn make_controller() -> Controller {
    Controller::new(ControllerConfig::accelerated())
        .unwrap_or_else(|e| panic!("accelerated preset must validate: {e}"))
}

/// Observed phase after each pulse of one full 62-second cycle, starting
/// from reset. The initial north green shows for only nine pulses because
/// reset itself is its entry; every later dwell occupies exactly its
/// configured number of pulses.
fn expected_first_cycle() -> Vec<Phase> {
    let dwells = [
        (Phase::NorthGreen, 9),
        (Phase::NorthYellow, 3),
        (Phase::EastGreen, 10),
        (Phase::EastYellow, 3),
        (Phase::SouthGreen, 10),
        (Phase::SouthYellow, 3),
        (Phase::WestGreen, 10),
        (Phase::WestYellow, 3),
        (Phase::WalkAll, 10),
        (Phase::NorthGreen, 1),
    ];
    dwells
        .iter()
        .flat_map(|&(phase, pulses)| std::iter::repeat_n(phase, pulses))
        .collect()
}

#[test]
fn full_cycle_order_and_dwells() {
    let mut controller = make_controller();
    let expected = expected_first_cycle();
    assert_eq!(expected.len(), 62);

    for (pulse, &want) in expected.iter().enumerate() {
        controller.run_second();
        assert_eq!(
            controller.phase(),
            want,
            "wrong phase after pulse {}",
            pulse + 1
        );
    }
}

#[test]
fn two_cycles_reproduce_the_same_outputs() {
    let mut controller = make_controller();

    let mut trace = |controller: &mut Controller| -> Vec<Snapshot> {
        (1..=62)
            .map(|second| {
                controller.run_second();
                Snapshot::capture(second, controller)
            })
            .collect()
    };

    let first = trace(&mut controller);
    let second = trace(&mut controller);
    assert_eq!(first, second);
}

#[test]
fn light_exclusivity_and_walk_flag() {
    let mut controller = make_controller();

    for _ in 0..62 {
        controller.run_second();
        let non_red = Approach::ALL
            .iter()
            .filter(|&&a| controller.light(a) != Light::Red)
            .count();
        match controller.phase() {
            Phase::WalkAll | Phase::Emergency => assert_eq!(non_red, 0),
            _ => assert_eq!(non_red, 1),
        }
        assert_eq!(controller.walk(), controller.phase() == Phase::WalkAll);
    }
}

#[test]
fn scenario_ten_pulses_north_yellow_thirteen_east_green() {
    let mut controller = make_controller();

    for _ in 0..10 {
        assert_eq!(controller.run_second(), Ticks::new(4));
    }
    assert_eq!(controller.phase(), Phase::NorthYellow);

    for _ in 0..3 {
        controller.run_second();
    }
    assert_eq!(controller.phase(), Phase::EastGreen);
}

#[test]
fn emergency_preempts_within_one_tick() {
    let mut controller = make_controller();
    for _ in 0..15 {
        controller.run_second();
    }
    assert_eq!(controller.phase(), Phase::EastGreen);
    assert_eq!(controller.phase_elapsed(), 2);

    controller.set_emergency(true);
    controller.tick();

    assert_eq!(controller.phase(), Phase::Emergency);
    assert_eq!(controller.saved_phase(), Phase::EastGreen);
    assert_eq!(controller.lights(), [Light::Red; 4]);
    assert!(!controller.walk());
    assert_eq!(controller.phase_elapsed(), 0);
}

#[test]
fn emergency_resume_restarts_the_interrupted_phase() {
    let mut controller = make_controller();
    for _ in 0..15 {
        controller.run_second();
    }
    controller.set_emergency(true);
    for _ in 0..7 {
        controller.run_second();
        assert_eq!(controller.phase(), Phase::Emergency);
    }

    controller.set_emergency(false);
    controller.run_second();
    assert_eq!(controller.phase(), Phase::EastGreen);
    assert_eq!(controller.phase_elapsed(), 0);

    // The resumed green runs its full dwell from zero
    for _ in 0..9 {
        controller.run_second();
        assert_eq!(controller.phase(), Phase::EastGreen);
    }
    controller.run_second();
    assert_eq!(controller.phase(), Phase::EastYellow);
}

#[test]
fn emergency_mid_period_still_restarts_the_dwell() {
    let mut controller = make_controller();
    for _ in 0..13 {
        controller.run_second();
    }
    assert_eq!(controller.phase(), Phase::EastGreen);

    // Two ticks into a divider period: assert and clear the emergency
    // between pulses
    controller.tick();
    controller.tick();
    controller.set_emergency(true);
    controller.tick();
    assert_eq!(controller.phase(), Phase::Emergency);

    controller.set_emergency(false);
    controller.run_second();
    assert_eq!(controller.phase(), Phase::EastGreen);
    assert_eq!(controller.phase_elapsed(), 0);
}

#[test]
fn held_emergency_keeps_the_first_saved_phase() {
    let mut controller = make_controller();
    for _ in 0..15 {
        controller.run_second();
    }
    controller.set_emergency(true);
    for _ in 0..20 {
        controller.run_second();
    }
    assert_eq!(controller.phase(), Phase::Emergency);
    assert_eq!(controller.saved_phase(), Phase::EastGreen);
}

#[test]
fn reset_takes_effect_without_a_tick() {
    let mut controller = make_controller();
    for _ in 0..20 {
        controller.run_second();
    }
    controller.set_emergency(true);
    controller.tick();
    assert_eq!(controller.phase(), Phase::Emergency);

    controller.reset();
    assert_eq!(controller.phase(), Phase::NorthGreen);
    assert_eq!(controller.saved_phase(), Phase::NorthGreen);
    assert_eq!(controller.phase_elapsed(), 0);
    assert_eq!(controller.tick_count(), 0);
    assert_eq!(controller.lights()[Approach::North.index()], Light::Green);
}

#[test]
fn reset_leaves_the_emergency_input_to_the_driver() {
    let mut controller = make_controller();
    controller.set_emergency(true);
    controller.tick();
    controller.reset();

    // The level is a driver-owned input: still high, it preempts again on
    // the very next tick
    controller.tick();
    assert_eq!(controller.phase(), Phase::Emergency);
    assert_eq!(controller.saved_phase(), Phase::NorthGreen);
}

#[test]
fn normal_cycling_continues_after_reset() {
    let mut controller = make_controller();
    for _ in 0..30 {
        controller.run_second();
    }
    controller.reset();

    for _ in 0..10 {
        controller.run_second();
    }
    assert_eq!(controller.phase(), Phase::NorthYellow);
}

#[test]
fn custom_dwells_are_honoured() {
    let config = ControllerConfig {
        divider_modulus: 2,
        green_secs: 2,
        yellow_secs: 1,
        walk_secs: 3,
    };
    let mut controller =
        Controller::new(config).unwrap_or_else(|e| panic!("config must validate: {e}"));

    controller.run_second();
    assert_eq!(controller.phase(), Phase::NorthGreen);
    controller.run_second();
    assert_eq!(controller.phase(), Phase::NorthYellow);
    controller.run_second();
    assert_eq!(controller.phase(), Phase::EastGreen);
}
