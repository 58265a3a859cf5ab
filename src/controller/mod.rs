//! The phase controller: the tick-synchronous state register.
//!
//! Everything under [`crate::core`] is pure; this module holds the one
//! piece of mutable state and the sequencing contract around it. An
//! external driver calls [`PhaseController::step`] once per tick with the
//! inputs sampled for that tick; the controller evaluates the dwell check
//! and the transition function against the pre-tick register value, commits
//! the result, and returns the lights derived from the committed phase.

use chrono::Utc;

use crate::core::{next_phase, ChangeCause, Lights, Phase, PhaseChange, PhaseLog, TimingPlan};

/// Inputs sampled for one tick.
///
/// Constructing the value once per call is what gives single-sample
/// semantics: the controller never re-reads an input mid-evaluation.
/// `Default` is both lines deasserted.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TickInput {
    /// Force the register to the known safe initial value. Always wins.
    pub reset: bool,
    /// Minor-road traffic waiting.
    pub sensor: bool,
}

impl TickInput {
    /// Both lines deasserted.
    pub fn quiet() -> Self {
        Self::default()
    }

    /// Sensor asserted, reset deasserted.
    pub fn demand() -> Self {
        Self {
            reset: false,
            sensor: true,
        }
    }

    /// Reset asserted. The sensor value is ignored while reset holds.
    pub fn reset() -> Self {
        Self {
            reset: true,
            sensor: false,
        }
    }
}

/// Fixed-cycle traffic-light arbiter for a two-way intersection.
///
/// The register holds `(phase, elapsed)` and advances exactly once per
/// [`step`](Self::step). On reset the register is `(MainGreen, 0)` and the
/// outputs are green for the main road, red for the minor road.
///
/// # Example
///
/// ```rust
/// use crosslight::controller::{PhaseController, TickInput};
/// use crosslight::core::{Light, Phase};
///
/// let mut controller = PhaseController::new();
///
/// // No demand: the main road keeps right-of-way indefinitely.
/// for _ in 0..200 {
///     let lights = controller.step(TickInput::quiet());
///     assert_eq!(lights.main, Light::Green);
/// }
///
/// // With a vehicle waiting, the cycle starts once the minimum
/// // green for the main road has elapsed.
/// while controller.phase() == Phase::MainGreen {
///     controller.step(TickInput::demand());
/// }
/// assert_eq!(controller.phase(), Phase::MainYellow);
/// ```
#[derive(Clone, Debug)]
pub struct PhaseController {
    phase: Phase,
    elapsed: u32,
    ticks: u64,
    plan: TimingPlan,
    log: PhaseLog,
}

impl PhaseController {
    /// Create a controller with the default timing plan, in the reset state.
    pub fn new() -> Self {
        Self::with_plan(TimingPlan::default())
    }

    /// Create a controller with a custom timing plan, in the reset state.
    pub fn with_plan(plan: TimingPlan) -> Self {
        Self {
            phase: Phase::initial(),
            elapsed: 0,
            ticks: 0,
            plan,
            log: PhaseLog::new(),
        }
    }

    /// Advance one tick and return the lights for the committed phase.
    ///
    /// Exactly one evaluation of dwell check, transition, and output per
    /// call. While `reset` is asserted the register ignores the sensor and
    /// holds `(MainGreen, 0)`; dwell and transition are not evaluated.
    ///
    /// On a hold, the elapsed counter advances only until the dwell is
    /// satisfied and then parks, so it stays below the configured minimum
    /// and cannot wrap no matter how long a phase is held.
    pub fn step(&mut self, input: TickInput) -> Lights {
        self.ticks += 1;

        if input.reset {
            self.commit(Phase::initial(), ChangeCause::Reset);
            return self.lights();
        }

        let dwell_satisfied = self.plan.dwell_satisfied(self.phase, self.elapsed);
        let next = next_phase(self.phase, dwell_satisfied, input.sensor);

        if next != self.phase {
            let cause = if self.phase.is_fault() {
                ChangeCause::Recovery
            } else {
                ChangeCause::Cycle
            };
            self.commit(next, cause);
        } else if !dwell_satisfied {
            self.elapsed = self.elapsed.saturating_add(1);
        }

        self.lights()
    }

    /// The lights derived from the current register value, without
    /// advancing. Pure output function of the phase: a controller sitting
    /// in `Fault` reports all-red here.
    pub fn lights(&self) -> Lights {
        Lights::for_phase(self.phase)
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Ticks spent in the current phase since entry (parks once the dwell
    /// is satisfied).
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Total ticks evaluated since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The immutable timing plan.
    pub fn plan(&self) -> &TimingPlan {
        &self.plan
    }

    /// The phase-change log.
    pub fn log(&self) -> &PhaseLog {
        &self.log
    }

    /// Overwrite the phase register without logging, modelling state
    /// corruption (or a harness placing the machine mid-cycle). The elapsed
    /// counter restarts at zero.
    ///
    /// A controller forced into [`Phase::Fault`] reports all-red through
    /// [`lights`](Self::lights) and recovers to `MainGreen` on the next
    /// [`step`](Self::step).
    pub fn force_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.elapsed = 0;
    }

    fn commit(&mut self, next: Phase, cause: ChangeCause) {
        if next != self.phase {
            self.log = self.log.record(PhaseChange {
                from: self.phase,
                to: next,
                at_tick: self.ticks,
                timestamp: Utc::now(),
                cause,
            });
            self.phase = next;
            self.elapsed = 0;
        }
        // A reset while already in MainGreen still pins the counter.
        if cause == ChangeCause::Reset {
            self.elapsed = 0;
        }
    }
}

impl Default for PhaseController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Light, MAIN_GREEN_TICKS};

    #[test]
    fn powers_up_in_main_green() {
        let controller = PhaseController::new();
        assert_eq!(controller.phase(), Phase::MainGreen);
        assert_eq!(controller.elapsed(), 0);
        assert_eq!(controller.lights().main, Light::Green);
        assert_eq!(controller.lights().minor, Light::Red);
    }

    #[test]
    fn holds_main_green_forever_without_demand() {
        let mut controller = PhaseController::new();
        for _ in 0..5_000 {
            controller.step(TickInput::quiet());
            assert_eq!(controller.phase(), Phase::MainGreen);
        }
        assert!(controller.log().changes().is_empty());
    }

    #[test]
    fn minimum_green_is_enforced_under_continuous_demand() {
        let mut controller = PhaseController::new();

        for tick in 1..MAIN_GREEN_TICKS as u64 {
            controller.step(TickInput::demand());
            assert_eq!(
                controller.phase(),
                Phase::MainGreen,
                "yielded early at tick {tick}"
            );
        }

        controller.step(TickInput::demand());
        assert_eq!(controller.phase(), Phase::MainYellow);
        assert_eq!(controller.ticks(), MAIN_GREEN_TICKS as u64);
    }

    #[test]
    fn continuous_demand_cycles_with_configured_dwells() {
        let mut controller = PhaseController::new();

        // Two full cycles: 50 + 10 + 30 + 10 ticks each.
        for _ in 0..200 {
            controller.step(TickInput::demand());
        }

        let ticks: Vec<u64> = controller.log().changes().iter().map(|c| c.at_tick).collect();
        assert_eq!(ticks, vec![50, 60, 90, 100, 150, 160, 190, 200]);

        let path = controller.log().phase_path();
        assert_eq!(
            path,
            vec![
                &Phase::MainGreen,
                &Phase::MainYellow,
                &Phase::MinorGreen,
                &Phase::MinorYellow,
                &Phase::MainGreen,
                &Phase::MainYellow,
                &Phase::MinorGreen,
                &Phase::MinorYellow,
                &Phase::MainGreen,
            ]
        );
        assert!(controller
            .log()
            .changes()
            .iter()
            .all(|c| c.cause == ChangeCause::Cycle));
    }

    #[test]
    fn demand_after_expiry_is_served_on_the_same_tick() {
        let mut controller = PhaseController::new();

        // Let the minimum green lapse with no demand; the phase holds.
        for _ in 0..120 {
            controller.step(TickInput::quiet());
        }
        assert_eq!(controller.phase(), Phase::MainGreen);

        // First sensed vehicle is served immediately.
        controller.step(TickInput::demand());
        assert_eq!(controller.phase(), Phase::MainYellow);
    }

    #[test]
    fn sensor_glitch_before_expiry_does_not_shorten_the_green() {
        let mut controller = PhaseController::new();

        // A one-tick blip early in the green.
        controller.step(TickInput::demand());
        for _ in 0..100 {
            controller.step(TickInput::quiet());
        }
        assert_eq!(controller.phase(), Phase::MainGreen);
    }

    #[test]
    fn yellow_phases_ignore_the_sensor() {
        let mut controller = PhaseController::new();
        for _ in 0..50 {
            controller.step(TickInput::demand());
        }
        assert_eq!(controller.phase(), Phase::MainYellow);

        // Dropping the sensor mid-yellow does not stall the handoff.
        for _ in 0..10 {
            controller.step(TickInput::quiet());
        }
        assert_eq!(controller.phase(), Phase::MinorGreen);
    }

    #[test]
    fn reset_forces_main_green_from_any_point() {
        let mut controller = PhaseController::new();
        for _ in 0..75 {
            controller.step(TickInput::demand());
        }
        assert_eq!(controller.phase(), Phase::MinorGreen);

        let lights = controller.step(TickInput::reset());
        assert_eq!(controller.phase(), Phase::MainGreen);
        assert_eq!(controller.elapsed(), 0);
        assert_eq!(lights.main, Light::Green);
        assert_eq!(lights.minor, Light::Red);
        assert_eq!(
            controller.log().changes().last().unwrap().cause,
            ChangeCause::Reset
        );
    }

    #[test]
    fn reset_wins_over_a_pending_transition() {
        let mut controller = PhaseController::new();
        for _ in 0..49 {
            controller.step(TickInput::demand());
        }

        // This tick would have yielded to MainYellow; reset overrides it.
        controller.step(TickInput {
            reset: true,
            sensor: true,
        });
        assert_eq!(controller.phase(), Phase::MainGreen);
        assert_eq!(controller.elapsed(), 0);
    }

    #[test]
    fn held_reset_pins_the_register() {
        let mut controller = PhaseController::new();
        for _ in 0..10 {
            controller.step(TickInput {
                reset: true,
                sensor: true,
            });
            assert_eq!(controller.phase(), Phase::MainGreen);
            assert_eq!(controller.elapsed(), 0);
        }
        // No phase ever changed, so nothing was logged.
        assert!(controller.log().changes().is_empty());
    }

    #[test]
    fn fault_shows_all_red_and_recovers() {
        let mut controller = PhaseController::new();
        controller.force_phase(Phase::Fault);

        assert_eq!(controller.lights(), Lights::all_red());

        let lights = controller.step(TickInput::quiet());
        assert_eq!(controller.phase(), Phase::MainGreen);
        assert_eq!(controller.elapsed(), 0);
        assert_eq!(lights.main, Light::Green);
        assert_eq!(
            controller.log().changes().last().unwrap().cause,
            ChangeCause::Recovery
        );
    }

    #[test]
    fn elapsed_parks_at_the_dwell_boundary() {
        let mut controller = PhaseController::new();
        for _ in 0..10_000 {
            controller.step(TickInput::quiet());
        }
        assert_eq!(controller.elapsed(), MAIN_GREEN_TICKS - 1);
    }

    #[test]
    fn custom_plan_drives_the_cycle() {
        let plan = TimingPlan::builder()
            .main_green(4)
            .main_yellow(2)
            .minor_green(3)
            .minor_yellow(2)
            .build()
            .unwrap();
        let mut controller = PhaseController::with_plan(plan);

        for _ in 0..11 {
            controller.step(TickInput::demand());
        }

        let ticks: Vec<u64> = controller.log().changes().iter().map(|c| c.at_tick).collect();
        assert_eq!(ticks, vec![4, 6, 9, 11]);
        assert_eq!(controller.phase(), Phase::MainGreen);
    }

    #[test]
    fn outputs_are_reevaluated_every_tick() {
        let mut controller = PhaseController::new();
        let first = controller.step(TickInput::quiet());
        let second = controller.step(TickInput::quiet());
        assert_eq!(first, second);
    }
}
