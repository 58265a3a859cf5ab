//! The transition function of the arbiter.
//!
//! One pure total function over the phase set. The machine cycles forever;
//! there is no terminal phase.

use super::phase::Phase;

/// Compute the next phase from the current phase, the dwell evaluation, and
/// the sensor sample for this tick.
///
/// The transition table:
///
/// | current     | condition                | next        |
/// |-------------|--------------------------|-------------|
/// | MainGreen   | dwell satisfied + sensor | MainYellow  |
/// | MainGreen   | otherwise                | MainGreen   |
/// | MainYellow  | dwell satisfied          | MinorGreen  |
/// | MinorGreen  | dwell satisfied          | MinorYellow |
/// | MinorYellow | dwell satisfied          | MainGreen   |
/// | Fault       | always                   | MainGreen   |
///
/// The sensor is consulted only at the `MainGreen` decision point, so a
/// transient sensor glitch can neither shorten a minimum dwell nor disturb
/// a cycle already in progress. Every other transition is unconditional
/// once its dwell elapses: the minor road cannot be starved once granted
/// the yellow handoff, and yellow phases are time-bounded and never
/// skipped. `Fault` recovers deterministically to `MainGreen`.
///
/// # Example
///
/// ```rust
/// use crosslight::core::{next_phase, Phase};
///
/// // Holding: the dwell is not yet satisfied.
/// assert_eq!(next_phase(Phase::MainGreen, false, true), Phase::MainGreen);
///
/// // Yielding: dwell satisfied and a vehicle is waiting.
/// assert_eq!(next_phase(Phase::MainGreen, true, true), Phase::MainYellow);
///
/// // No demand: main green holds indefinitely.
/// assert_eq!(next_phase(Phase::MainGreen, true, false), Phase::MainGreen);
/// ```
pub fn next_phase(current: Phase, dwell_satisfied: bool, sensor: bool) -> Phase {
    match current {
        Phase::MainGreen if dwell_satisfied && sensor => Phase::MainYellow,
        Phase::MainGreen => Phase::MainGreen,
        Phase::MainYellow if dwell_satisfied => Phase::MinorGreen,
        Phase::MainYellow => Phase::MainYellow,
        Phase::MinorGreen if dwell_satisfied => Phase::MinorYellow,
        Phase::MinorGreen => Phase::MinorGreen,
        Phase::MinorYellow if dwell_satisfied => Phase::MainGreen,
        Phase::MinorYellow => Phase::MinorYellow,
        Phase::Fault => Phase::MainGreen,
    }
}
