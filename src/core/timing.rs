//! Minimum dwell configuration and the dwell evaluator.
//!
//! Every live phase must stay active for a configured minimum number of
//! ticks before a transition out of it is permitted. The plan is immutable
//! configuration, fixed at controller construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::phase::Phase;

/// Default minimum dwell for `MainGreen`, in ticks.
pub const MAIN_GREEN_TICKS: u32 = 50;
/// Default minimum dwell for `MainYellow`, in ticks.
pub const MAIN_YELLOW_TICKS: u32 = 10;
/// Default minimum dwell for `MinorGreen`, in ticks.
pub const MINOR_GREEN_TICKS: u32 = 30;
/// Default minimum dwell for `MinorYellow`, in ticks.
pub const MINOR_YELLOW_TICKS: u32 = 10;

/// Errors that can occur when building a timing plan.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Minimum dwell for {phase} must be at least one tick")]
    ZeroDwell { phase: &'static str },
}

/// Per-phase minimum dwell, in ticks.
///
/// `Default` is the fixed plan of the intersection: 50/10/30/10 for
/// MainGreen/MainYellow/MinorGreen/MinorYellow. Custom plans go through
/// [`TimingPlanBuilder`], which rejects zero dwells.
///
/// # Example
///
/// ```rust
/// use crosslight::core::{Phase, TimingPlan};
///
/// let plan = TimingPlan::default();
/// assert_eq!(plan.min_ticks(Phase::MainGreen), Some(50));
/// assert_eq!(plan.min_ticks(Phase::Fault), None);
///
/// // The dwell is satisfied on the tick that completes it.
/// assert!(!plan.dwell_satisfied(Phase::MainYellow, 8));
/// assert!(plan.dwell_satisfied(Phase::MainYellow, 9));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TimingPlan {
    main_green: u32,
    main_yellow: u32,
    minor_green: u32,
    minor_yellow: u32,
}

impl Default for TimingPlan {
    fn default() -> Self {
        Self {
            main_green: MAIN_GREEN_TICKS,
            main_yellow: MAIN_YELLOW_TICKS,
            minor_green: MINOR_GREEN_TICKS,
            minor_yellow: MINOR_YELLOW_TICKS,
        }
    }
}

impl TimingPlan {
    /// Start building a custom plan from the default dwells.
    pub fn builder() -> TimingPlanBuilder {
        TimingPlanBuilder::new()
    }

    /// Minimum dwell for a phase, or `None` for `Fault`.
    pub fn min_ticks(&self, phase: Phase) -> Option<u32> {
        match phase {
            Phase::MainGreen => Some(self.main_green),
            Phase::MainYellow => Some(self.main_yellow),
            Phase::MinorGreen => Some(self.minor_green),
            Phase::MinorYellow => Some(self.minor_yellow),
            Phase::Fault => None,
        }
    }

    /// Check whether a phase has satisfied its minimum dwell.
    ///
    /// Pure. The counter starts at zero on phase entry, so the dwell is
    /// satisfied once `elapsed >= min - 1`. A phase with no configured dwell
    /// (`Fault`) is never satisfied, biasing the machine toward holding in
    /// place rather than making an unjustified transition.
    pub fn dwell_satisfied(&self, phase: Phase, elapsed: u32) -> bool {
        match self.min_ticks(phase) {
            Some(min) => elapsed >= min.saturating_sub(1),
            None => false,
        }
    }

    /// The longest configured dwell. Upper bound for the elapsed counter.
    pub fn longest_dwell(&self) -> u32 {
        self.main_green
            .max(self.main_yellow)
            .max(self.minor_green)
            .max(self.minor_yellow)
    }
}

/// Builder for custom timing plans.
///
/// Starts from the default dwells; every setter overrides one phase. `build`
/// validates that no dwell is zero.
pub struct TimingPlanBuilder {
    main_green: u32,
    main_yellow: u32,
    minor_green: u32,
    minor_yellow: u32,
}

impl TimingPlanBuilder {
    /// Create a builder seeded with the default plan.
    pub fn new() -> Self {
        Self {
            main_green: MAIN_GREEN_TICKS,
            main_yellow: MAIN_YELLOW_TICKS,
            minor_green: MINOR_GREEN_TICKS,
            minor_yellow: MINOR_YELLOW_TICKS,
        }
    }

    /// Set the minimum dwell for `MainGreen`.
    pub fn main_green(mut self, ticks: u32) -> Self {
        self.main_green = ticks;
        self
    }

    /// Set the minimum dwell for `MainYellow`.
    pub fn main_yellow(mut self, ticks: u32) -> Self {
        self.main_yellow = ticks;
        self
    }

    /// Set the minimum dwell for `MinorGreen`.
    pub fn minor_green(mut self, ticks: u32) -> Self {
        self.minor_green = ticks;
        self
    }

    /// Set the minimum dwell for `MinorYellow`.
    pub fn minor_yellow(mut self, ticks: u32) -> Self {
        self.minor_yellow = ticks;
        self
    }

    /// Build the plan, rejecting zero dwells.
    pub fn build(self) -> Result<TimingPlan, PlanError> {
        let checks = [
            (self.main_green, Phase::MainGreen),
            (self.main_yellow, Phase::MainYellow),
            (self.minor_green, Phase::MinorGreen),
            (self.minor_yellow, Phase::MinorYellow),
        ];
        for (ticks, phase) in checks {
            if ticks == 0 {
                return Err(PlanError::ZeroDwell {
                    phase: phase.name(),
                });
            }
        }

        Ok(TimingPlan {
            main_green: self.main_green,
            main_yellow: self.main_yellow,
            minor_green: self.minor_green,
            minor_yellow: self.minor_yellow,
        })
    }
}

impl Default for TimingPlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_matches_fixed_dwells() {
        let plan = TimingPlan::default();
        assert_eq!(plan.min_ticks(Phase::MainGreen), Some(50));
        assert_eq!(plan.min_ticks(Phase::MainYellow), Some(10));
        assert_eq!(plan.min_ticks(Phase::MinorGreen), Some(30));
        assert_eq!(plan.min_ticks(Phase::MinorYellow), Some(10));
    }

    #[test]
    fn fault_has_no_dwell() {
        let plan = TimingPlan::default();
        assert_eq!(plan.min_ticks(Phase::Fault), None);
        assert!(!plan.dwell_satisfied(Phase::Fault, 0));
        assert!(!plan.dwell_satisfied(Phase::Fault, u32::MAX));
    }

    #[test]
    fn dwell_satisfied_at_boundary() {
        let plan = TimingPlan::default();
        assert!(!plan.dwell_satisfied(Phase::MainGreen, 48));
        assert!(plan.dwell_satisfied(Phase::MainGreen, 49));
        assert!(plan.dwell_satisfied(Phase::MainGreen, 50));
    }

    #[test]
    fn one_tick_dwell_is_immediately_satisfied() {
        let plan = TimingPlan::builder().main_yellow(1).build().unwrap();
        assert!(plan.dwell_satisfied(Phase::MainYellow, 0));
    }

    #[test]
    fn builder_overrides_single_phase() {
        let plan = TimingPlan::builder().minor_green(15).build().unwrap();
        assert_eq!(plan.min_ticks(Phase::MinorGreen), Some(15));
        assert_eq!(plan.min_ticks(Phase::MainGreen), Some(50));
    }

    #[test]
    fn builder_rejects_zero_dwell() {
        let result = TimingPlan::builder().main_yellow(0).build();
        assert!(matches!(
            result,
            Err(PlanError::ZeroDwell {
                phase: "MainYellow"
            })
        ));
    }

    #[test]
    fn longest_dwell_is_main_green_by_default() {
        assert_eq!(TimingPlan::default().longest_dwell(), 50);
    }

    #[test]
    fn plan_serializes_correctly() {
        let plan = TimingPlan::builder().main_green(60).build().unwrap();
        let json = serde_json::to_string(&plan).unwrap();
        let deserialized: TimingPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, deserialized);
    }
}
