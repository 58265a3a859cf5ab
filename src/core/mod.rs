//! Pure functional core of the arbiter.
//!
//! This module contains everything that is combinational in the original
//! design:
//! - The `Phase` set, including the explicit fault marker
//! - The output function deriving light signals from the phase
//! - The dwell evaluator and its immutable `TimingPlan` configuration
//! - The transition function
//! - Immutable phase-change logging
//!
//! All logic in this module is pure (no side effects). The only mutable
//! state in the crate lives in [`crate::controller`].

mod history;
mod lights;
mod phase;
mod timing;
mod transition;

pub use history::{ChangeCause, PhaseChange, PhaseLog};
pub use lights::{Light, Lights};
pub use phase::Phase;
pub use timing::{
    PlanError, TimingPlan, TimingPlanBuilder, MAIN_GREEN_TICKS, MAIN_YELLOW_TICKS,
    MINOR_GREEN_TICKS, MINOR_YELLOW_TICKS,
};
pub use transition::next_phase;
