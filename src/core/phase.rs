//! The phase set of the intersection.
//!
//! A phase is the active right-of-way configuration. Exactly one phase is
//! active at any time, and the active phase fully determines both light
//! outputs (see [`crate::core::lights`]).

use serde::{Deserialize, Serialize};

/// The right-of-way phase of the intersection.
///
/// Four live phases cycle right-of-way between the main and minor roads.
/// `Fault` is an explicit marker for a register value outside the live set
/// (state corruption); the transition function recovers from it to
/// `MainGreen` and the output function maps it to all-red.
///
/// # Example
///
/// ```rust
/// use crosslight::core::Phase;
///
/// let phase = Phase::MainGreen;
/// assert_eq!(phase.name(), "MainGreen");
/// assert!(!phase.is_fault());
/// assert!(Phase::Fault.is_fault());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Main road has green; the default, held indefinitely absent demand.
    MainGreen,
    /// Main road clearing before the minor road is served.
    MainYellow,
    /// Minor road has green.
    MinorGreen,
    /// Minor road clearing before right-of-way returns to the main road.
    MinorYellow,
    /// Register value outside the live set. Recovered, never entered by
    /// normal operation.
    Fault,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MainGreen => "MainGreen",
            Self::MainYellow => "MainYellow",
            Self::MinorGreen => "MinorGreen",
            Self::MinorYellow => "MinorYellow",
            Self::Fault => "Fault",
        }
    }

    /// Check if this is the corrupted-register marker.
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault)
    }

    /// The reset value of the phase register.
    pub fn initial() -> Self {
        Self::MainGreen
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
