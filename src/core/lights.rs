//! Light signals and the output function.
//!
//! Outputs are derived, never stored: the light pair is a pure function of
//! the current phase and nothing else. The safety invariant lives here: at
//! most one road shows non-red, and every phase outside the live set maps
//! to all-red.

use serde::{Deserialize, Serialize};

use super::phase::Phase;

/// A single signal head.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Light {
    Red,
    Yellow,
    Green,
}

impl Light {
    /// Get the light's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
        }
    }
}

impl std::fmt::Display for Light {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The visible output of the intersection: one light per road.
///
/// # Example
///
/// ```rust
/// use crosslight::core::{Light, Lights, Phase};
///
/// let lights = Lights::for_phase(Phase::MainGreen);
/// assert_eq!(lights.main, Light::Green);
/// assert_eq!(lights.minor, Light::Red);
/// assert!(lights.is_exclusive());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Lights {
    /// Signal shown to the main road.
    pub main: Light,
    /// Signal shown to the minor road.
    pub minor: Light,
}

impl Lights {
    /// Derive the light pair from a phase.
    ///
    /// Pure and total. `Fault` (and thus any register corruption) maps to
    /// all-red, the guaranteed safe fallback.
    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::MainGreen => Self {
                main: Light::Green,
                minor: Light::Red,
            },
            Phase::MainYellow => Self {
                main: Light::Yellow,
                minor: Light::Red,
            },
            Phase::MinorGreen => Self {
                main: Light::Red,
                minor: Light::Green,
            },
            Phase::MinorYellow => Self {
                main: Light::Red,
                minor: Light::Yellow,
            },
            Phase::Fault => Self::all_red(),
        }
    }

    /// The guaranteed safe configuration: both roads red.
    pub fn all_red() -> Self {
        Self {
            main: Light::Red,
            minor: Light::Red,
        }
    }

    /// Check the safety invariant: at most one road shows non-red.
    pub fn is_exclusive(&self) -> bool {
        self.main == Light::Red || self.minor == Light::Red
    }
}

impl std::fmt::Display for Lights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "main={} minor={}", self.main, self.minor)
    }
}
