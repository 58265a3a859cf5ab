//! Crosslight: a sensor-actuated traffic-light phase controller
//!
//! Crosslight arbitrates right-of-way at a two-way intersection: a main
//! road with continuous default right-of-way and a minor road served only
//! when a sensor reports waiting traffic. The crate follows a "pure core,
//! imperative shell" split: the dwell evaluator, the transition function,
//! and the output function are pure functions under [`core`], and the sole
//! piece of mutable, tick-synchronous state is the register inside
//! [`controller::PhaseController`].
//!
//! # Core Concepts
//!
//! - **Phase**: the active right-of-way configuration, a closed enum with
//!   an explicit fault marker for the corrupted-register recovery path
//! - **TimingPlan**: immutable per-phase minimum dwells (50/10/30/10 by
//!   default), checked by a pure dwell evaluator
//! - **Lights**: the derived output pair; at most one road is ever non-red,
//!   and anything outside the live phase set maps to all-red
//! - **PhaseLog**: immutable record of phase changes and their causes
//!
//! # Example
//!
//! ```rust
//! use crosslight::controller::{PhaseController, TickInput};
//! use crosslight::core::{Light, Phase};
//!
//! let mut controller = PhaseController::new();
//!
//! // A vehicle waits on the minor road; the main road keeps green
//! // until its minimum dwell has elapsed, then yields.
//! let mut lights = controller.step(TickInput::demand());
//! while controller.phase() == Phase::MainGreen {
//!     lights = controller.step(TickInput::demand());
//! }
//!
//! assert_eq!(controller.phase(), Phase::MainYellow);
//! assert_eq!(lights.main, Light::Yellow);
//! assert_eq!(lights.minor, Light::Red);
//! ```

pub mod controller;
pub mod core;

// Re-export commonly used types
pub use controller::{PhaseController, TickInput};
pub use self::core::{Light, Lights, Phase, PhaseLog, TimingPlan};
