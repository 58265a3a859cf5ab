//! Phase-change log.
//!
//! Immutable tracking of phase changes over time. The log is in-memory
//! observability for harnesses and tests; it is never written to disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::phase::Phase;

/// Why a phase change happened.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ChangeCause {
    /// Normal timed progression through the cycle.
    Cycle,
    /// Reset assertion forced the register back to `MainGreen`.
    Reset,
    /// Recovery from a corrupted register value.
    Recovery,
}

/// Record of a single phase change.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhaseChange {
    /// The phase being left.
    pub from: Phase,
    /// The phase being entered.
    pub to: Phase,
    /// Controller tick on which the change committed.
    pub at_tick: u64,
    /// Wall-clock time of the change.
    pub timestamp: DateTime<Utc>,
    /// Why the change happened.
    pub cause: ChangeCause,
}

/// Ordered log of phase changes.
///
/// The log is immutable: `record` returns a new log with the change
/// appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use crosslight::core::{ChangeCause, Phase, PhaseChange, PhaseLog};
///
/// let log = PhaseLog::new();
/// let log = log.record(PhaseChange {
///     from: Phase::MainGreen,
///     to: Phase::MainYellow,
///     at_tick: 50,
///     timestamp: Utc::now(),
///     cause: ChangeCause::Cycle,
/// });
///
/// assert_eq!(log.changes().len(), 1);
/// assert_eq!(log.phase_path(), vec![&Phase::MainGreen, &Phase::MainYellow]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PhaseLog {
    changes: Vec<PhaseChange>,
}

impl PhaseLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Record a change, returning a new log.
    pub fn record(&self, change: PhaseChange) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// Get all recorded changes in order.
    pub fn changes(&self) -> &[PhaseChange] {
        &self.changes
    }

    /// Get the path of phases traversed: the first change's origin, then
    /// the destination of every change.
    pub fn phase_path(&self) -> Vec<&Phase> {
        let mut path = Vec::new();
        if let Some(first) = self.changes.first() {
            path.push(&first.from);
        }
        for change in &self.changes {
            path.push(&change.to);
        }
        path
    }

    /// Wall-clock span from first to last change, `None` when empty.
    pub fn span(&self) -> Option<Duration> {
        let (first, last) = (self.changes.first()?, self.changes.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
