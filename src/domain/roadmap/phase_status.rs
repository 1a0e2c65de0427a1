//! Positional phase status derived from the completed-phase counter.

use serde::Serialize;
use std::fmt;

/// Where a phase sits relative to the learner's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseStatus {
    Completed,
    Current,
    Upcoming,
}

impl fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PhaseStatus::Completed => "completed",
            PhaseStatus::Current => "current",
            PhaseStatus::Upcoming => "upcoming",
        };
        f.write_str(s)
    }
}

/// Status of the phase at `phase_index` when `completed_count` phases are done.
pub fn resolve(phase_index: usize, completed_count: usize) -> PhaseStatus {
    use std::cmp::Ordering::*;
    match phase_index.cmp(&completed_count) {
        Less => PhaseStatus::Completed,
        Equal => PhaseStatus::Current,
        Greater => PhaseStatus::Upcoming,
    }
}

/// Statuses for a sequence of `len` phases, in order.
pub fn resolve_all(len: usize, completed_count: usize) -> Vec<PhaseStatus> {
    (0..len).map(|i| resolve(i, completed_count)).collect()
}
