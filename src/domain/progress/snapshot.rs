//! Progress counters reported by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{classify_pace, LearningPace};
use crate::domain::foundation::Percentage;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub completed_phases: u32,
    pub total_phases: u32,
    pub streak_days: u32,
    pub last_activity: Option<DateTime<Utc>>,
}

impl Progress {
    /// Builds progress counters, clamping `completed` to `total`.
    pub fn new(completed_phases: u32, total_phases: u32) -> Self {
        Self {
            completed_phases: completed_phases.min(total_phases),
            total_phases,
            streak_days: 0,
            last_activity: None,
        }
    }

    pub fn with_streak(mut self, days: u32) -> Self {
        self.streak_days = days;
        self
    }

    pub fn with_last_activity(mut self, at: DateTime<Utc>) -> Self {
        self.last_activity = Some(at);
        self
    }

    /// Overall completion, see [`percentage`].
    pub fn percentage(&self) -> Percentage {
        percentage(self.completed_phases, self.total_phases)
    }

    pub fn pace(&self, now: DateTime<Utc>) -> LearningPace {
        classify_pace(self.completed_phases, self.last_activity, now)
    }

    pub fn is_finished(&self) -> bool {
        self.total_phases > 0 && self.completed_phases >= self.total_phases
    }
}

/// Completion percentage: `round(completed / total * 100)`, or 0 for an empty
/// roadmap.
pub fn percentage(completed: u32, total: u32) -> Percentage {
    Percentage::from_ratio(completed, total)
}
