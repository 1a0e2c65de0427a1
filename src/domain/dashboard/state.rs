//! DashboardState - the explicit, clonable state behind one dashboard.
//!
//! State never changes in place from the outside: callers get a snapshot and
//! describe changes as [`StateChange`] values that produce the next snapshot.

use serde::Serialize;

use super::{DisplayMode, PhaseExpansion};
use crate::domain::profile::StudentProfile;
use crate::domain::roadmap::{MilestoneRef, RoadmapSnapshot};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardState {
    pub profile: Option<StudentProfile>,
    pub roadmap: Option<RoadmapSnapshot>,
    pub expansion: PhaseExpansion,
    pub mode: DisplayMode,
}

/// A state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    ProfileLoaded(StudentProfile),
    RoadmapLoaded(RoadmapSnapshot),
    RoadmapCleared,
    PhaseCardToggled(usize),
    DisplayModeToggled,
}

impl DashboardState {
    pub fn apply(self, change: StateChange) -> Self {
        match change {
            StateChange::ProfileLoaded(profile) => Self {
                profile: Some(profile),
                ..self
            },
            StateChange::RoadmapLoaded(roadmap) => Self {
                roadmap: Some(roadmap),
                ..self
            },
            StateChange::RoadmapCleared => Self {
                roadmap: None,
                ..self
            },
            StateChange::PhaseCardToggled(index) => Self {
                expansion: self.expansion.toggle(index),
                ..self
            },
            StateChange::DisplayModeToggled => Self {
                mode: self.mode.toggled(),
                ..self
            },
        }
    }

    pub fn has_learning_roadmap(&self) -> bool {
        self.roadmap
            .as_ref()
            .is_some_and(|r| r.learning_roadmap.is_some())
    }
}

/// Something the user asked the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardIntent {
    Refresh,
    Generate,
    TogglePhase(usize),
    CompleteMilestone(MilestoneRef),
    Adapt,
    Reset,
    ToggleCard(usize),
    ToggleDisplayMode,
}
