//! The ordered learning roadmap and the full snapshot returned by the API.

use serde::{Deserialize, Serialize};

use super::{Milestone, MilestoneRef, Phase};
use crate::domain::career::CareerDecision;
use crate::domain::progress::Progress;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LearningRoadmap {
    pub duration_months: Option<u32>,
    pub phases: Vec<Phase>,
}

impl LearningRoadmap {
    pub fn new(phases: Vec<Phase>) -> Self {
        Self {
            duration_months: None,
            phases,
        }
    }

    pub fn with_duration_months(mut self, months: u32) -> Self {
        self.duration_months = Some(months);
        self
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn phase(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }

    pub fn milestone(&self, at: MilestoneRef) -> Option<&Milestone> {
        self.phase(at.phase_index)?.milestones.get(at.milestone_index)
    }
}

/// Everything one roadmap read returns. Never mutated locally; a write is
/// followed by a fresh read instead.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoadmapSnapshot {
    pub learning_roadmap: Option<LearningRoadmap>,
    pub progress: Option<Progress>,
    pub career_decision: Option<CareerDecision>,
}

impl RoadmapSnapshot {
    pub fn phases(&self) -> &[Phase] {
        self.learning_roadmap
            .as_ref()
            .map(|r| r.phases.as_slice())
            .unwrap_or(&[])
    }

    /// Completed-phase counter, zero when progress is missing.
    pub fn completed_count(&self) -> usize {
        self.progress
            .as_ref()
            .map(|p| p.completed_phases as usize)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestone_lookup_by_ref() {
        let roadmap = LearningRoadmap::new(vec![
            Phase::new(0, "Month 1").with_milestones(vec![Milestone::new("a"), Milestone::new("b")]),
        ]);
        assert_eq!(
            roadmap.milestone(MilestoneRef::new(0, 1)).map(|m| m.name.as_str()),
            Some("b")
        );
        assert!(roadmap.milestone(MilestoneRef::new(0, 2)).is_none());
        assert!(roadmap.milestone(MilestoneRef::new(3, 0)).is_none());
    }

    #[test]
    fn empty_snapshot_has_no_phases() {
        let snapshot = RoadmapSnapshot::default();
        assert!(snapshot.phases().is_empty());
        assert_eq!(snapshot.completed_count(), 0);
    }
}
