//! DashboardView - every value a renderer needs, derived from one state
//! snapshot and one clock reading.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{DashboardState, DisplayMode, InFlight};
use crate::domain::career::{summarize, CareerSummary};
use crate::domain::foundation::Percentage;
use crate::domain::progress::{LearningPace, Progress};
use crate::domain::roadmap::{
    phase_status, Difficulty, LearningRoadmap, MilestoneRef, Phase, PhaseStatus, Recommendation,
    Resource, ResourceBucket,
};

/// Inputs that are not part of the dashboard state.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub now: DateTime<Utc>,
    pub in_flight: InFlight,
    /// Whether a milestone completion handler is registered.
    pub milestone_completion: bool,
}

impl ViewContext {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            in_flight: InFlight::default(),
            milestone_completion: false,
        }
    }

    pub fn with_in_flight(mut self, in_flight: InFlight) -> Self {
        self.in_flight = in_flight;
        self
    }

    pub fn with_milestone_completion(mut self, enabled: bool) -> Self {
        self.milestone_completion = enabled;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressTrackerView {
    pub percentage: Percentage,
    pub streak_days: u32,
    pub pace: LearningPace,
    pub last_active: String,
    /// Set exactly when the roadmap is at 100%.
    pub celebrate: bool,
}

impl ProgressTrackerView {
    pub fn build(progress: &Progress, now: DateTime<Utc>) -> Self {
        let percentage = progress.percentage();
        Self {
            percentage,
            streak_days: progress.streak_days,
            pace: progress.pace(now),
            last_active: progress
                .last_activity
                .map(|at| at.format("%b %-d, %Y").to_string())
                .unwrap_or_else(|| "Today".to_string()),
            celebrate: percentage.is_full(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceView {
    pub resource: Resource,
    pub bucket: ResourceBucket,
}

#[derive(Debug, Clone, Serialize)]
pub struct MilestoneCardView {
    pub at: MilestoneRef,
    pub name: String,
    pub description: String,
    pub time_badge: Option<String>,
    pub resources: Vec<ResourceView>,
    pub completed: bool,
    pub can_mark_complete: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub phase: Phase,
    pub status: PhaseStatus,
    /// Only present when the server sent a difficulty label.
    pub difficulty: Option<Difficulty>,
    pub skill_preview: Option<String>,
    pub expanded: bool,
    pub milestones: Vec<MilestoneCardView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineView {
    pub caption: String,
    pub entries: Vec<TimelineEntry>,
}

impl TimelineView {
    pub fn build(
        roadmap: &LearningRoadmap,
        completed_count: usize,
        state: &DashboardState,
        milestone_completion: bool,
    ) -> Self {
        let entries = roadmap
            .phases
            .iter()
            .enumerate()
            .map(|(index, phase)| {
                let status = phase_status::resolve(index, completed_count);
                let completed = status == PhaseStatus::Completed;
                let milestones = phase
                    .milestones
                    .iter()
                    .enumerate()
                    .map(|(m_index, milestone)| MilestoneCardView {
                        at: MilestoneRef::new(index, m_index),
                        name: milestone.name.clone(),
                        description: milestone.description.clone(),
                        time_badge: milestone.time_badge(),
                        resources: milestone
                            .resources
                            .iter()
                            .map(|r| ResourceView {
                                resource: r.clone(),
                                bucket: r.bucket(),
                            })
                            .collect(),
                        completed,
                        can_mark_complete: !completed && milestone_completion,
                    })
                    .collect();
                TimelineEntry {
                    phase: phase.clone(),
                    status,
                    difficulty: phase.difficulty_label.as_ref().map(|_| phase.difficulty()),
                    skill_preview: phase.focus_skill_preview(),
                    expanded: state.expansion.is_expanded(index),
                    milestones,
                }
            })
            .collect();

        Self {
            caption: format!(
                "{} of {} phases completed",
                completed_count,
                roadmap.phases.len()
            ),
            entries,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassicEntry {
    pub phase: Phase,
    /// From the server-recorded status, not the counter.
    pub completed: bool,
    pub toggle_enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassicView {
    pub duration_months: Option<u32>,
    pub entries: Vec<ClassicEntry>,
    pub adapt_enabled: bool,
    pub reset_enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub learner: String,
    pub career: Option<CareerSummary>,
    pub progress: Option<ProgressTrackerView>,
    pub recommendation: Option<Recommendation>,
    pub mode: DisplayMode,
    pub switch_caption: Option<&'static str>,
    pub timeline: Option<TimelineView>,
    pub classic: Option<ClassicView>,
    /// No roadmap yet: show the generate prompt.
    pub needs_generation: bool,
    pub updating: bool,
    pub loading: bool,
}

impl DashboardView {
    pub fn build(state: &DashboardState, ctx: &ViewContext) -> Self {
        let snapshot = state.roadmap.as_ref();
        let learning = snapshot.and_then(|s| s.learning_roadmap.as_ref());
        let progress = snapshot.and_then(|s| s.progress.as_ref());
        let completed_count = snapshot.map(|s| s.completed_count()).unwrap_or(0);
        let updating = ctx.in_flight.updating();
        let loading = ctx.in_flight.loading();
        let mode = state.mode.effective(learning.is_some());

        let recommendation = match (progress, learning) {
            (Some(_), Some(roadmap)) => Some(Recommendation::for_phases(&roadmap.phases)),
            _ => None,
        };

        let timeline = match (mode, learning) {
            (DisplayMode::Timeline, Some(roadmap)) => Some(TimelineView::build(
                roadmap,
                completed_count,
                state,
                ctx.milestone_completion,
            )),
            _ => None,
        };

        // A roadmap record without phases still gets the header and actions.
        let classic = match (mode, snapshot) {
            (DisplayMode::Classic, Some(_)) => Some(ClassicView {
                duration_months: learning.and_then(|r| r.duration_months),
                entries: learning
                    .map(|roadmap| {
                        roadmap
                            .phases
                            .iter()
                            .map(|phase| ClassicEntry {
                                phase: phase.clone(),
                                completed: phase.is_completed(),
                                toggle_enabled: !updating,
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
                adapt_enabled: !updating && !loading,
                reset_enabled: !loading,
            }),
            _ => None,
        };

        Self {
            learner: state
                .profile
                .as_ref()
                .map(|p| p.display_name().to_string())
                .unwrap_or_else(|| "Learner".to_string()),
            career: snapshot
                .and_then(|s| s.career_decision.as_ref())
                .map(summarize),
            progress: progress.map(|p| ProgressTrackerView::build(p, ctx.now)),
            recommendation,
            mode,
            switch_caption: learning.map(|_| state.mode.switch_caption()),
            timeline,
            classic,
            needs_generation: snapshot.is_none(),
            updating,
            loading,
        }
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
