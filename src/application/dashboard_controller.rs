//! DashboardController - orchestrates loads and writes for one dashboard.
//!
//! Holds the last fetched state behind a lock that is never held across an
//! await. Every successful phase toggle, adapt or reset is followed by a full
//! roadmap re-fetch; nothing is updated optimistically.

use chrono::{DateTime, Utc};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, error, info, warn};

use super::mutation_gate::MutationGate;
use crate::domain::dashboard::{
    DashboardIntent, DashboardState, DashboardView, InFlight, MutationKind, StateChange,
    ViewContext,
};
use crate::domain::roadmap::MilestoneRef;
use crate::ports::{ApiError, CareerApi, FetchOutcome, Notification, Notifier};

pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate roadmap";
pub const RESET_SUCCEEDED_MESSAGE: &str =
    "✅ Career path reset successfully! You can now generate a new roadmap.";
pub const RESET_FAILED_MESSAGE: &str = "❌ Failed to reset career path. Please try again.";
pub const RESET_CONFIRM_PROMPT: &str = "⚠️ Are you sure you want to reset your career path?\n\n\
    This will:\n\
    • Delete your current roadmap\n\
    • Reset your progress to 0%\n\
    • Clear your streak\n\n\
    Your profile will be saved and you can generate a new roadmap immediately.";

/// Result of a phase toggle or adapt request.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOutcome {
    Applied,
    /// A request of the same kind was in flight, or there was nothing to write.
    Skipped,
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    Generated,
    /// No profile is loaded; the learner has to fill one in first.
    ProfileRequired,
    Skipped,
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResetOutcome {
    Reset,
    Declined,
    Skipped,
    Failed(ApiError),
}

pub struct DashboardController {
    api: Arc<dyn CareerApi>,
    notifier: Arc<dyn Notifier>,
    state: RwLock<DashboardState>,
    gate: MutationGate,
    milestone_completion: bool,
}

impl DashboardController {
    pub fn new(api: Arc<dyn CareerApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_state(api, notifier, DashboardState::default())
    }

    pub fn with_state(
        api: Arc<dyn CareerApi>,
        notifier: Arc<dyn Notifier>,
        state: DashboardState,
    ) -> Self {
        Self {
            api,
            notifier,
            state: RwLock::new(state),
            gate: MutationGate::new(),
            milestone_completion: false,
        }
    }

    /// Shows "Mark as Complete" on milestones of phases not yet completed.
    pub fn with_milestone_completion(mut self, enabled: bool) -> Self {
        self.milestone_completion = enabled;
        self
    }

    /// Cloned copy of the current state.
    pub fn snapshot(&self) -> DashboardState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn in_flight(&self) -> InFlight {
        self.gate.in_flight()
    }

    pub fn view(&self, now: DateTime<Utc>) -> DashboardView {
        let ctx = ViewContext::at(now)
            .with_in_flight(self.in_flight())
            .with_milestone_completion(self.milestone_completion);
        DashboardView::build(&self.snapshot(), &ctx)
    }

    fn apply(&self, change: StateChange) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = std::mem::take(&mut *state).apply(change);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Loads
    // ════════════════════════════════════════════════════════════════════════

    /// Loads profile and roadmap.
    pub async fn refresh(&self) {
        tokio::join!(self.load_profile(), self.load_roadmap());
    }

    /// Failures are logged and the previous profile is kept.
    pub async fn load_profile(&self) {
        match self.api.fetch_profile().await {
            FetchOutcome::Found(profile) => self.apply(StateChange::ProfileLoaded(profile)),
            FetchOutcome::NotFound => debug!("no profile on the server yet"),
            FetchOutcome::Error(e) => error!(error = %e, "Error loading profile"),
        }
    }

    /// Failures are logged and the previous roadmap is kept.
    pub async fn load_roadmap(&self) {
        match self.api.fetch_roadmap().await {
            FetchOutcome::Found(roadmap) => self.apply(StateChange::RoadmapLoaded(roadmap)),
            FetchOutcome::NotFound => debug!("no roadmap on the server yet"),
            FetchOutcome::Error(e) => error!(error = %e, "Error loading roadmap"),
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Writes
    // ════════════════════════════════════════════════════════════════════════

    /// Generates a roadmap from the loaded profile.
    pub async fn generate(&self) -> GenerateOutcome {
        let Some(profile) = self.snapshot().profile else {
            info!("generate requested without a profile");
            return GenerateOutcome::ProfileRequired;
        };
        let Some(_guard) = self.gate.try_acquire(MutationKind::Generate) else {
            debug!("generate already in flight, skipping");
            return GenerateOutcome::Skipped;
        };

        match self.api.generate_roadmap(&profile).await {
            Ok(roadmap) => {
                self.apply(StateChange::RoadmapLoaded(roadmap));
                GenerateOutcome::Generated
            }
            Err(e) => {
                error!(error = %e, "Error generating roadmap");
                self.notifier
                    .notify(Notification::failure(GENERATE_FAILED_MESSAGE))
                    .await;
                GenerateOutcome::Failed(e)
            }
        }
    }

    /// Flips the server-recorded status of one phase.
    pub async fn toggle_phase(&self, phase_index: usize) -> WriteOutcome {
        let status = self
            .snapshot()
            .roadmap
            .as_ref()
            .and_then(|r| r.phases().get(phase_index).map(|p| p.status));
        let Some(status) = status else {
            warn!(phase_index, "toggle requested for unknown phase");
            return WriteOutcome::Skipped;
        };
        let Some(_guard) = self.gate.try_acquire(MutationKind::PhaseUpdate) else {
            debug!(phase_index, "phase update already in flight, skipping");
            return WriteOutcome::Skipped;
        };

        match self.api.update_phase(phase_index, status.toggled()).await {
            Ok(()) => {
                self.load_roadmap().await;
                WriteOutcome::Applied
            }
            Err(e) => {
                error!(error = %e, phase_index, "Error updating progress");
                WriteOutcome::Failed(e)
            }
        }
    }

    /// Asks the server to re-plan the remaining phases.
    pub async fn adapt(&self) -> WriteOutcome {
        let Some(_guard) = self.gate.try_acquire(MutationKind::Adapt) else {
            debug!("adapt already in flight, skipping");
            return WriteOutcome::Skipped;
        };

        match self.api.adapt_roadmap().await {
            Ok(()) => {
                self.load_roadmap().await;
                WriteOutcome::Applied
            }
            Err(e) => {
                error!(error = %e, "Error adapting roadmap");
                WriteOutcome::Failed(e)
            }
        }
    }

    /// Deletes the career path after the learner confirms.
    ///
    /// The gate is held across the prompt, so a reset already in flight
    /// skips without asking again.
    pub async fn reset(&self) -> ResetOutcome {
        let Some(_guard) = self.gate.try_acquire(MutationKind::Reset) else {
            debug!("reset already in flight, skipping");
            return ResetOutcome::Skipped;
        };
        if !self.notifier.confirm(RESET_CONFIRM_PROMPT).await {
            return ResetOutcome::Declined;
        }

        match self.api.reset_roadmap().await {
            Ok(()) => {
                self.apply(StateChange::RoadmapCleared);
                self.notifier
                    .notify(Notification::success(RESET_SUCCEEDED_MESSAGE))
                    .await;
                self.load_roadmap().await;
                ResetOutcome::Reset
            }
            Err(e) => {
                error!(error = %e, "Error resetting career path");
                self.notifier
                    .notify(Notification::failure(RESET_FAILED_MESSAGE))
                    .await;
                ResetOutcome::Failed(e)
            }
        }
    }

    /// No endpoint records milestone completion, so the request is dropped.
    pub fn complete_milestone(&self, at: MilestoneRef) {
        warn!(milestone = %at, "milestone completion is not supported by the API");
    }

    // ════════════════════════════════════════════════════════════════════════
    // Local affordances
    // ════════════════════════════════════════════════════════════════════════

    pub fn toggle_card(&self, phase_index: usize) {
        self.apply(StateChange::PhaseCardToggled(phase_index));
    }

    pub fn toggle_display_mode(&self) {
        self.apply(StateChange::DisplayModeToggled);
    }

    /// Routes a user intent to its handler.
    pub async fn dispatch(&self, intent: DashboardIntent) {
        match intent {
            DashboardIntent::Refresh => self.refresh().await,
            DashboardIntent::Generate => {
                let outcome = self.generate().await;
                debug!(?outcome, "generate finished");
            }
            DashboardIntent::TogglePhase(index) => {
                let outcome = self.toggle_phase(index).await;
                debug!(?outcome, "phase toggle finished");
            }
            DashboardIntent::CompleteMilestone(at) => self.complete_milestone(at),
            DashboardIntent::Adapt => {
                let outcome = self.adapt().await;
                debug!(?outcome, "adapt finished");
            }
            DashboardIntent::Reset => {
                let outcome = self.reset().await;
                debug!(?outcome, "reset finished");
            }
            DashboardIntent::ToggleCard(index) => self.toggle_card(index),
            DashboardIntent::ToggleDisplayMode => self.toggle_display_mode(),
        }
    }
}

#[cfg(test)]
#[path = "dashboard_controller_test.rs"]
mod dashboard_controller_test;
