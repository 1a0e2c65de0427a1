//! In-memory career API for tests.
//!
//! Behaves like a small server: phase updates change the stored roadmap,
//! reset removes it, generate replaces it. Every call is recorded.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, RwLock};
use tokio::sync::Notify;

use crate::domain::profile::StudentProfile;
use crate::domain::progress::Progress;
use crate::domain::roadmap::{PhaseRecordStatus, RoadmapSnapshot};
use crate::ports::{ApiError, CareerApi, FetchOutcome};

/// A recorded call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    FetchProfile,
    FetchRoadmap,
    Generate(StudentProfile),
    UpdatePhase {
        phase_index: usize,
        status: PhaseRecordStatus,
    },
    Adapt,
    Reset,
}

impl ApiCall {
    pub fn is_write(&self) -> bool {
        !matches!(self, ApiCall::FetchProfile | ApiCall::FetchRoadmap)
    }
}

#[derive(Debug, Default)]
pub struct MockCareerApi {
    profile: RwLock<Option<StudentProfile>>,
    roadmap: RwLock<Option<RoadmapSnapshot>>,
    generated: RwLock<Option<RoadmapSnapshot>>,
    read_error: RwLock<Option<ApiError>>,
    write_error: RwLock<Option<ApiError>>,
    calls: Mutex<Vec<ApiCall>>,
    write_latch: RwLock<Option<Arc<Notify>>>,
}

impl MockCareerApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(self, profile: StudentProfile) -> Self {
        *self.profile.write().unwrap() = Some(profile);
        self
    }

    pub fn with_roadmap(self, roadmap: RoadmapSnapshot) -> Self {
        *self.roadmap.write().unwrap() = Some(roadmap);
        self
    }

    /// What `generate_roadmap` returns and stores.
    pub fn with_generated(self, roadmap: RoadmapSnapshot) -> Self {
        *self.generated.write().unwrap() = Some(roadmap);
        self
    }

    /// Forces every read to fail.
    pub fn with_read_error(self, error: ApiError) -> Self {
        *self.read_error.write().unwrap() = Some(error);
        self
    }

    /// Forces every write to fail.
    pub fn with_write_error(self, error: ApiError) -> Self {
        *self.write_error.write().unwrap() = Some(error);
        self
    }

    pub fn clear_errors(&self) {
        *self.read_error.write().unwrap() = None;
        *self.write_error.write().unwrap() = None;
    }

    /// Makes writes wait until the returned handle is notified.
    pub fn hold_writes(&self) -> Arc<Notify> {
        let latch = Arc::new(Notify::new());
        *self.write_latch.write().unwrap() = Some(latch.clone());
        latch
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn write_calls(&self) -> Vec<ApiCall> {
        self.calls().into_iter().filter(ApiCall::is_write).collect()
    }

    pub fn count(&self, call: &ApiCall) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == call).count()
    }

    pub fn stored_roadmap(&self) -> Option<RoadmapSnapshot> {
        self.roadmap.read().unwrap().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }

    async fn before_write(&self) -> Result<(), ApiError> {
        let latch = self.write_latch.read().unwrap().clone();
        if let Some(latch) = latch {
            latch.notified().await;
        }
        match self.write_error.read().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn read<T: Clone>(&self, slot: &RwLock<Option<T>>) -> FetchOutcome<T> {
        if let Some(error) = self.read_error.read().unwrap().clone() {
            return FetchOutcome::Error(error);
        }
        match slot.read().unwrap().clone() {
            Some(value) => FetchOutcome::Found(value),
            None => FetchOutcome::NotFound,
        }
    }
}

#[async_trait]
impl CareerApi for MockCareerApi {
    async fn fetch_profile(&self) -> FetchOutcome<StudentProfile> {
        self.record(ApiCall::FetchProfile);
        self.read(&self.profile)
    }

    async fn fetch_roadmap(&self) -> FetchOutcome<RoadmapSnapshot> {
        self.record(ApiCall::FetchRoadmap);
        self.read(&self.roadmap)
    }

    async fn generate_roadmap(
        &self,
        profile: &StudentProfile,
    ) -> Result<RoadmapSnapshot, ApiError> {
        self.record(ApiCall::Generate(profile.clone()));
        self.before_write().await?;
        let generated = self
            .generated
            .read()
            .unwrap()
            .clone()
            .unwrap_or_default();
        *self.roadmap.write().unwrap() = Some(generated.clone());
        Ok(generated)
    }

    async fn update_phase(
        &self,
        phase_index: usize,
        status: PhaseRecordStatus,
    ) -> Result<(), ApiError> {
        self.record(ApiCall::UpdatePhase {
            phase_index,
            status,
        });
        self.before_write().await?;

        let mut stored = self.roadmap.write().unwrap();
        let snapshot = stored
            .as_mut()
            .ok_or_else(|| ApiError::new("/api/progress/update", "no roadmap"))?;
        let learning = snapshot
            .learning_roadmap
            .as_mut()
            .ok_or_else(|| ApiError::new("/api/progress/update", "no roadmap"))?;
        let phase = learning
            .phases
            .get_mut(phase_index)
            .ok_or_else(|| ApiError::new("/api/progress/update", "phase out of range"))?;
        phase.status = status;

        let completed = learning.phases.iter().filter(|p| p.is_completed()).count() as u32;
        let total = learning.phases.len() as u32;
        let previous = snapshot.progress.clone().unwrap_or_default();
        let mut progress = Progress::new(completed, total).with_streak(previous.streak_days);
        if let Some(at) = previous.last_activity {
            progress = progress.with_last_activity(at);
        }
        snapshot.progress = Some(progress);
        Ok(())
    }

    async fn adapt_roadmap(&self) -> Result<(), ApiError> {
        self.record(ApiCall::Adapt);
        self.before_write().await
    }

    async fn reset_roadmap(&self) -> Result<(), ApiError> {
        self.record(ApiCall::Reset);
        self.before_write().await?;
        *self.roadmap.write().unwrap() = None;
        Ok(())
    }
}
