//! Career API port - the remote service that owns profile, roadmap and
//! progress state.
//!
//! Reads come back as a [`FetchOutcome`] so callers never inspect response
//! shapes. Writes return `Result<_, ApiError>`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::profile::StudentProfile;
use crate::domain::roadmap::{PhaseRecordStatus, RoadmapSnapshot};

/// A failed API call. Flat on purpose: the endpoint and a reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{endpoint}: {reason}")]
pub struct ApiError {
    pub endpoint: String,
    pub reason: String,
}

impl ApiError {
    pub fn new(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }
}

/// Result of a read.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Found(T),
    /// The server answered but has nothing for this learner yet.
    NotFound,
    Error(ApiError),
}

impl<T> FetchOutcome<T> {
    pub fn found(self) -> Option<T> {
        match self {
            FetchOutcome::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchOutcome::NotFound)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Found(value) => FetchOutcome::Found(f(value)),
            FetchOutcome::NotFound => FetchOutcome::NotFound,
            FetchOutcome::Error(e) => FetchOutcome::Error(e),
        }
    }
}

/// Remote career-roadmap API.
///
/// # Contract
///
/// Implementations must:
/// - Return `NotFound` for a successful response with no usable payload
/// - Never retry
/// - Attach a fresh bearer credential to every request
#[async_trait]
pub trait CareerApi: Send + Sync {
    async fn fetch_profile(&self) -> FetchOutcome<StudentProfile>;

    async fn fetch_roadmap(&self) -> FetchOutcome<RoadmapSnapshot>;

    /// Sends the profile verbatim and returns the generated roadmap.
    async fn generate_roadmap(&self, profile: &StudentProfile)
        -> Result<RoadmapSnapshot, ApiError>;

    async fn update_phase(
        &self,
        phase_index: usize,
        status: PhaseRecordStatus,
    ) -> Result<(), ApiError>;

    /// Asks the server to re-plan the remaining phases.
    async fn adapt_roadmap(&self) -> Result<(), ApiError>;

    /// Deletes the current career path.
    async fn reset_roadmap(&self) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_endpoint_and_reason() {
        let err = ApiError::new("/api/career/roadmap", "status 500");
        assert_eq!(err.to_string(), "/api/career/roadmap: status 500");
    }

    #[test]
    fn fetch_outcome_helpers() {
        assert_eq!(FetchOutcome::Found(2).map(|n| n * 2).found(), Some(4));
        assert!(FetchOutcome::<u8>::NotFound.is_not_found());
        assert_eq!(
            FetchOutcome::<u8>::Error(ApiError::new("/x", "boom")).found(),
            None
        );
    }
}
