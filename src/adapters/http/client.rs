//! HttpCareerApi - reqwest implementation of the `CareerApi` port.
//!
//! # Configuration
//!
//! ```ignore
//! let tokens = Arc::new(StaticTokenProvider::new(token));
//! let api = HttpCareerApi::new("http://localhost:8000", Duration::from_secs(30), tokens)?;
//! ```
//!
//! The bearer credential is requested from the `TokenProvider` on every call.
//! No retries are attempted.

use async_trait::async_trait;
use reqwest::{Client, Method};
use secrecy::ExposeSecret;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::wire::{self, RoadmapResponse, UpdatePhaseRequest};
use crate::domain::profile::StudentProfile;
use crate::domain::roadmap::{PhaseRecordStatus, RoadmapSnapshot};
use crate::ports::{ApiError, CareerApi, FetchOutcome, TokenProvider};

pub const PROFILE_PATH: &str = "/api/students/profile";
pub const ROADMAP_PATH: &str = "/api/career/roadmap";
pub const PROGRESS_UPDATE_PATH: &str = "/api/progress/update";
pub const PROGRESS_ADAPT_PATH: &str = "/api/progress/adapt";

/// Longest slice of an error body kept in an `ApiError` reason.
const ERROR_BODY_LIMIT: usize = 200;

pub struct HttpCareerApi {
    base_url: String,
    timeout: Duration,
    client: Client,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpCareerApi {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            client,
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends one request and returns the body of a 2xx response.
    async fn send(
        &self,
        method: Method,
        path: &'static str,
        body: Option<Value>,
    ) -> Result<String, ApiError> {
        let token = self
            .tokens
            .token()
            .await
            .map_err(|e| ApiError::new(path, e.to_string()))?;

        debug!(%method, path, "sending career api request");
        let mut request = self
            .client
            .request(method, self.url(path))
            .header("Authorization", format!("Bearer {}", token.expose_secret()));
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::new(path, format!("timed out after {}s", self.timeout.as_secs()))
            } else if e.is_connect() {
                ApiError::new(path, format!("connection failed: {}", e))
            } else {
                ApiError::new(path, e.to_string())
            }
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::new(path, format!("failed to read body: {}", e)))?;
        debug!(path, status = status.as_u16(), "career api responded");

        if !status.is_success() {
            let excerpt: String = text.chars().take(ERROR_BODY_LIMIT).collect();
            return Err(ApiError::new(
                path,
                format!("status {}: {}", status.as_u16(), excerpt),
            ));
        }
        Ok(text)
    }

    async fn fetch(&self, path: &'static str) -> FetchOutcome<Value> {
        let text = match self.send(Method::GET, path, None).await {
            Ok(text) => text,
            Err(e) => return FetchOutcome::Error(e),
        };
        match wire::read_payload(&text) {
            Ok(Some(value)) => FetchOutcome::Found(value),
            Ok(None) => FetchOutcome::NotFound,
            Err(e) => FetchOutcome::Error(ApiError::new(path, format!("invalid json: {}", e))),
        }
    }
}

fn decode_roadmap(path: &str, value: Value) -> Result<RoadmapSnapshot, ApiError> {
    serde_json::from_value::<RoadmapResponse>(value)
        .map(RoadmapResponse::into_domain)
        .map_err(|e| ApiError::new(path, format!("unreadable roadmap: {}", e)))
}

#[async_trait]
impl CareerApi for HttpCareerApi {
    async fn fetch_profile(&self) -> FetchOutcome<StudentProfile> {
        match self.fetch(PROFILE_PATH).await {
            FetchOutcome::Found(value) => match serde_json::from_value(value) {
                Ok(profile) => FetchOutcome::Found(profile),
                Err(e) => FetchOutcome::Error(ApiError::new(
                    PROFILE_PATH,
                    format!("unreadable profile: {}", e),
                )),
            },
            FetchOutcome::NotFound => FetchOutcome::NotFound,
            FetchOutcome::Error(e) => FetchOutcome::Error(e),
        }
    }

    async fn fetch_roadmap(&self) -> FetchOutcome<RoadmapSnapshot> {
        match self.fetch(ROADMAP_PATH).await {
            FetchOutcome::Found(value) => match decode_roadmap(ROADMAP_PATH, value) {
                Ok(snapshot) => FetchOutcome::Found(snapshot),
                Err(e) => FetchOutcome::Error(e),
            },
            FetchOutcome::NotFound => FetchOutcome::NotFound,
            FetchOutcome::Error(e) => FetchOutcome::Error(e),
        }
    }

    async fn generate_roadmap(
        &self,
        profile: &StudentProfile,
    ) -> Result<RoadmapSnapshot, ApiError> {
        let body = serde_json::to_value(profile)
            .map_err(|e| ApiError::new(ROADMAP_PATH, format!("unencodable profile: {}", e)))?;
        let text = self.send(Method::POST, ROADMAP_PATH, Some(body)).await?;
        match wire::read_payload(&text) {
            Ok(Some(value)) => decode_roadmap(ROADMAP_PATH, value),
            Ok(None) => Err(ApiError::new(ROADMAP_PATH, "no roadmap in response")),
            Err(e) => Err(ApiError::new(ROADMAP_PATH, format!("invalid json: {}", e))),
        }
    }

    async fn update_phase(
        &self,
        phase_index: usize,
        status: PhaseRecordStatus,
    ) -> Result<(), ApiError> {
        let body = serde_json::to_value(UpdatePhaseRequest {
            phase_index,
            status,
        })
        .map_err(|e| ApiError::new(PROGRESS_UPDATE_PATH, e.to_string()))?;
        self.send(Method::POST, PROGRESS_UPDATE_PATH, Some(body))
            .await
            .map(|_| ())
    }

    async fn adapt_roadmap(&self) -> Result<(), ApiError> {
        self.send(
            Method::POST,
            PROGRESS_ADAPT_PATH,
            Some(Value::Object(serde_json::Map::new())),
        )
        .await
        .map(|_| ())
    }

    async fn reset_roadmap(&self) -> Result<(), ApiError> {
        self.send(Method::DELETE, ROADMAP_PATH, None)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::StaticTokenProvider;

    fn api(base_url: &str, tokens: StaticTokenProvider) -> HttpCareerApi {
        HttpCareerApi::new(base_url, Duration::from_secs(5), Arc::new(tokens)).unwrap()
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = api("http://localhost:8000/", StaticTokenProvider::new("t"));
        assert_eq!(api.base_url(), "http://localhost:8000");
        assert_eq!(
            api.url(ROADMAP_PATH),
            "http://localhost:8000/api/career/roadmap"
        );
    }

    #[tokio::test]
    async fn missing_token_fails_before_sending() {
        let api = api("http://localhost:1", StaticTokenProvider::empty());
        let err = api.adapt_roadmap().await.unwrap_err();
        assert_eq!(err.endpoint, PROGRESS_ADAPT_PATH);
        assert!(err.reason.contains("no credential"));
    }

    #[tokio::test]
    async fn unreachable_server_is_an_error_outcome() {
        // Port 1 is reserved and refuses connections.
        let api = api("http://127.0.0.1:1", StaticTokenProvider::new("t"));
        match api.fetch_roadmap().await {
            FetchOutcome::Error(err) => assert_eq!(err.endpoint, ROADMAP_PATH),
            other => panic!("expected error, got {:?}", other),
        }
    }
}
