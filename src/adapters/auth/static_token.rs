//! Static token provider - a credential fixed at startup.
//!
//! Used by the CLI, where the token comes from a flag, the environment or
//! configuration, and by tests.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ports::{TokenError, TokenProvider};

#[derive(Debug, Default)]
pub struct StaticTokenProvider {
    token: Option<Secret<String>>,
    /// How many times a token was requested.
    requests: AtomicUsize,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self::from_secret(Some(Secret::new(token.into())))
    }

    /// A provider that has no credential; every request fails.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_secret(token: Option<Secret<String>>) -> Self {
        Self {
            token: token.filter(|t| !t.expose_secret().trim().is_empty()),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Result<Secret<String>, TokenError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.token
            .as_ref()
            .map(|t| Secret::new(t.expose_secret().clone()))
            .ok_or(TokenError::Missing)
    }
}
