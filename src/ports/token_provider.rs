//! Token provider port - where the bearer credential comes from.

use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("no credential available")]
    Missing,
}

/// Supplies the bearer credential. Asked once per request so that a
/// refreshed credential is picked up without rebuilding the client.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> Result<Secret<String>, TokenError>;
}
