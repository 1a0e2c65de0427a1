//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CareerApi` - Remote profile, roadmap and progress API
//! - `TokenProvider` - Bearer credential source
//! - `Notifier` - Alerts and confirmations shown to the user

mod career_api;
mod notifier;
mod token_provider;

pub use career_api::{ApiError, CareerApi, FetchOutcome};
pub use notifier::{Notification, NotificationLevel, Notifier};
pub use token_provider::{TokenError, TokenProvider};
