//! In-memory adapters for tests and local development.
//!
//! - `MockCareerApi` - Career API that keeps its data in memory
//! - `RecordingNotifier` - Notifier that records instead of displaying

mod career_api;
mod notifier;

pub use career_api::{ApiCall, MockCareerApi};
pub use notifier::RecordingNotifier;
