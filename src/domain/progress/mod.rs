//! Progress module - completion aggregation and learning pace.

pub mod pace;
mod snapshot;

pub use pace::{classify_pace, LearningPace, PaceTier};
pub use snapshot::{percentage, Progress};
