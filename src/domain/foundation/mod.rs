//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the SkillRoute domain.

mod errors;
mod percentage;

pub use errors::ValidationError;
pub use percentage::Percentage;
