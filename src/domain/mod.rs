//! Domain layer containing the roadmap model and every derivation computed
//! from it.
//!
//! # Module Organization
//!
//! - `foundation` - Shared value objects and errors
//! - `roadmap` - Phases, milestones, resources, phase status, recommendations
//! - `progress` - Completion percentage and learning pace
//! - `career` - Career decision and its display summary
//! - `profile` - Student profile sent to roadmap generation
//! - `dashboard` - UI state and the derived view model

pub mod career;
pub mod dashboard;
pub mod foundation;
pub mod profile;
pub mod progress;
pub mod roadmap;
