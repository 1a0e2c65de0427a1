//! Roadmap module - phases, milestones, resources and the derivations
//! computed from them.

mod learning_roadmap;
mod milestone;
mod phase;
pub mod phase_status;
pub mod recommendation;
pub mod resource;

pub use learning_roadmap::{LearningRoadmap, RoadmapSnapshot};
pub use milestone::{Milestone, MilestoneRef};
pub use phase::{Difficulty, Phase, PhaseRecordStatus};
pub use phase_status::PhaseStatus;
pub use recommendation::{next_phase, phase_after, Recommendation};
pub use resource::{Resource, ResourceBucket, ResourceColor, ResourceIcon, ResourceType};
