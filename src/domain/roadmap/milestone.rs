//! Milestone - a sub-task within a phase.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Resource;

/// Identifies a milestone by its (phase index, milestone index) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MilestoneRef {
    pub phase_index: usize,
    pub milestone_index: usize,
}

impl MilestoneRef {
    pub fn new(phase_index: usize, milestone_index: usize) -> Self {
        Self {
            phase_index,
            milestone_index,
        }
    }
}

impl fmt::Display for MilestoneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.phase_index + 1, self.milestone_index + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub description: String,
    /// Never negative; the ingestion boundary clamps bad values to zero.
    pub estimated_hours: f64,
    pub resources: Vec<Resource>,
}

impl Milestone {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            estimated_hours: 0.0,
            resources: Vec::new(),
        }
    }

    pub fn with_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = hours.max(0.0);
        self
    }

    pub fn with_resources(mut self, resources: Vec<Resource>) -> Self {
        self.resources = resources;
        self
    }

    /// The hour badge is only shown for a positive estimate.
    pub fn time_badge(&self) -> Option<String> {
        if self.estimated_hours > 0.0 {
            Some(format!("{}h", self.estimated_hours))
        } else {
            None
        }
    }
}
