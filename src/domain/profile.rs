//! StudentProfile - the learner profile a roadmap is generated from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// How fast the learner wants to move, as chosen on the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredPace {
    Slow,
    #[default]
    Medium,
    Fast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub skills: BTreeMap<String, SkillLevel>,
    pub time_per_week: u32,
    #[serde(default)]
    pub learning_pace: PreferredPace,
    pub goal: String,
    /// Fields this client does not model, sent back untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl StudentProfile {
    pub const MIN_HOURS_PER_WEEK: u32 = 1;
    pub const MAX_HOURS_PER_WEEK: u32 = 60;

    pub fn new(goal: impl Into<String>, time_per_week: u32) -> Self {
        Self {
            name: None,
            interests: Vec::new(),
            skills: BTreeMap::new(),
            time_per_week,
            learning_pace: PreferredPace::default(),
            goal: goal.into(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.goal.trim().is_empty() {
            return Err(ValidationError::empty_field("goal"));
        }
        if !(Self::MIN_HOURS_PER_WEEK..=Self::MAX_HOURS_PER_WEEK).contains(&self.time_per_week) {
            return Err(ValidationError::out_of_range(
                "time_per_week",
                i64::from(Self::MIN_HOURS_PER_WEEK),
                i64::from(Self::MAX_HOURS_PER_WEEK),
                i64::from(self.time_per_week),
            ));
        }
        Ok(())
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Learner")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validate_accepts_reasonable_profile() {
        assert!(StudentProfile::new("software engineering", 10).validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_goal() {
        assert_eq!(
            StudentProfile::new("  ", 10).validate(),
            Err(ValidationError::empty_field("goal"))
        );
    }

    #[test]
    fn validate_rejects_hours_out_of_range() {
        assert!(StudentProfile::new("data", 0).validate().is_err());
        assert!(StudentProfile::new("data", 61).validate().is_err());
        assert!(StudentProfile::new("data", 60).validate().is_ok());
    }

    #[test]
    fn deserializes_wire_profile_and_keeps_unknown_fields() {
        let raw = json!({
            "name": "Ada",
            "interests": ["backend", "problem-solving"],
            "skills": {"python": "beginner", "logic": "intermediate"},
            "time_per_week": 10,
            "learning_pace": "medium",
            "goal": "software engineering",
            "education": "BSc"
        });

        let profile: StudentProfile = serde_json::from_value(raw).unwrap();
        assert_eq!(profile.skills.get("logic"), Some(&SkillLevel::Intermediate));
        assert_eq!(profile.extra.get("education"), Some(&json!("BSc")));

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["education"], json!("BSc"));
        assert_eq!(back["learning_pace"], json!("medium"));
    }

    #[test]
    fn display_name_falls_back() {
        assert_eq!(StudentProfile::new("x", 5).display_name(), "Learner");
    }
}
