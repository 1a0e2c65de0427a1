//! Phase - one ordered stage of a learning roadmap.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Milestone;

/// Completion state recorded by the server for a phase.
///
/// Only the API writes this value; it is never inferred from position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseRecordStatus {
    #[default]
    Pending,
    Completed,
}

impl PhaseRecordStatus {
    /// Interprets a wire status. Anything but "completed" is pending.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            Some("completed") => PhaseRecordStatus::Completed,
            _ => PhaseRecordStatus::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, PhaseRecordStatus::Completed)
    }

    /// The status a toggle request asks the server to store.
    pub fn toggled(&self) -> Self {
        match self {
            PhaseRecordStatus::Completed => PhaseRecordStatus::Pending,
            PhaseRecordStatus::Pending => PhaseRecordStatus::Completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseRecordStatus::Pending => "pending",
            PhaseRecordStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for PhaseRecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty tag used for badge styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Case-insensitive lookup; unknown or missing labels get beginner styling.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_ascii_lowercase()).as_deref() {
            Some("intermediate") => Difficulty::Intermediate,
            Some("advanced") => Difficulty::Advanced,
            _ => Difficulty::Beginner,
        }
    }
}

/// One stage of the roadmap as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    /// Zero-based ordinal, equal to the phase's position in the roadmap.
    pub index: usize,
    pub duration: Option<String>,
    /// Raw difficulty label as sent by the server, shown verbatim.
    pub difficulty_label: Option<String>,
    pub focus_skills: Vec<String>,
    pub outcomes: Vec<String>,
    pub prerequisites: Vec<String>,
    pub milestones: Vec<Milestone>,
    pub status: PhaseRecordStatus,
}

impl Phase {
    /// Number of focus skills shown before the list is elided.
    pub const SKILL_PREVIEW_LEN: usize = 3;

    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index,
            duration: None,
            difficulty_label: None,
            focus_skills: Vec::new(),
            outcomes: Vec::new(),
            prerequisites: Vec::new(),
            milestones: Vec::new(),
            status: PhaseRecordStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: PhaseRecordStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_focus_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.focus_skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_milestones(mut self, milestones: Vec<Milestone>) -> Self {
        self.milestones = milestones;
        self
    }

    pub fn with_difficulty(mut self, label: impl Into<String>) -> Self {
        self.difficulty_label = Some(label.into());
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_label(self.difficulty_label.as_deref())
    }

    /// First few focus skills joined for a one-line summary, with " ..."
    /// appended when the list was cut.
    pub fn focus_skill_preview(&self) -> Option<String> {
        if self.focus_skills.is_empty() {
            return None;
        }
        let shown: Vec<&str> = self
            .focus_skills
            .iter()
            .take(Self::SKILL_PREVIEW_LEN)
            .map(String::as_str)
            .collect();
        let mut preview = shown.join(", ");
        if self.focus_skills.len() > Self::SKILL_PREVIEW_LEN {
            preview.push_str(" ...");
        }
        Some(preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_status_reads_only_completed_literal() {
        assert_eq!(
            PhaseRecordStatus::from_wire(Some("completed")),
            PhaseRecordStatus::Completed
        );
        assert_eq!(
            PhaseRecordStatus::from_wire(Some("in_progress")),
            PhaseRecordStatus::Pending
        );
        assert_eq!(PhaseRecordStatus::from_wire(None), PhaseRecordStatus::Pending);
    }

    #[test]
    fn toggled_flips_between_pending_and_completed() {
        assert_eq!(
            PhaseRecordStatus::Completed.toggled(),
            PhaseRecordStatus::Pending
        );
        assert_eq!(
            PhaseRecordStatus::Pending.toggled(),
            PhaseRecordStatus::Completed
        );
    }

    #[test]
    fn difficulty_is_case_insensitive_with_beginner_fallback() {
        assert_eq!(Difficulty::from_label(Some("Advanced")), Difficulty::Advanced);
        assert_eq!(
            Difficulty::from_label(Some("INTERMEDIATE")),
            Difficulty::Intermediate
        );
        assert_eq!(Difficulty::from_label(Some("expert")), Difficulty::Beginner);
        assert_eq!(Difficulty::from_label(None), Difficulty::Beginner);
    }

    #[test]
    fn skill_preview_elides_after_three() {
        let phase = Phase::new(0, "Month 1").with_focus_skills(["rust", "sql", "git", "http"]);
        assert_eq!(
            phase.focus_skill_preview().as_deref(),
            Some("rust, sql, git ...")
        );

        let short = Phase::new(1, "Month 2").with_focus_skills(["rust", "sql"]);
        assert_eq!(short.focus_skill_preview().as_deref(), Some("rust, sql"));

        assert_eq!(Phase::new(2, "Month 3").focus_skill_preview(), None);
    }

    #[test]
    fn record_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PhaseRecordStatus::Completed).unwrap(),
            "\"completed\""
        );
    }
}
