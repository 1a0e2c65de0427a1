//! Wire DTOs for the career API.
//!
//! These types mirror what the server actually sends: every field optional,
//! numbers possibly fractional, dates in more than one format. Conversion to
//! domain types happens here and nowhere else, so every default and clamp
//! lives in this file.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::domain::career::{AlternativeCareer, CareerDecision};
use crate::domain::foundation::Percentage;
use crate::domain::progress::Progress;
use crate::domain::roadmap::{
    LearningRoadmap, Milestone, Phase, PhaseRecordStatus, Resource, ResourceType, RoadmapSnapshot,
};

// ════════════════════════════════════════════════════════════════════════════
// Response classification
// ════════════════════════════════════════════════════════════════════════════

/// Reads a response body. `Ok(None)` means the server has nothing to show:
/// an empty or null body, or an object carrying a truthy `message`.
pub fn read_payload(body: &str) -> Result<Option<Value>, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(body)?;
    if !is_truthy(&value) {
        return Ok(None);
    }
    if value.get("message").is_some_and(is_truthy) {
        return Ok(None);
    }
    Ok(Some(value))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct UpdatePhaseRequest {
    pub phase_index: usize,
    pub status: PhaseRecordStatus,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoadmapResponse {
    #[serde(default)]
    pub learning_roadmap: Option<LearningRoadmapDto>,
    #[serde(default)]
    pub progress: Option<ProgressDto>,
    #[serde(default)]
    pub career_decision: Option<CareerDecisionDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LearningRoadmapDto {
    #[serde(default)]
    pub duration_months: Option<f64>,
    /// The phase list is called `roadmap` on the wire.
    #[serde(default, rename = "roadmap")]
    pub phases: Option<Vec<PhaseDto>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhaseDto {
    #[serde(default, deserialize_with = "lenient_string")]
    pub phase: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phase_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub focus_skills: Option<Vec<String>>,
    #[serde(default)]
    pub outcomes: Option<Vec<String>>,
    #[serde(default)]
    pub prerequisites: Option<Vec<String>>,
    #[serde(default)]
    pub milestones: Option<Vec<MilestoneDto>>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MilestoneDto {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub resources: Option<Vec<ResourceDto>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceDto {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub resource_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressDto {
    #[serde(default)]
    pub completed_phases: Option<f64>,
    #[serde(default)]
    pub total_phases: Option<f64>,
    #[serde(default)]
    pub streak_days: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_activity_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CareerDecisionDto {
    #[serde(default, deserialize_with = "lenient_string")]
    pub career: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub skill_match_percentage: Option<f64>,
    #[serde(default)]
    pub market_readiness: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub industry_demand: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub key_strengths: Option<Vec<String>>,
    #[serde(default)]
    pub skill_gaps: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub time_to_job_ready: Option<String>,
    #[serde(default)]
    pub alternatives: Option<Vec<AlternativeDto>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlternativeDto {
    #[serde(default, deserialize_with = "lenient_string")]
    pub career: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reason: Option<String>,
    #[serde(default)]
    pub match_score: Option<f64>,
}

/// Accepts a string, a number or null. Generated roadmaps are not strict
/// about `"4 weeks"` versus `4`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Conversion to domain
// ════════════════════════════════════════════════════════════════════════════

fn count(value: Option<f64>) -> u32 {
    value
        .filter(|v| v.is_finite())
        .map(|v| v.max(0.0).min(f64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

fn percent(value: Option<f64>) -> Percentage {
    value
        .map(Percentage::saturating_from_f64)
        .unwrap_or(Percentage::ZERO)
}

/// Parses RFC 3339, a naive ISO timestamp (taken as UTC) or a bare date.
pub fn parse_activity_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl RoadmapResponse {
    pub fn into_domain(self) -> RoadmapSnapshot {
        let learning_roadmap = self.learning_roadmap.map(LearningRoadmapDto::into_domain);
        let phase_count = learning_roadmap.as_ref().map(|r| r.len() as u32);
        RoadmapSnapshot {
            progress: self.progress.map(|p| p.into_domain(phase_count)),
            career_decision: self.career_decision.map(CareerDecisionDto::into_domain),
            learning_roadmap,
        }
    }
}

impl LearningRoadmapDto {
    pub fn into_domain(self) -> LearningRoadmap {
        let phases = self
            .phases
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, phase)| phase.into_domain(index))
            .collect();
        LearningRoadmap {
            duration_months: self.duration_months.map(|m| count(Some(m.round()))),
            phases,
        }
    }
}

impl PhaseDto {
    pub fn into_domain(self, index: usize) -> Phase {
        let name = self
            .phase
            .filter(|n| !n.is_empty())
            .or(self.phase_name)
            .unwrap_or_else(|| format!("Phase {}", index + 1));
        Phase {
            name,
            index,
            duration: self.duration,
            difficulty_label: self.difficulty,
            focus_skills: self.focus_skills.unwrap_or_default(),
            outcomes: self.outcomes.unwrap_or_default(),
            prerequisites: self.prerequisites.unwrap_or_default(),
            milestones: self
                .milestones
                .unwrap_or_default()
                .into_iter()
                .map(MilestoneDto::into_domain)
                .collect(),
            status: PhaseRecordStatus::from_wire(self.status.as_deref()),
        }
    }
}

impl MilestoneDto {
    pub fn into_domain(self) -> Milestone {
        Milestone {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            estimated_hours: self
                .estimated_hours
                .filter(|h| h.is_finite())
                .unwrap_or(0.0)
                .max(0.0),
            resources: self
                .resources
                .unwrap_or_default()
                .into_iter()
                .map(ResourceDto::into_domain)
                .collect(),
        }
    }
}

impl ResourceDto {
    pub fn into_domain(self) -> Resource {
        Resource {
            title: self.title.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            resource_type: ResourceType::from_wire(self.resource_type.as_deref()),
            type_label: self.resource_type,
            duration: self.duration,
        }
    }
}

impl ProgressDto {
    /// `phase_count` stands in for a missing `total_phases`.
    pub fn into_domain(self, phase_count: Option<u32>) -> Progress {
        let total = match self.total_phases {
            Some(total) => count(Some(total)),
            None => phase_count.unwrap_or(0),
        };
        let completed = count(self.completed_phases);
        if completed > total {
            warn!(completed, total, "completed phases exceed total, clamping");
        }

        let mut progress = Progress::new(completed, total).with_streak(count(self.streak_days));
        if let Some(raw) = self.last_activity_date.filter(|d| !d.trim().is_empty()) {
            match parse_activity_date(&raw) {
                Some(at) => progress = progress.with_last_activity(at),
                None => warn!(date = %raw, "unreadable last activity date, ignoring"),
            }
        }
        progress
    }
}

impl CareerDecisionDto {
    pub fn into_domain(self) -> CareerDecision {
        CareerDecision {
            career: self.career.unwrap_or_default(),
            confidence: percent(self.confidence),
            skill_match_percentage: percent(self.skill_match_percentage),
            market_readiness: percent(self.market_readiness),
            industry_demand: self.industry_demand,
            reasoning: self.reasoning.unwrap_or_default(),
            key_strengths: self.key_strengths.unwrap_or_default(),
            skill_gaps: self.skill_gaps.unwrap_or_default(),
            time_to_job_ready: self.time_to_job_ready,
            alternatives: self
                .alternatives
                .unwrap_or_default()
                .into_iter()
                .map(|alt| AlternativeCareer {
                    career: alt.career.unwrap_or_default(),
                    reason: alt.reason.unwrap_or_default(),
                    match_score: percent(alt.match_score),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;
