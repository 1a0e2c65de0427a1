//! CareerDecision - the server's recommended career and its rationale.

use serde::{Deserialize, Serialize};

use super::demand::{demand_text, IndustryDemand};
use crate::domain::foundation::Percentage;

/// An alternative career as ranked by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeCareer {
    pub career: String,
    pub reason: String,
    pub match_score: Percentage,
}

/// Fully populated decision record. Missing wire fields were already
/// defaulted at ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CareerDecision {
    pub career: String,
    pub confidence: Percentage,
    pub skill_match_percentage: Percentage,
    pub market_readiness: Percentage,
    /// Kept raw: the badge and the textual default disagree on `None`.
    pub industry_demand: Option<String>,
    pub reasoning: String,
    pub key_strengths: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub time_to_job_ready: Option<String>,
    /// In the order the API returned them.
    pub alternatives: Vec<AlternativeCareer>,
}

impl CareerDecision {
    pub fn new(career: impl Into<String>) -> Self {
        Self {
            career: career.into(),
            ..Default::default()
        }
    }

    pub fn demand(&self) -> IndustryDemand {
        IndustryDemand::from_raw(self.industry_demand.as_deref())
    }

    pub fn demand_text(&self) -> &str {
        demand_text(self.industry_demand.as_deref())
    }
}
