//! Display fields for the career match card and insights panel.

use serde::Serialize;

use super::{AlternativeCareer, CareerDecision, IndustryDemand};
use crate::domain::foundation::Percentage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSummary {
    pub career: String,
    pub confidence: Percentage,
    pub skill_match: Percentage,
    pub market_readiness: Percentage,
    pub demand: IndustryDemand,
    pub demand_label: &'static str,
    /// Insights panel stat; "stable" when the server sent none.
    pub demand_text: String,
    pub reasoning: String,
    pub key_strengths: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub time_to_job_ready: Option<String>,
    pub alternatives: Vec<AlternativeCareer>,
}

/// Projects a decision into display fields without reordering anything.
pub fn summarize(decision: &CareerDecision) -> CareerSummary {
    let demand = decision.demand();
    CareerSummary {
        career: decision.career.clone(),
        confidence: decision.confidence,
        skill_match: decision.skill_match_percentage,
        market_readiness: decision.market_readiness,
        demand,
        demand_label: demand.label(),
        demand_text: decision.demand_text().to_string(),
        reasoning: decision.reasoning.clone(),
        key_strengths: decision.key_strengths.clone(),
        skill_gaps: decision.skill_gaps.clone(),
        time_to_job_ready: decision.time_to_job_ready.clone(),
        alternatives: decision.alternatives.clone(),
    }
}

impl CareerSummary {
    pub fn has_insights(&self) -> bool {
        !self.key_strengths.is_empty() || !self.skill_gaps.is_empty()
    }
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;
