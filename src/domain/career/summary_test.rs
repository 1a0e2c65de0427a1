use crate::domain::career::{summarize, AlternativeCareer, CareerDecision, IndustryDemand};
use crate::domain::foundation::Percentage;

fn alternative(career: &str, score: u8) -> AlternativeCareer {
    AlternativeCareer {
        career: career.to_string(),
        reason: format!("{career} reuses your strengths"),
        match_score: Percentage::new(score),
    }
}

#[test]
fn absent_demand_renders_emerging_badge() {
    let decision = CareerDecision::new("Backend Developer");
    let summary = summarize(&decision);

    assert_eq!(summary.demand, IndustryDemand::Emerging);
    assert_eq!(summary.demand_label, "Emerging");
    // The textual fallback still reads "stable".
    assert_eq!(decision.demand_text(), "stable");
}

#[test]
fn explicit_stable_and_absent_do_not_collapse() {
    let stable = CareerDecision {
        industry_demand: Some("stable".to_string()),
        ..CareerDecision::new("QA Engineer")
    };
    let absent = CareerDecision::new("QA Engineer");

    assert_ne!(summarize(&stable).demand_label, summarize(&absent).demand_label);
}

#[test]
fn missing_percentages_default_to_zero() {
    let summary = summarize(&CareerDecision::new("Data Analyst"));
    assert_eq!(summary.confidence, Percentage::ZERO);
    assert_eq!(summary.skill_match, Percentage::ZERO);
    assert_eq!(summary.market_readiness, Percentage::ZERO);
}

#[test]
fn alternatives_keep_api_order() {
    let decision = CareerDecision {
        alternatives: vec![
            alternative("Cloud Architect", 40),
            alternative("DevOps Engineer", 90),
            alternative("SRE", 65),
        ],
        ..CareerDecision::new("Backend Developer")
    };

    let names: Vec<_> = summarize(&decision)
        .alternatives
        .into_iter()
        .map(|a| a.career)
        .collect();
    assert_eq!(names, ["Cloud Architect", "DevOps Engineer", "SRE"]);
}

#[test]
fn insights_flag_follows_strengths_and_gaps() {
    let bare = summarize(&CareerDecision::new("Designer"));
    assert!(!bare.has_insights());

    let with_gaps = summarize(&CareerDecision {
        skill_gaps: vec!["Figma".to_string()],
        ..CareerDecision::new("Designer")
    });
    assert!(with_gaps.has_insights());
}

#[test]
fn summary_serializes_camel_case() {
    let json = serde_json::to_string(&summarize(&CareerDecision::new("ML Engineer"))).unwrap();
    assert!(json.contains("demandLabel"));
    assert!(json.contains("\"Emerging\""));
}

#[test]
fn summary_carries_demand_text_beside_badge() {
    let empty = summarize(&CareerDecision {
        industry_demand: Some(String::new()),
        ..CareerDecision::new("Backend Developer")
    });
    assert_eq!(empty.demand_label, "Emerging");
    assert_eq!(empty.demand_text, "stable");

    let trending = summarize(&CareerDecision {
        industry_demand: Some("trending".to_string()),
        ..CareerDecision::new("Backend Developer")
    });
    assert_eq!(trending.demand_text, "trending");

    let json = serde_json::to_string(&empty).unwrap();
    assert!(json.contains("\"demandText\":\"stable\""));
}
