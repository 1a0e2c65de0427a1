//! Industry demand badge.

use serde::Serialize;
use std::fmt;

/// Textual demand used wherever a canonical value is needed and the server
/// sent none.
pub const DEFAULT_DEMAND_TEXT: &str = "stable";

/// Styling bucket for the demand badge.
///
/// Exactly the literals "trending" and "stable" are recognized. Every other
/// value lands in `Emerging`, and so does a missing value, even though the
/// textual fallback for a missing value is "stable" (see [`demand_text`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndustryDemand {
    Trending,
    Stable,
    Emerging,
}

impl IndustryDemand {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("trending") => IndustryDemand::Trending,
            Some("stable") => IndustryDemand::Stable,
            _ => IndustryDemand::Emerging,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IndustryDemand::Trending => "High Demand",
            IndustryDemand::Stable => "Stable",
            IndustryDemand::Emerging => "Emerging",
        }
    }
}

impl fmt::Display for IndustryDemand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The raw demand value, or "stable" when absent or empty.
pub fn demand_text(raw: Option<&str>) -> &str {
    raw.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_DEMAND_TEXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_literals_map_to_their_labels() {
        assert_eq!(IndustryDemand::from_raw(Some("trending")).label(), "High Demand");
        assert_eq!(IndustryDemand::from_raw(Some("stable")).label(), "Stable");
    }

    #[test]
    fn absent_demand_is_emerging_not_stable() {
        assert_eq!(IndustryDemand::from_raw(None), IndustryDemand::Emerging);
        assert_eq!(IndustryDemand::from_raw(None).label(), "Emerging");
    }

    #[test]
    fn unrecognized_demand_is_emerging() {
        for raw in ["declining", "Trending", "", "STABLE"] {
            assert_eq!(IndustryDemand::from_raw(Some(raw)), IndustryDemand::Emerging, "{raw}");
        }
    }

    #[test]
    fn textual_default_stays_stable() {
        assert_eq!(demand_text(None), "stable");
        assert_eq!(demand_text(Some("trending")), "trending");
    }

    #[test]
    fn empty_demand_text_falls_back_to_stable() {
        assert_eq!(demand_text(Some("")), "stable");
        assert_eq!(IndustryDemand::from_raw(Some("")), IndustryDemand::Emerging);
    }
}
