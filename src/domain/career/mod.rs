//! Career module - the recommended career and how it is summarized.

mod decision;
pub mod demand;
mod summary;

pub use decision::{AlternativeCareer, CareerDecision};
pub use demand::{demand_text, IndustryDemand};
pub use summary::{summarize, CareerSummary};
