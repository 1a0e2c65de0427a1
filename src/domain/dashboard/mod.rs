//! Dashboard module - explicit UI state and the view model derived from it.
//!
//! # Module Organization
//!
//! - `affordances` - Expanded cards, display mode, in-flight mutation kinds
//! - `state` - `DashboardState` and the changes that produce the next one
//! - `view` - `DashboardView`, everything a renderer needs

mod affordances;
mod state;
mod view;

pub use affordances::{DisplayMode, InFlight, MutationKind, PhaseExpansion};
pub use state::{DashboardIntent, DashboardState, StateChange};
pub use view::{
    ClassicEntry, ClassicView, DashboardView, MilestoneCardView, ProgressTrackerView,
    ResourceView, TimelineEntry, TimelineView, ViewContext,
};
