//! Local UI affordance state: expanded phase cards, display mode, and the
//! kinds of mutating requests that can be in flight.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Which phase cards are expanded. Immutable; `toggle` returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseExpansion {
    expanded: BTreeSet<usize>,
}

impl PhaseExpansion {
    /// Only the first phase starts expanded.
    pub fn initial() -> Self {
        Self {
            expanded: BTreeSet::from([0]),
        }
    }

    pub fn collapsed() -> Self {
        Self {
            expanded: BTreeSet::new(),
        }
    }

    pub fn is_expanded(&self, phase_index: usize) -> bool {
        self.expanded.contains(&phase_index)
    }

    pub fn toggle(&self, phase_index: usize) -> Self {
        let mut expanded = self.expanded.clone();
        if !expanded.remove(&phase_index) {
            expanded.insert(phase_index);
        }
        Self { expanded }
    }

    pub fn expanded(&self) -> impl Iterator<Item = usize> + '_ {
        self.expanded.iter().copied()
    }
}

impl Default for PhaseExpansion {
    fn default() -> Self {
        Self::initial()
    }
}

/// How the roadmap is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Timeline,
    Classic,
}

impl DisplayMode {
    pub fn toggled(&self) -> Self {
        match self {
            DisplayMode::Timeline => DisplayMode::Classic,
            DisplayMode::Classic => DisplayMode::Timeline,
        }
    }

    /// Timeline needs a learning roadmap; without one the classic view
    /// (which also hosts the generate prompt) is shown.
    pub fn effective(&self, has_learning_roadmap: bool) -> Self {
        match self {
            DisplayMode::Timeline if has_learning_roadmap => DisplayMode::Timeline,
            _ => DisplayMode::Classic,
        }
    }

    /// Caption of the button that switches away from this mode.
    pub fn switch_caption(&self) -> &'static str {
        match self {
            DisplayMode::Timeline => "Show Classic View",
            DisplayMode::Classic => "Show Timeline View",
        }
    }
}

/// Kind of mutating request, used to key the mutation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    PhaseUpdate,
    Adapt,
    Generate,
    Reset,
}

impl MutationKind {
    /// Phase toggles and adapt share the "updating" indicator.
    pub fn is_progress_write(&self) -> bool {
        matches!(self, MutationKind::PhaseUpdate | MutationKind::Adapt)
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MutationKind::PhaseUpdate => "phase update",
            MutationKind::Adapt => "adapt",
            MutationKind::Generate => "generate",
            MutationKind::Reset => "reset",
        };
        f.write_str(s)
    }
}

/// Snapshot of which mutation kinds are in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InFlight {
    kinds: BTreeSet<MutationKind>,
}

impl InFlight {
    pub fn new(kinds: impl IntoIterator<Item = MutationKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    pub fn contains(&self, kind: MutationKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// A phase toggle or adapt request is running.
    pub fn updating(&self) -> bool {
        self.kinds.iter().any(MutationKind::is_progress_write)
    }

    /// A generate or reset request is running.
    pub fn loading(&self) -> bool {
        self.kinds.iter().any(|k| !k.is_progress_write())
    }
}
