//! MutationGate - at most one in-flight request per mutation kind.
//!
//! Acquiring returns a guard; the kind is released when the guard drops, so
//! the flag clears on success, failure and early return alike.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::dashboard::{InFlight, MutationKind};

#[derive(Debug, Clone, Default)]
pub struct MutationGate {
    held: Arc<Mutex<BTreeSet<MutationKind>>>,
}

impl MutationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `kind`, or returns `None` if a request of that kind is running.
    pub fn try_acquire(&self, kind: MutationKind) -> Option<MutationGuard> {
        let mut held = self.held.lock().unwrap_or_else(PoisonError::into_inner);
        if !held.insert(kind) {
            return None;
        }
        Some(MutationGuard {
            held: Arc::clone(&self.held),
            kind,
        })
    }

    pub fn in_flight(&self) -> InFlight {
        let held = self.held.lock().unwrap_or_else(PoisonError::into_inner);
        InFlight::new(held.iter().copied())
    }
}

/// Releases its mutation kind on drop.
#[derive(Debug)]
pub struct MutationGuard {
    held: Arc<Mutex<BTreeSet<MutationKind>>>,
    kind: MutationKind,
}

impl MutationGuard {
    pub fn kind(&self) -> MutationKind {
        self.kind
    }
}

impl Drop for MutationGuard {
    fn drop(&mut self) {
        self.held
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_of_same_kind_is_refused() {
        let gate = MutationGate::new();
        let guard = gate.try_acquire(MutationKind::PhaseUpdate);
        assert!(guard.is_some());
        assert!(gate.try_acquire(MutationKind::PhaseUpdate).is_none());
    }

    #[test]
    fn kinds_are_independent() {
        let gate = MutationGate::new();
        let _update = gate.try_acquire(MutationKind::PhaseUpdate).unwrap();
        let _reset = gate.try_acquire(MutationKind::Reset).unwrap();

        let flags = gate.in_flight();
        assert!(flags.updating());
        assert!(flags.loading());
    }

    #[test]
    fn drop_releases_kind() {
        let gate = MutationGate::new();
        {
            let guard = gate.try_acquire(MutationKind::Adapt).unwrap();
            assert_eq!(guard.kind(), MutationKind::Adapt);
            assert!(gate.in_flight().updating());
        }
        assert!(!gate.in_flight().updating());
        assert!(gate.try_acquire(MutationKind::Adapt).is_some());
    }

    #[test]
    fn clones_share_state() {
        let gate = MutationGate::new();
        let other = gate.clone();
        let _guard = gate.try_acquire(MutationKind::Generate).unwrap();
        assert!(other.try_acquire(MutationKind::Generate).is_none());
    }
}
