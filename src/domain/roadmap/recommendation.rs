//! Selection of the recommended phase for the adaptive recommendations panel.
//!
//! Re-planning itself happens on the server; this module only picks which of
//! the already-computed phases to surface.

use serde::Serialize;

use super::Phase;

/// First phase in sequence order that the server has not marked completed.
pub fn next_phase(phases: &[Phase]) -> Option<&Phase> {
    phases.iter().find(|phase| !phase.is_completed())
}

/// The phase immediately after `current`, located by identity.
///
/// Returns `None` when `current` is the last phase or is not an element of
/// `phases`.
pub fn phase_after<'a>(phases: &'a [Phase], current: &Phase) -> Option<&'a Phase> {
    let position = phases.iter().position(|p| std::ptr::eq(p, current))?;
    phases.get(position + 1)
}

/// Owned recommendation pair handed to presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub focus: Option<Phase>,
    pub then: Option<Phase>,
}

impl Recommendation {
    pub fn for_phases(phases: &[Phase]) -> Self {
        let focus = next_phase(phases);
        let then = focus.and_then(|current| phase_after(phases, current));
        Self {
            focus: focus.cloned(),
            then: then.cloned(),
        }
    }

    /// True once every phase is completed.
    pub fn is_finished(&self) -> bool {
        self.focus.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roadmap::PhaseRecordStatus;

    fn phases(done: &[bool]) -> Vec<Phase> {
        done.iter()
            .enumerate()
            .map(|(i, d)| {
                let status = if *d {
                    PhaseRecordStatus::Completed
                } else {
                    PhaseRecordStatus::Pending
                };
                Phase::new(i, format!("Month {}", i + 1)).with_status(status)
            })
            .collect()
    }

    #[test]
    fn next_phase_skips_completed_prefix() {
        let list = phases(&[true, true, false, false]);
        assert_eq!(next_phase(&list).map(|p| p.index), Some(2));
    }

    #[test]
    fn next_phase_uses_record_status_not_position() {
        let list = phases(&[true, false, true, false]);
        assert_eq!(next_phase(&list).map(|p| p.index), Some(1));
    }

    #[test]
    fn next_phase_none_when_all_completed() {
        assert!(next_phase(&phases(&[true, true])).is_none());
        assert!(next_phase(&[]).is_none());
    }

    #[test]
    fn phase_after_returns_following_element() {
        let list = phases(&[false, false, false]);
        assert_eq!(phase_after(&list, &list[0]).map(|p| p.index), Some(1));
        assert!(phase_after(&list, &list[2]).is_none());
    }

    #[test]
    fn phase_after_ignores_equal_phase_from_another_list() {
        let list = phases(&[false, false]);
        let copy = list[0].clone();
        assert!(phase_after(&list, &copy).is_none());
    }

    #[test]
    fn recommendation_pairs_focus_and_follower() {
        let rec = Recommendation::for_phases(&phases(&[true, false, false]));
        assert_eq!(rec.focus.as_ref().map(|p| p.index), Some(1));
        assert_eq!(rec.then.as_ref().map(|p| p.index), Some(2));
        assert!(!rec.is_finished());
    }

    #[test]
    fn recommendation_for_last_open_phase_has_no_follower() {
        let rec = Recommendation::for_phases(&phases(&[true, false]));
        assert_eq!(rec.focus.as_ref().map(|p| p.index), Some(1));
        assert!(rec.then.is_none());
    }

    #[test]
    fn recommendation_empty_when_finished() {
        let rec = Recommendation::for_phases(&phases(&[true, true]));
        assert!(rec.is_finished());
        assert!(rec.then.is_none());
    }
}
