//! Per-class weekly demand tracking.

use std::collections::HashMap;

use crate::models::{Department, FacilitatorConfig, Subject, DEFAULT_PERIODS_PER_WEEK};

/// Remaining weekly periods per subject for one class.
///
/// Seeded from the first facilitator configured for the department and
/// subject, or [`DEFAULT_PERIODS_PER_WEEK`] when there is none. Built fresh
/// for each class so classes never share counters.
#[derive(Debug, Clone, Default)]
pub struct DemandTracker {
    remaining: HashMap<String, u32>,
}

impl DemandTracker {
    /// Builds the tracker for a department's subject catalog.
    pub fn new(dept: Department, subjects: &[Subject], facilitators: &[FacilitatorConfig]) -> Self {
        let remaining = subjects
            .iter()
            .map(|s| {
                let quota = facilitators
                    .iter()
                    .find(|f| f.department == dept && f.subject_id == s.id)
                    .map(|f| f.periods_per_week)
                    .unwrap_or_else(|| {
                        tracing::trace!(dept = %dept, subject = %s.id, "no facilitator quota, using default");
                        DEFAULT_PERIODS_PER_WEEK
                    });
                (s.id.clone(), quota)
            })
            .collect();
        Self { remaining }
    }

    /// Periods still owed for a subject (0 if unknown).
    pub fn remaining(&self, subject_id: &str) -> u32 {
        self.remaining.get(subject_id).copied().unwrap_or(0)
    }

    pub fn has_remaining(&self, subject_id: &str) -> bool {
        self.remaining(subject_id) > 0
    }

    /// Records one period of a subject. Never goes below zero.
    pub fn consume(&mut self, subject_id: &str) {
        if let Some(left) = self.remaining.get_mut(subject_id) {
            *left = left.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_seeding() {
        let subjects = vec![Subject::core("mat", "Mathematics"), Subject::core("eng", "English")];
        let facilitators = vec![
            FacilitatorConfig::new("f1", "A", Department::JuniorHigh, "mat").with_periods_per_week(6),
            FacilitatorConfig::new("f2", "B", Department::JuniorHigh, "mat").with_periods_per_week(2),
            // Other department: ignored.
            FacilitatorConfig::new("f3", "C", Department::UpperBasic, "eng").with_periods_per_week(1),
        ];
        let tracker = DemandTracker::new(Department::JuniorHigh, &subjects, &facilitators);

        assert_eq!(tracker.remaining("mat"), 6);
        assert_eq!(tracker.remaining("eng"), DEFAULT_PERIODS_PER_WEEK);
        assert_eq!(tracker.remaining("sci"), 0);
    }

    #[test]
    fn test_consume_saturates() {
        let subjects = vec![Subject::core("mat", "Mathematics")];
        let facilitators =
            vec![FacilitatorConfig::new("f1", "A", Department::Creche, "mat").with_periods_per_week(1)];
        let mut tracker = DemandTracker::new(Department::Creche, &subjects, &facilitators);

        assert!(tracker.has_remaining("mat"));
        tracker.consume("mat");
        assert!(!tracker.has_remaining("mat"));
        tracker.consume("mat");
        assert_eq!(tracker.remaining("mat"), 0);
        tracker.consume("unknown");
    }
}
