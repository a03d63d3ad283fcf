//! Timetable quality metrics (KPIs).
//!
//! Summarizes a generated timetable and its conflicts into the figures an
//! administrator checks before publishing.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Instructional periods | Standard entries in non-break, non-assembly slots |
//! | Staff-pool periods | Instructional periods with no facilitator |
//! | Staff-pool rate | Staff-pool periods / instructional periods |
//! | Conflicts | Teacher double-bookings |
//! | High-severity conflicts | Double-bookings involving Basic 4-9 |
//! | Teacher load | Entries per real teacher, both lanes |

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Conflict, Severity, Timetable, STAFF_POOL};

/// Timetable performance indicators.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableKpi {
    pub instructional_periods: usize,
    pub staff_pool_periods: usize,
    /// Fraction of instructional periods awaiting staff (0.0..1.0).
    pub staff_pool_rate: f64,
    pub conflict_count: usize,
    pub high_severity_conflicts: usize,
    /// Weekly entries per real teacher.
    pub teacher_load: HashMap<String, usize>,
    /// Instructional periods per class key, then subject id.
    pub subject_counts: HashMap<String, HashMap<String, usize>>,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable and its detected conflicts.
    pub fn calculate(timetable: &Timetable, conflicts: &[Conflict]) -> Self {
        let mut instructional = 0;
        let mut staff_pool = 0;
        let mut teacher_load: HashMap<String, usize> = HashMap::new();
        let mut subject_counts: HashMap<String, HashMap<String, usize>> = HashMap::new();

        for e in timetable.entries() {
            if e.has_assigned_teacher() {
                *teacher_load.entry(e.teacher_id.clone()).or_insert(0) += 1;
            }
            if e.is_intervention || e.slot.is_structural() {
                continue;
            }
            instructional += 1;
            if e.teacher_id == STAFF_POOL {
                staff_pool += 1;
            }
            *subject_counts
                .entry(e.class_key.to_string())
                .or_default()
                .entry(e.subject.id.clone())
                .or_insert(0) += 1;
        }

        let staff_pool_rate = if instructional == 0 {
            0.0
        } else {
            staff_pool as f64 / instructional as f64
        };

        Self {
            instructional_periods: instructional,
            staff_pool_periods: staff_pool,
            staff_pool_rate,
            conflict_count: conflicts.len(),
            high_severity_conflicts: conflicts
                .iter()
                .filter(|c| c.severity == Severity::High)
                .count(),
            teacher_load,
            subject_counts,
        }
    }

    /// Periods of a subject for a class (0 if never scheduled).
    pub fn periods_of(&self, class_key: &str, subject_id: &str) -> usize {
        self.subject_counts
            .get(class_key)
            .and_then(|subjects| subjects.get(subject_id))
            .copied()
            .unwrap_or(0)
    }

    /// Whether the timetable is publishable under the given limits.
    pub fn meets_thresholds(&self, max_conflicts: usize, max_staff_pool_rate: f64) -> bool {
        self.conflict_count <= max_conflicts && self.staff_pool_rate <= max_staff_pool_rate
    }
}
