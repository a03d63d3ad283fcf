//! Teacher assignment.
//!
//! # Resolution order
//! 1. Structural subjects (breaks, assembly) take no teacher.
//! 2. A facilitator of the same department teaching the subject and
//!    available that day.
//! 3. Upper Basic and Junior High only: a facilitator from either of those
//!    two departments with the same subject and availability.
//! 4. The unresolved sentinel: [`STAFF_POOL`] for rotated periods,
//!    [`NO_TEACHER`] for rule-pinned activities.

use crate::models::{
    Department, FacilitatorConfig, Subject, INTERVENTION_SPECIALIST, NO_TEACHER, STAFF_POOL,
};

/// Resolves teachers against a facilitator list.
#[derive(Debug, Clone, Copy)]
pub struct TeacherAssigner<'a> {
    facilitators: &'a [FacilitatorConfig],
}

impl<'a> TeacherAssigner<'a> {
    pub fn new(facilitators: &'a [FacilitatorConfig]) -> Self {
        Self { facilitators }
    }

    /// Finds the facilitator for a subject on a day, borrowing across
    /// Upper Basic and Junior High when needed.
    pub fn resolve(&self, dept: Department, subject_id: &str, day: &str) -> Option<&'a FacilitatorConfig> {
        let own = self
            .facilitators
            .iter()
            .find(|f| f.department == dept && f.can_teach(subject_id, day));
        if own.is_some() || !dept.shares_senior_staff() {
            return own;
        }
        self.facilitators
            .iter()
            .find(|f| f.department.shares_senior_staff() && f.can_teach(subject_id, day))
    }

    /// Teacher for a rotated or structural cell.
    pub fn assign(&self, dept: Department, subject: &Subject, day: &str) -> String {
        self.assign_or(dept, subject, day, STAFF_POOL)
    }

    /// Teacher for a rule-pinned cell. Unstaffed pinned activities are
    /// whole-school events and take no teacher.
    pub fn assign_pinned(&self, dept: Department, subject: &Subject, day: &str) -> String {
        self.assign_or(dept, subject, day, NO_TEACHER)
    }

    /// Teacher for every support-lane cell of a department: its first
    /// facilitator regardless of subject.
    pub fn intervention_teacher(&self, dept: Department) -> String {
        self.facilitators
            .iter()
            .find(|f| f.department == dept)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| INTERVENTION_SPECIALIST.to_string())
    }

    fn assign_or(&self, dept: Department, subject: &Subject, day: &str, unresolved: &str) -> String {
        if subject.is_structural() {
            return NO_TEACHER.to_string();
        }
        match self.resolve(dept, &subject.id, day) {
            Some(f) => f.name.clone(),
            None => {
                tracing::trace!(dept = %dept, subject = %subject.id, day, unresolved, "no facilitator available");
                unresolved.to_string()
            }
        }
    }
}
