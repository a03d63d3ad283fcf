//! Facilitator (teacher) model.
//!
//! A facilitator teaches a single subject within one department, on a set of
//! days, with a weekly period quota per class.

use serde::{Deserialize, Serialize};

use super::Department;

/// Periods per week assumed for a subject with no configured facilitator.
pub const DEFAULT_PERIODS_PER_WEEK: u32 = 4;

/// A teacher's scheduling constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitatorConfig {
    /// Unique identifier.
    pub id: String,
    /// Name; used as the teacher id on timetable entries.
    pub name: String,
    /// Owning department.
    pub department: Department,
    /// The subject this facilitator teaches.
    pub subject_id: String,
    /// Day names the facilitator is available.
    pub available_days: Vec<String>,
    /// Intended appearances of the subject per class per week.
    pub periods_per_week: u32,
}

impl FacilitatorConfig {
    /// Creates a facilitator with no available days and the default quota.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: Department,
        subject_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department,
            subject_id: subject_id.into(),
            available_days: Vec::new(),
            periods_per_week: DEFAULT_PERIODS_PER_WEEK,
        }
    }

    /// Sets the available days.
    pub fn with_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available_days = days.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the weekly quota.
    pub fn with_periods_per_week(mut self, periods: u32) -> Self {
        self.periods_per_week = periods;
        self
    }

    pub fn is_available_on(&self, day: &str) -> bool {
        self.available_days.iter().any(|d| d == day)
    }

    /// Whether this facilitator can teach `subject_id` on `day`.
    pub fn can_teach(&self, subject_id: &str, day: &str) -> bool {
        self.subject_id == subject_id && self.is_available_on(day)
    }
}
