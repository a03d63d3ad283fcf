//! Timetable (solution) model.
//!
//! A timetable is the flat list of entries produced by generation: one per
//! (class, day, slot) in the standard grid, plus the support-lane entries.
//! Conflicts are derived from it and never stored.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{ClassKey, Subject, TimeSlot};

/// Teacher id for slots that take no teacher (breaks, assembly, whole-school
/// activities).
pub const NO_TEACHER: &str = "None";

/// Teacher id for slots no facilitator could cover. The institution must
/// resolve these by hand.
pub const STAFF_POOL: &str = "Staff Pool";

/// Teacher id for support-lane slots in a department with no facilitators.
pub const INTERVENTION_SPECIALIST: &str = "Intervention Specialist";

/// One timetable cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    pub day: String,
    pub slot: TimeSlot,
    pub subject: Subject,
    /// Facilitator name, or one of the sentinels [`NO_TEACHER`],
    /// [`STAFF_POOL`], [`INTERVENTION_SPECIALIST`].
    pub teacher_id: String,
    pub class_key: ClassKey,
    /// Whether the entry belongs to the support lane.
    #[serde(default)]
    pub is_intervention: bool,
}

impl TimetableEntry {
    /// Creates a standard-grid entry.
    pub fn new(
        day: impl Into<String>,
        slot: TimeSlot,
        subject: Subject,
        teacher_id: impl Into<String>,
        class_key: ClassKey,
    ) -> Self {
        Self {
            day: day.into(),
            slot,
            subject,
            teacher_id: teacher_id.into(),
            class_key,
            is_intervention: false,
        }
    }

    /// Marks the entry as a support-lane entry.
    pub fn intervention(mut self) -> Self {
        self.is_intervention = true;
        self
    }

    /// Whether a real teacher is assigned (not `None` or `Staff Pool`).
    pub fn has_assigned_teacher(&self) -> bool {
        self.teacher_id != NO_TEACHER && self.teacher_id != STAFF_POOL
    }
}

/// Severity of a teacher double-booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    /// Involves an Upper Basic or Junior High class.
    High,
}

/// A teacher assigned to more than one class at the same day and start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub teacher_id: String,
    pub day: String,
    pub start_time: String,
    /// Every class involved, in entry order. Not deduplicated.
    pub class_keys: Vec<ClassKey>,
    pub severity: Severity,
}

impl Conflict {
    /// Whether the given class is part of this conflict.
    pub fn involves(&self, class_key: &ClassKey) -> bool {
        self.class_keys.contains(class_key)
    }
}

/// Conflicts at a given day and start time (one rendered cell row).
pub fn conflicts_at<'a>(conflicts: &'a [Conflict], day: &str, start_time: &str) -> Vec<&'a Conflict> {
    conflicts
        .iter()
        .filter(|c| c.day == day && c.start_time == start_time)
        .collect()
}

/// A generated timetable.
///
/// Entry order is generation order: per class, standard entries (day-major,
/// slot-minor) followed by that class's support entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timetable {
    entries: Vec<TimetableEntry>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<TimetableEntry>) -> Self {
        Self { entries }
    }

    /// Appends entries.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = TimetableEntry>) {
        self.entries.extend(entries);
    }

    pub fn entries(&self) -> &[TimetableEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TimetableEntry> {
        self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Standard-grid entries for a class.
    pub fn for_class(&self, class_key: &ClassKey) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| !e.is_intervention && &e.class_key == class_key)
            .collect()
    }

    /// Support-lane entries for a class.
    pub fn interventions_for_class(&self, class_key: &ClassKey) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.is_intervention && &e.class_key == class_key)
            .collect()
    }

    /// The standard-grid entry in a given cell.
    pub fn entry_at(&self, class_key: &ClassKey, day: &str, slot_label: &str) -> Option<&TimetableEntry> {
        self.entries.iter().find(|e| {
            !e.is_intervention
                && &e.class_key == class_key
                && e.day == day
                && e.slot.label == slot_label
        })
    }

    /// Every entry taught by a teacher, both lanes.
    pub fn for_teacher(&self, teacher_id: &str) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.teacher_id == teacher_id)
            .collect()
    }

    /// Entries awaiting manual staffing.
    pub fn staff_pool_entries(&self) -> Vec<&TimetableEntry> {
        self.for_teacher(STAFF_POOL)
    }

    /// Distinct class keys in first-appearance order.
    pub fn class_keys(&self) -> Vec<&ClassKey> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| &e.class_key)
            .filter(|k| seen.insert(*k))
            .collect()
    }
}

impl IntoIterator for Timetable {
    type Item = TimetableEntry;
    type IntoIter = std::vec::IntoIter<TimetableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
