//! Teacher double-booking detection.
//!
//! Entries from both lanes are grouped by (teacher, day, start time). Any
//! group with more than one entry is a conflict. Entries without a real
//! teacher ([`NO_TEACHER`], [`STAFF_POOL`]) cannot clash and are skipped.
//!
//! Severity is `High` when any involved class key names an Upper Basic or
//! Junior High grade (Basic 4 to Basic 9), matched by substring.

use std::collections::HashMap;

use crate::models::{Conflict, Severity, TimetableEntry, NO_TEACHER, STAFF_POOL};

const SENIOR_GRADE_MARKERS: [&str; 6] = [
    "Basic 7", "Basic 8", "Basic 9", "Basic 4", "Basic 5", "Basic 6",
];

/// Detects every teacher double-booking.
///
/// Conflicts are returned in the order their group was first seen.
pub fn detect_conflicts(entries: &[TimetableEntry]) -> Vec<Conflict> {
    let mut index: HashMap<(&str, &str, &str), usize> = HashMap::new();
    let mut groups: Vec<Vec<&TimetableEntry>> = Vec::new();

    for entry in entries {
        if entry.teacher_id == NO_TEACHER || entry.teacher_id == STAFF_POOL {
            continue;
        }
        let key = (
            entry.teacher_id.as_str(),
            entry.day.as_str(),
            entry.slot.start_time.as_str(),
        );
        let idx = *index.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[idx].push(entry);
    }

    let conflicts: Vec<Conflict> = groups
        .into_iter()
        .filter(|g| g.len() > 1)
        .map(|g| {
            let first = g[0];
            Conflict {
                teacher_id: first.teacher_id.clone(),
                day: first.day.clone(),
                start_time: first.slot.start_time.clone(),
                severity: severity_of(&g),
                class_keys: g.iter().map(|e| e.class_key.clone()).collect(),
            }
        })
        .collect();

    tracing::debug!(
        entries = entries.len(),
        groups = index.len(),
        conflicts = conflicts.len(),
        "conflict detection complete"
    );
    conflicts
}

fn severity_of(group: &[&TimetableEntry]) -> Severity {
    let senior = group.iter().any(|e| {
        SENIOR_GRADE_MARKERS
            .iter()
            .any(|m| e.class_key.as_str().contains(m))
    });
    if senior {
        Severity::High
    } else {
        Severity::Normal
    }
}
