//! Input validation for timetable generation.
//!
//! Generation accepts any configuration and degrades gracefully, so these
//! checks are advisory: they surface the inconsistencies that would
//! otherwise show up as fallbacks in the generated timetable. Detects:
//! - Duplicate IDs
//! - Facilitators and rules referencing unknown subjects
//! - Rules referencing unknown slot labels
//! - Unknown day names
//! - Slots with more than one kind flag
//! - Zero weekly quotas

use std::collections::HashSet;

use crate::models::{Department, RuleTarget};
use crate::scheduler::GenerationRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A facilitator or rule references a subject that doesn't exist.
    InvalidSubjectReference,
    /// A rule references a slot label that doesn't exist.
    InvalidSlotReference,
    /// A rule or availability list names a day outside the week.
    UnknownDay,
    /// A slot sets more than one of break, assembly, support.
    AmbiguousSlot,
    /// A facilitator has a zero weekly quota.
    ZeroQuota,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates a generation request.
///
/// Checks:
/// 1. No duplicate facilitator IDs
/// 2. No duplicate rule IDs
/// 3. No duplicate subject IDs within a department catalog
/// 4. Facilitator subjects exist in their department's catalog
/// 5. Rule subjects exist in the customary catalog or every targeted
///    department's catalog
/// 6. Rule slot labels exist among the standard slots
/// 7. Rule days and facilitator availability use configured day names
/// 8. Slots set at most one kind flag
/// 9. Facilitator quotas are positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &GenerationRequest) -> ValidationResult {
    let mut errors = Vec::new();
    let days: HashSet<&str> = request.days.iter().map(String::as_str).collect();

    // Facilitators
    let mut facilitator_ids = HashSet::new();
    for f in &request.facilitators {
        if !facilitator_ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate facilitator ID: {}", f.id),
            ));
        }
        if !request
            .subjects_for(f.department)
            .iter()
            .any(|s| s.id == f.subject_id)
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSubjectReference,
                format!(
                    "Facilitator '{}' teaches '{}', which is not in the {} catalog",
                    f.id, f.subject_id, f.department
                ),
            ));
        }
        for day in &f.available_days {
            if !days.contains(day.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDay,
                    format!("Facilitator '{}' is available on unknown day '{day}'", f.id),
                ));
            }
        }
        if f.periods_per_week == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroQuota,
                format!("Facilitator '{}' has no periods per week", f.id),
            ));
        }
    }

    // Subject catalogs
    for dept in Department::ALL {
        let mut ids = HashSet::new();
        for s in request.subjects_for(dept) {
            if !ids.insert(s.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate subject ID in {dept}: {}", s.id),
                ));
            }
        }
    }

    // Rules
    let slot_labels: HashSet<&str> = request.slots.iter().map(|s| s.label.as_str()).collect();
    let mut rule_ids = HashSet::new();
    for rule in &request.rules {
        if !rule_ids.insert(rule.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate rule ID: {}", rule.id),
            ));
        }
        if !slot_labels.contains(rule.slot_label.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSlotReference,
                format!("Rule '{}' references unknown slot '{}'", rule.id, rule.slot_label),
            ));
        }
        if !days.contains(rule.day.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDay,
                format!("Rule '{}' references unknown day '{}'", rule.id, rule.day),
            ));
        }

        let customary = request
            .customary_activities
            .iter()
            .any(|s| s.id == rule.subject_id);
        let targets: Vec<Department> = match rule.target {
            RuleTarget::All => Department::ALL.to_vec(),
            RuleTarget::Department(d) => vec![d],
        };
        let in_catalogs = targets.iter().all(|d| {
            request
                .subjects_for(*d)
                .iter()
                .any(|s| s.id == rule.subject_id)
        });
        if !customary && !in_catalogs {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSubjectReference,
                format!("Rule '{}' pins unknown subject '{}'", rule.id, rule.subject_id),
            ));
        }
    }

    // Slots
    for slot in request.slots.iter().chain(&request.support_slots) {
        if slot.flag_count() > 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::AmbiguousSlot,
                format!("Slot '{}' sets more than one kind flag", slot.label),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
