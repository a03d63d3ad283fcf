//! Time slot model.
//!
//! Slots are configured once per week cycle: the same ordered list is used
//! for every day. Times are opaque `HH:MM` labels; no calendar arithmetic
//! is performed on them.

use serde::{Deserialize, Serialize};

/// A structural unit of the school day.
///
/// At most one of `is_break`, `is_assembly`, `is_support` is expected to be
/// set. When several are set, [`TimeSlot::kind`] resolves them with assembly
/// taking precedence over break, and break over support.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Start time label (e.g. `"08:30"`).
    pub start_time: String,
    /// End time label.
    pub end_time: String,
    /// Slot label, matched by scheduling rules (e.g. `"Period 1"`).
    pub label: String,
    #[serde(default)]
    pub is_break: bool,
    #[serde(default)]
    pub is_assembly: bool,
    /// Early-morning or after-school support period.
    #[serde(default)]
    pub is_support: bool,
}

/// Resolved slot classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Regular teaching period.
    Instruction,
    Break,
    Assembly,
    Support,
}

impl TimeSlot {
    /// Creates an instructional period.
    pub fn new(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            label: label.into(),
            is_break: false,
            is_assembly: false,
            is_support: false,
        }
    }

    /// Creates a break slot.
    pub fn break_slot(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            is_break: true,
            ..Self::new(start_time, end_time, label)
        }
    }

    /// Creates an assembly slot.
    pub fn assembly(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            is_assembly: true,
            ..Self::new(start_time, end_time, label)
        }
    }

    /// Creates a support-lane slot.
    pub fn support(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            is_support: true,
            ..Self::new(start_time, end_time, label)
        }
    }

    pub fn kind(&self) -> SlotKind {
        if self.is_assembly {
            SlotKind::Assembly
        } else if self.is_break {
            SlotKind::Break
        } else if self.is_support {
            SlotKind::Support
        } else {
            SlotKind::Instruction
        }
    }

    /// Whether the slot is a break or an assembly.
    #[inline]
    pub fn is_structural(&self) -> bool {
        self.is_break || self.is_assembly
    }

    /// Number of kind flags set. Anything above one is a configuration error.
    pub fn flag_count(&self) -> usize {
        [self.is_break, self.is_assembly, self.is_support]
            .into_iter()
            .filter(|f| *f)
            .count()
    }
}
