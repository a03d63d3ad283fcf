//! Timetabling domain models.
//!
//! Plain value records describing the institution (departments, levels,
//! streams), its configuration (subjects, slots, rules, facilitators), and
//! the generated output (entries, conflicts).
//!
//! # Domain Mappings
//!
//! | u-timetable | Job-shop analogue |
//! |-------------|-------------------|
//! | ClassKey | Task |
//! | (day, slot) cell | Activity |
//! | Facilitator | Resource |
//! | Timetable | Schedule |
//! | Conflict | Capacity violation |

mod department;
mod facilitator;
mod rule;
mod slot;
mod subject;
mod timetable;

pub use department::{ClassKey, ClassLevel, Department, Stream, StreamConfig};
pub use facilitator::{FacilitatorConfig, DEFAULT_PERIODS_PER_WEEK};
pub use rule::{RuleTarget, SchedulingRule};
pub use slot::{SlotKind, TimeSlot};
pub use subject::{Subject, SubjectCategory};
pub use timetable::{
    conflicts_at, Conflict, Severity, Timetable, TimetableEntry, INTERVENTION_SPECIALIST,
    NO_TEACHER, STAFF_POOL,
};
