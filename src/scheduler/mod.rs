//! Timetable generation, conflict detection, and KPI evaluation.
//!
//! # Algorithm
//!
//! `TimetableGenerator` fills every (class, day, slot) cell with a greedy,
//! demand-aware rotation. Selection is seeded by the cell's own strings, so
//! output is a pure function of the request. Classes share no state during
//! generation.
//!
//! `detect_conflicts` groups the generated entries by teacher, day, and
//! start time and reports every group with more than one class.
//!
//! # KPI
//!
//! `TimetableKpi` summarizes staffing gaps, conflicts, and teacher load.

mod conflicts;
mod demand;
mod generator;
mod kpi;
mod seed;
mod teacher;

pub use conflicts::detect_conflicts;
pub use demand::DemandTracker;
pub use generator::{generate_all_timetables, GenerationRequest, TimetableGenerator};
pub use kpi::TimetableKpi;
pub use seed::{char_code_sum, seeded_index};
pub use teacher::TeacherAssigner;
