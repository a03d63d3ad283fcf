//! School timetable generation for the U-Engine ecosystem.
//!
//! Builds a full week's timetable for every class in an institution from
//! scheduling rules, time slots, facilitator constraints, and per-level
//! stream configuration, then detects teacher double-bookings across the
//! generated grid. Both operations are pure: the same inputs always give
//! the same output, and missing or inconsistent configuration degrades
//! through fallbacks instead of failing.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Department`, `ClassLevel`, `ClassKey`,
//!   `Subject`, `TimeSlot`, `SchedulingRule`, `FacilitatorConfig`,
//!   `TimetableEntry`, `Timetable`, `Conflict`
//! - **`scheduler`**: `TimetableGenerator`, `detect_conflicts`, `TimetableKpi`
//! - **`catalog`**: The stock week, slots, and subject catalogs
//! - **`config`**: JSON-backed configuration bundle
//! - **`validation`**: Advisory configuration checks
//!
//! # Example
//!
//! ```
//! use u_timetable::config::TimetableConfig;
//! use u_timetable::models::INTERVENTION_SPECIALIST;
//! use u_timetable::scheduler::{detect_conflicts, TimetableGenerator};
//!
//! let request = TimetableConfig::default().into_request();
//! let timetable = TimetableGenerator::new().generate(&request);
//! let conflicts = detect_conflicts(timetable.entries());
//! // With no facilitators, every support clinic falls to the same specialist.
//! assert!(!conflicts.is_empty());
//! assert!(conflicts.iter().all(|c| c.teacher_id == INTERVENTION_SPECIALIST));
//! ```

pub mod catalog;
pub mod config;
pub mod models;
pub mod scheduler;
pub mod validation;
