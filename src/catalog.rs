//! Built-in catalogs: the stock week, slots, and subjects.
//!
//! These are the defaults a fresh institution starts from. Every generation
//! input can be replaced by configuration; only [`BreakSubjects`] is fixed.

use std::collections::HashMap;

use crate::models::{Department, Subject, SubjectCategory, TimeSlot};

/// School days, in order.
pub const DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// [`DAYS`] as owned strings.
pub fn default_days() -> Vec<String> {
    DAYS.iter().map(|d| d.to_string()).collect()
}

/// Fixed structural subjects used only for break and assembly slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakSubjects {
    pub snack: Subject,
    pub lunch: Subject,
    pub assembly: Subject,
}

impl BreakSubjects {
    pub fn new() -> Self {
        Self {
            snack: Subject::new("snack", "Snack Break", SubjectCategory::Break),
            lunch: Subject::new("lunch", "Lunch Break", SubjectCategory::Break),
            assembly: Subject::activity("assembly", "Assembly"),
        }
    }

    /// The catalog's first entry; the last-resort filler for any slot.
    pub fn first(&self) -> &Subject {
        &self.snack
    }

    /// Break subject for a break slot: snack if the label mentions it,
    /// lunch otherwise.
    pub fn for_break_label(&self, label: &str) -> &Subject {
        if label.contains("Snack") {
            &self.snack
        } else {
            &self.lunch
        }
    }

    /// All three subjects, in catalog order.
    pub fn to_vec(&self) -> Vec<Subject> {
        vec![self.snack.clone(), self.lunch.clone(), self.assembly.clone()]
    }
}

impl Default for BreakSubjects {
    fn default() -> Self {
        Self::new()
    }
}

/// The stock instructional day.
pub fn default_time_slots() -> Vec<TimeSlot> {
    vec![
        TimeSlot::assembly("08:00", "08:30", "Morning Assembly"),
        TimeSlot::new("08:30", "09:10", "Period 1"),
        TimeSlot::new("09:10", "09:50", "Period 2"),
        TimeSlot::break_slot("09:50", "10:20", "Snack Break"),
        TimeSlot::new("10:20", "11:00", "Period 3"),
        TimeSlot::new("11:00", "11:40", "Period 4"),
        TimeSlot::break_slot("11:40", "12:40", "Lunch Break"),
        TimeSlot::new("12:40", "13:20", "Period 5"),
        TimeSlot::new("13:20", "14:00", "Period 6"),
        TimeSlot::new("14:00", "14:40", "Period 7"),
        TimeSlot::assembly("14:40", "15:00", "Afternoon Assembly"),
    ]
}

/// The stock support lane: one early-morning and two after-school clinics.
pub fn default_support_slots() -> Vec<TimeSlot> {
    vec![
        TimeSlot::support("06:30", "07:30", "Early Bird Mastery"),
        TimeSlot::support("15:30", "16:15", "After-School Clinic 1"),
        TimeSlot::support("16:15", "17:00", "After-School Clinic 2"),
    ]
}

pub fn intervention_subjects() -> Vec<Subject> {
    vec![
        Subject::intervention("int-read", "Reading Mastery", "Fluency & Phonetics"),
        Subject::intervention("int-write", "Creative Writing", "Composition & Grammar"),
        Subject::intervention("int-logic", "Logic & Puzzles", "Problem Solving"),
        Subject::intervention("int-alert", "Cognitive Alertness", "Memory & Speed"),
        Subject::intervention("int-drill", "Arithmetic Drills", "Accuracy"),
    ]
}

/// Whole-school activities that rules can pin.
pub fn customary_activities() -> Vec<Subject> {
    vec![
        Subject::activity("worship", "Worship"),
        Subject::activity("extra", "Extra-Curricular"),
        Subject::activity("library", "Library"),
        Subject::activity("club", "Club Activity"),
        Subject::activity("hymns", "Singing & Hymns"),
        Subject::activity("plc", "PLC Meeting"),
    ]
}

fn early_years_subjects() -> Vec<Subject> {
    vec![
        Subject::core("lit", "Language & Literacy"),
        Subject::core("num", "Numeracy"),
        Subject::core("env", "Environmental Studies"),
        Subject::elective("art", "Creative Arts"),
        Subject::activity("mus", "Music & Movement"),
        Subject::activity("phy", "Physical Dev"),
    ]
}

fn primary_subjects() -> Vec<Subject> {
    vec![
        Subject::core("eng", "English Language"),
        Subject::core("mat", "Mathematics"),
        Subject::core("sci", "Science"),
        Subject::core("his", "History"),
        Subject::elective("rme", "RME"),
        Subject::elective("gha", "Ghanaian Lang"),
        Subject::elective("ict", "ICT"),
        Subject::elective("art", "Creative Arts"),
    ]
}

/// Stock academic catalogs, per department.
pub fn default_subjects_by_dept() -> HashMap<Department, Vec<Subject>> {
    let mut creche = early_years_subjects();
    creche.push(Subject::activity("soc", "Social & Emotional"));
    creche.push(Subject::activity("mor", "Moral Education"));

    let kindergarten = vec![
        Subject::core("lit", "Language & Literacy"),
        Subject::core("num", "Numeracy"),
        Subject::core("env", "Environmental Studies"),
        Subject::core("owop", "Our World Our People"),
        Subject::elective("ict", "ICT Basic"),
        Subject::elective("art", "Creative Arts"),
    ];

    let junior_high = vec![
        Subject::core("eng", "English Language"),
        Subject::core("mat", "Mathematics"),
        Subject::core("sci", "Integrated Science"),
        Subject::core("soc", "Social Studies"),
        Subject::core("rme", "RME"),
        Subject::core("com", "Computing"),
        Subject::elective("bdt", "BDT"),
        Subject::elective("fre", "French"),
        Subject::elective("art", "Visual Arts"),
    ];

    HashMap::from([
        (Department::Creche, creche),
        (Department::Nursery, early_years_subjects()),
        (Department::Kindergarten, kindergarten),
        (Department::LowerBasic, primary_subjects()),
        (Department::UpperBasic, primary_subjects()),
        (Department::JuniorHigh, junior_high),
    ])
}
