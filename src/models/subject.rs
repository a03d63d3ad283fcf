//! Subject model.
//!
//! Subjects fill timetable cells. Academic subjects come from per-department
//! catalogs; activities, breaks, and intervention subjects come from global
//! catalogs (see [`crate::catalog`]).

use serde::{Deserialize, Serialize};

/// Subject classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectCategory {
    Core,
    Elective,
    Activity,
    /// Structural slot filler (snack, lunch).
    Break,
    /// Remedial clinic subject for the support lane.
    Intervention,
}

/// A subject that can occupy a timetable cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Stable key (e.g. `"mat"`, `"worship"`, `"snack"`).
    pub id: String,
    /// Display name.
    pub name: String,
    pub category: SubjectCategory,
    /// Learning goal, used by intervention subjects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// Display color from the editing screens, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Subject {
    /// Creates a new subject.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: SubjectCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            goal: None,
            color: None,
        }
    }

    /// Creates a core subject.
    pub fn core(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, SubjectCategory::Core)
    }

    /// Creates an elective subject.
    pub fn elective(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, SubjectCategory::Elective)
    }

    /// Creates an activity.
    pub fn activity(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, SubjectCategory::Activity)
    }

    /// Creates an intervention subject with a goal.
    pub fn intervention(
        id: impl Into<String>,
        name: impl Into<String>,
        goal: impl Into<String>,
    ) -> Self {
        Self::new(id, name, SubjectCategory::Intervention).with_goal(goal)
    }

    /// Sets the goal text.
    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = Some(goal.into());
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Whether this subject never takes a teacher: breaks and assembly.
    pub fn is_structural(&self) -> bool {
        self.category == SubjectCategory::Break || self.id == "assembly"
    }
}
