//! Scheduling rules (pinned overrides).
//!
//! An active rule forces one subject into one (day, slot label) cell for a
//! department, or for every department, before normal rotation runs.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Department;

/// Which departments a rule applies to.
///
/// Serialized as `"ALL"` or the department's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleTarget {
    All,
    Department(Department),
}

impl RuleTarget {
    /// Whether the rule targets the given department.
    pub fn includes(&self, dept: Department) -> bool {
        match self {
            RuleTarget::All => true,
            RuleTarget::Department(d) => *d == dept,
        }
    }
}

impl Serialize for RuleTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RuleTarget::All => serializer.serialize_str("ALL"),
            RuleTarget::Department(d) => serializer.serialize_str(d.name()),
        }
    }
}

impl<'de> Deserialize<'de> for RuleTarget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == "ALL" {
            return Ok(RuleTarget::All);
        }
        raw.parse::<Department>()
            .map(RuleTarget::Department)
            .map_err(serde::de::Error::custom)
    }
}

/// A pinned override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingRule {
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "targetDept")]
    pub target: RuleTarget,
    /// Day name (e.g. `"Monday"`).
    pub day: String,
    /// Slot label the rule pins (e.g. `"Period 1"`).
    pub slot_label: String,
    /// Subject to force, looked up in the customary activities catalog.
    pub subject_id: String,
    pub is_active: bool,
}

impl SchedulingRule {
    /// Creates an active rule.
    pub fn new(
        id: impl Into<String>,
        target: RuleTarget,
        day: impl Into<String>,
        slot_label: impl Into<String>,
        subject_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            target,
            day: day.into(),
            slot_label: slot_label.into(),
            subject_id: subject_id.into(),
            is_active: true,
        }
    }

    /// Sets the rule name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// Whether this rule pins the cell (dept, day, slot label).
    pub fn matches(&self, dept: Department, day: &str, slot_label: &str) -> bool {
        self.is_active
            && self.target.includes(dept)
            && self.day == day
            && self.slot_label == slot_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_matching() {
        let rule = SchedulingRule::new(
            "r1",
            RuleTarget::Department(Department::JuniorHigh),
            "Friday",
            "Period 7",
            "club",
        );
        assert!(rule.matches(Department::JuniorHigh, "Friday", "Period 7"));
        assert!(!rule.matches(Department::UpperBasic, "Friday", "Period 7"));
        assert!(!rule.matches(Department::JuniorHigh, "Thursday", "Period 7"));
        assert!(!rule.matches(Department::JuniorHigh, "Friday", "Period 6"));

        let inactive = rule.with_active(false);
        assert!(!inactive.matches(Department::JuniorHigh, "Friday", "Period 7"));
    }

    #[test]
    fn test_all_target() {
        let rule = SchedulingRule::new("r1", RuleTarget::All, "Monday", "Period 1", "worship");
        for dept in Department::ALL {
            assert!(rule.matches(dept, "Monday", "Period 1"));
        }
    }

    #[test]
    fn test_rule_wire_shape() {
        let rule: SchedulingRule = serde_json::from_str(
            r#"{"id":"r1","name":"Worship","targetDept":"ALL","day":"Monday",
                "slotLabel":"Period 1","subjectId":"worship","isActive":true}"#,
        )
        .unwrap();
        assert_eq!(rule.target, RuleTarget::All);
        assert_eq!(rule.name, "Worship");

        let dept: RuleTarget = serde_json::from_str("\"Upper Basic\"").unwrap();
        assert_eq!(dept, RuleTarget::Department(Department::UpperBasic));
        assert!(serde_json::from_str::<RuleTarget>("\"Everyone\"").is_err());

        let json = serde_json::to_value(RuleTarget::All).unwrap();
        assert_eq!(json, "ALL");
    }
}
