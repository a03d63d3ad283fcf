//! Institutional structure: departments, class levels, streams.
//!
//! A department owns an ordered, fixed list of class levels. Each level
//! is split into one or more streams by configuration; a class key
//! identifies one (level, stream) pair and is the unit of generation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Organizational tier grouping class levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "Creche")]
    Creche,
    #[serde(rename = "Nursery")]
    Nursery,
    #[serde(rename = "Kindergarten")]
    Kindergarten,
    #[serde(rename = "Lower Basic")]
    LowerBasic,
    #[serde(rename = "Upper Basic")]
    UpperBasic,
    #[serde(rename = "Junior High School")]
    JuniorHigh,
}

impl Department {
    /// Every department, in generation order.
    pub const ALL: [Department; 6] = [
        Department::Creche,
        Department::Nursery,
        Department::Kindergarten,
        Department::LowerBasic,
        Department::UpperBasic,
        Department::JuniorHigh,
    ];

    /// Display name, identical to the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Department::Creche => "Creche",
            Department::Nursery => "Nursery",
            Department::Kindergarten => "Kindergarten",
            Department::LowerBasic => "Lower Basic",
            Department::UpperBasic => "Upper Basic",
            Department::JuniorHigh => "Junior High School",
        }
    }

    /// Class levels owned by this department, in order.
    pub fn levels(&self) -> &'static [ClassLevel] {
        use ClassLevel::*;
        match self {
            Department::Creche => &[Creche],
            Department::Nursery => &[Nursery1, Nursery2],
            Department::Kindergarten => &[Kg1, Kg2],
            Department::LowerBasic => &[Basic1, Basic2, Basic3],
            Department::UpperBasic => &[Basic4, Basic5, Basic6],
            Department::JuniorHigh => &[Basic7, Basic8, Basic9],
        }
    }

    /// Whether facilitators may be borrowed across this department's
    /// boundary. Only Upper Basic and Junior High share staff.
    pub fn shares_senior_staff(&self) -> bool {
        matches!(self, Department::UpperBasic | Department::JuniorHigh)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| format!("unknown department: {s}"))
    }
}

/// A single grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassLevel {
    #[serde(rename = "Creche")]
    Creche,
    #[serde(rename = "Nursery 1")]
    Nursery1,
    #[serde(rename = "Nursery 2")]
    Nursery2,
    #[serde(rename = "KG 1")]
    Kg1,
    #[serde(rename = "KG 2")]
    Kg2,
    #[serde(rename = "Basic 1")]
    Basic1,
    #[serde(rename = "Basic 2")]
    Basic2,
    #[serde(rename = "Basic 3")]
    Basic3,
    #[serde(rename = "Basic 4")]
    Basic4,
    #[serde(rename = "Basic 5")]
    Basic5,
    #[serde(rename = "Basic 6")]
    Basic6,
    #[serde(rename = "Basic 7")]
    Basic7,
    #[serde(rename = "Basic 8")]
    Basic8,
    #[serde(rename = "Basic 9")]
    Basic9,
}

impl ClassLevel {
    /// Display name, identical to the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            ClassLevel::Creche => "Creche",
            ClassLevel::Nursery1 => "Nursery 1",
            ClassLevel::Nursery2 => "Nursery 2",
            ClassLevel::Kg1 => "KG 1",
            ClassLevel::Kg2 => "KG 2",
            ClassLevel::Basic1 => "Basic 1",
            ClassLevel::Basic2 => "Basic 2",
            ClassLevel::Basic3 => "Basic 3",
            ClassLevel::Basic4 => "Basic 4",
            ClassLevel::Basic5 => "Basic 5",
            ClassLevel::Basic6 => "Basic 6",
            ClassLevel::Basic7 => "Basic 7",
            ClassLevel::Basic8 => "Basic 8",
            ClassLevel::Basic9 => "Basic 9",
        }
    }

    /// The department that owns this level.
    pub fn department(&self) -> Department {
        use ClassLevel::*;
        match self {
            Creche => Department::Creche,
            Nursery1 | Nursery2 => Department::Nursery,
            Kg1 | Kg2 => Department::Kindergarten,
            Basic1 | Basic2 | Basic3 => Department::LowerBasic,
            Basic4 | Basic5 | Basic6 => Department::UpperBasic,
            Basic7 | Basic8 | Basic9 => Department::JuniorHigh,
        }
    }
}

impl fmt::Display for ClassLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A subdivision of a class level.
///
/// `None` means the level is not subdivided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stream {
    #[default]
    None,
    A,
    B,
    C,
}

impl Stream {
    pub fn name(&self) -> &'static str {
        match self {
            Stream::None => "None",
            Stream::A => "A",
            Stream::B => "B",
            Stream::C => "C",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generation and lookup key for one class: `level` or `level-stream`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassKey(String);

impl ClassKey {
    /// Derives the key for a level and stream.
    pub fn new(level: ClassLevel, stream: Stream) -> Self {
        match stream {
            Stream::None => Self(level.name().to_string()),
            s => Self(format!("{}-{}", level.name(), s.name())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<&str> for ClassKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Per-level stream configuration.
///
/// A level absent from the map is taught as a single unsubdivided class.
/// A level mapped to an empty list has no classes at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamConfig(HashMap<ClassLevel, Vec<Stream>>);

const UNSTREAMED: &[Stream] = &[Stream::None];

impl StreamConfig {
    /// Creates an empty configuration (every level unsubdivided).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the streams for a level.
    pub fn with_streams(mut self, level: ClassLevel, streams: Vec<Stream>) -> Self {
        self.0.insert(level, streams);
        self
    }

    /// Streams configured for a level, defaulting to `[None]`.
    pub fn streams(&self, level: ClassLevel) -> &[Stream] {
        match self.0.get(&level) {
            Some(streams) => streams,
            None => {
                tracing::trace!(level = %level, "no stream configuration, using single class");
                UNSTREAMED
            }
        }
    }

    /// Whether the level has an explicit entry.
    pub fn is_configured(&self, level: ClassLevel) -> bool {
        self.0.contains_key(&level)
    }

    /// Every class key, in department → level → stream order.
    pub fn class_keys(&self) -> Vec<(Department, ClassLevel, ClassKey)> {
        Department::ALL
            .iter()
            .flat_map(|dept| dept.levels().iter().map(move |lvl| (*dept, *lvl)))
            .flat_map(|(dept, lvl)| {
                self.streams(lvl)
                    .iter()
                    .map(move |s| (dept, lvl, ClassKey::new(lvl, *s)))
            })
            .collect()
    }
}
