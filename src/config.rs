//! Timetable configuration loading.
//!
//! `TimetableConfig` bundles every generation input in the JSON shape the
//! editing screens export (camelCase keys, display-name enum values).
//! Any section missing from a document takes its stock default.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog;
use crate::models::{Department, FacilitatorConfig, SchedulingRule, StreamConfig, Subject, TimeSlot};
use crate::scheduler::GenerationRequest;
use crate::validation::{validate_request, ValidationError};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configuration failed validation ({} issues)", .0.len())]
    Invalid(Vec<ValidationError>),
}

/// Every input to timetable generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimetableConfig {
    pub rules: Vec<SchedulingRule>,
    pub slots: Vec<TimeSlot>,
    pub facilitators: Vec<FacilitatorConfig>,
    pub stream_config: StreamConfig,
    pub subjects_by_dept: HashMap<Department, Vec<Subject>>,
    pub customary_activities: Vec<Subject>,
    pub support_slots: Vec<TimeSlot>,
    pub intervention_subjects: Vec<Subject>,
    pub days: Vec<String>,
}

impl Default for TimetableConfig {
    /// The stock institution: built-in slots, catalogs, and support lane,
    /// with no rules, facilitators, or streams.
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            slots: catalog::default_time_slots(),
            facilitators: Vec::new(),
            stream_config: StreamConfig::new(),
            subjects_by_dept: catalog::default_subjects_by_dept(),
            customary_activities: catalog::customary_activities(),
            support_slots: catalog::default_support_slots(),
            intervention_subjects: catalog::intervention_subjects(),
            days: catalog::default_days(),
        }
    }
}

impl TimetableConfig {
    /// Parses a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        tracing::debug!(
            rules = config.rules.len(),
            facilitators = config.facilitators.len(),
            slots = config.slots.len(),
            "loaded timetable configuration"
        );
        Ok(config)
    }

    /// Reads and parses a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Reads a JSON file and rejects it if validation finds any issue.
    pub fn load_validated(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_path(path)?;
        validate_request(&config.to_request()).map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Serializes to pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds a generation request from a copy of this configuration.
    pub fn to_request(&self) -> GenerationRequest {
        self.clone().into_request()
    }

    /// Converts into a generation request.
    pub fn into_request(self) -> GenerationRequest {
        GenerationRequest {
            rules: self.rules,
            slots: self.slots,
            facilitators: self.facilitators,
            stream_config: self.stream_config,
            subjects_by_dept: self.subjects_by_dept,
            customary_activities: self.customary_activities,
            support_slots: self.support_slots,
            intervention_subjects: self.intervention_subjects,
            days: self.days,
        }
    }
}
