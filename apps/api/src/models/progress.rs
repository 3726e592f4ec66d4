use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl ProgressStatus {
    /// Not started or in progress: a candidate for the next action.
    pub fn is_open(self) -> bool {
        !matches!(self, ProgressStatus::Completed)
    }
}

/// Per-skill progress for one roadmap, keyed by skill name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressRecord {
    pub skill_name: String,
    #[serde(default)]
    pub status: ProgressStatus,
    #[serde(default)]
    pub time_spent_minutes: u32,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    pub fn new(skill_name: impl Into<String>) -> Self {
        Self {
            skill_name: skill_name.into(),
            status: ProgressStatus::NotStarted,
            time_spent_minutes: 0,
            completed_at: None,
        }
    }
}
