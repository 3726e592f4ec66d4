use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Priority tier attached to every skill definition.
/// Order of the variants is the order the next-action walk visits them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Critical,
    Important,
    #[default]
    Optional,
}

impl Importance {
    /// Tiers in next-action priority order.
    pub const PRIORITY: [Importance; 3] = [
        Importance::Critical,
        Importance::Important,
        Importance::Optional,
    ];

    /// Critical and important skills are the ones surfaced as "missing".
    pub fn is_required(self) -> bool {
        matches!(self, Importance::Critical | Importance::Important)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoadmapStatus {
    #[default]
    Active,
    Completed,
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Resource {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_resource_title")]
    pub title: String,
}

fn default_resource_title() -> String {
    "Learning Resource".to_string()
}

fn default_phase_name() -> String {
    "Learning Phase".to_string()
}

fn default_estimated_hours() -> u32 {
    2
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Join key to progress records. Not unique across phases.
    pub name: String,
    #[serde(default)]
    pub importance: Importance,
    #[serde(default = "default_estimated_hours")]
    pub estimated_hours: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Phase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default = "default_phase_name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Skill names this project exercises.
    #[serde(default)]
    pub skills: Vec<String>,
}

/// A generated learning plan. Immutable once registered, apart from
/// `completion_percentage`, which the progress write path maintains.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Roadmap {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_weeks: Option<u32>,
    #[serde(default)]
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub status: RoadmapStatus,
    #[serde(default)]
    pub completion_percentage: u32,
    pub generated_at: DateTime<Utc>,
}

impl Roadmap {
    /// Every skill occurrence paired with its phase, in declaration order.
    pub fn skills(&self) -> impl Iterator<Item = (&Phase, &SkillDefinition)> {
        self.phases
            .iter()
            .flat_map(|phase| phase.skills.iter().map(move |skill| (phase, skill)))
    }

    /// True if any phase declares a skill with this name.
    pub fn declares_skill(&self, name: &str) -> bool {
        self.skills().any(|(_, skill)| skill.name == name)
    }
}
