// Job readiness scoring engine.
// Pure functions over already-loaded roadmap + progress data. No I/O here;
// the evaluation timestamp is always passed in by the caller.

pub mod composite;
pub mod handlers;
pub mod interview;
pub mod ledger;
pub mod missing;
pub mod next_action;
pub mod projects;
pub mod skills;
pub mod weekly;

#[cfg(test)]
pub(crate) mod fixtures;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::progress::ProgressRecord;
use crate::models::roadmap::Roadmap;
use interview::InterviewScore;
use projects::ProjectsScore;
use skills::SkillsScore;

pub use ledger::build_ledger;
pub use next_action::{next_action, NextAction};

pub const NO_ROADMAP_ROLE: &str = "No active roadmap";

/// Sub-score detail. Empty (`{}`) when there is no roadmap to score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Breakdown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<SkillsScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<ProjectsScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview: Option<InterviewScore>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessScore {
    pub overall: u32,
    pub skills_covered: u32,
    pub projects_completed: u32,
    pub interview_readiness: u32,
    pub missing_skills: Vec<String>,
    pub target_role: String,
    pub breakdown: Breakdown,
}

impl ReadinessScore {
    pub fn no_roadmap() -> Self {
        Self {
            overall: 0,
            skills_covered: 0,
            projects_completed: 0,
            interview_readiness: 0,
            missing_skills: vec![],
            target_role: NO_ROADMAP_ROLE.to_string(),
            breakdown: Breakdown::default(),
        }
    }
}

/// Scores one roadmap against its progress records as of `evaluated_at`.
pub fn evaluate(
    roadmap: &Roadmap,
    progress: &[ProgressRecord],
    evaluated_at: DateTime<Utc>,
) -> ReadinessScore {
    let ledger = build_ledger(roadmap, progress);

    let skills = skills::score_skills(roadmap, &ledger);
    let projects = projects::score_projects(roadmap, &ledger);
    let interview = interview::score_interview(roadmap, &ledger, evaluated_at);

    let overall = composite::compose(skills.percentage, projects.percentage, interview.percentage);

    let mut missing_skills = missing::missing_skills(roadmap, &ledger);
    missing_skills.truncate(missing::MAX_MISSING_SKILLS);

    debug!(
        roadmap_id = %roadmap.id,
        overall,
        skills = skills.percentage,
        projects = projects.percentage,
        interview = interview.percentage,
        orphan_records = ledger.orphan_count(),
        "Readiness evaluated"
    );

    ReadinessScore {
        overall,
        skills_covered: skills.percentage,
        projects_completed: projects.percentage,
        interview_readiness: interview.percentage,
        missing_skills,
        target_role: roadmap.job_title.clone(),
        breakdown: Breakdown {
            skills: Some(skills),
            projects: Some(projects),
            interview: Some(interview),
        },
    }
}
