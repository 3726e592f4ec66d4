//! Builders shared by the readiness and roadmap test modules.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::models::progress::{ProgressRecord, ProgressStatus};
use crate::models::roadmap::{
    Importance, Phase, Project, Resource, Roadmap, RoadmapStatus, SkillDefinition,
};

pub fn skill(name: &str, importance: Importance) -> SkillDefinition {
    SkillDefinition {
        id: None,
        name: name.to_string(),
        importance,
        estimated_hours: 2,
        description: None,
        resources: vec![],
    }
}

pub fn skill_with_resource(
    name: &str,
    importance: Importance,
    hours: u32,
    url: &str,
    title: &str,
) -> SkillDefinition {
    SkillDefinition {
        estimated_hours: hours,
        resources: vec![Resource {
            url: url.to_string(),
            title: title.to_string(),
        }],
        ..skill(name, importance)
    }
}

pub fn phase(name: &str, skills: Vec<SkillDefinition>) -> Phase {
    Phase {
        id: None,
        name: name.to_string(),
        description: None,
        skills,
    }
}

pub fn project(skills: &[&str]) -> Project {
    Project {
        id: None,
        title: None,
        description: None,
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn roadmap(phases: Vec<Phase>, projects: Vec<Project>) -> Roadmap {
    Roadmap {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        job_title: "Senior Backend Engineer".to_string(),
        job_description: None,
        industry: None,
        skill_level: None,
        estimated_weeks: None,
        phases,
        projects,
        status: RoadmapStatus::Active,
        completion_percentage: 0,
        generated_at: fixed_now(),
    }
}

pub fn record(
    name: &str,
    status: ProgressStatus,
    minutes: u32,
    completed_at: Option<DateTime<Utc>>,
) -> ProgressRecord {
    ProgressRecord {
        skill_name: name.to_string(),
        status,
        time_spent_minutes: minutes,
        completed_at,
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
}

/// Two phases: [A(critical), B(important)], [C(optional)]; one project over A and B.
pub fn sample_roadmap() -> Roadmap {
    roadmap(
        vec![
            phase(
                "Foundations",
                vec![
                    skill("A", Importance::Critical),
                    skill("B", Importance::Important),
                ],
            ),
            phase("Advanced", vec![skill("C", Importance::Optional)]),
        ],
        vec![project(&["A", "B"])],
    )
}
