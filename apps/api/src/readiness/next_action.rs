//! Next best action: the single skill the user should pick up now.
//!
//! Walk order is fixed: tier (critical, important, optional), then phase, then
//! skill, all in declaration order. The first skill that is not started or in
//! progress wins. There is no scoring and no tie-breaking beyond that order.

use serde::{Deserialize, Serialize};

use crate::models::progress::ProgressStatus;
use crate::models::roadmap::{Importance, Phase, Roadmap, SkillDefinition};
use crate::readiness::ledger::Ledger;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NextAction {
    pub id: String,
    pub title: String,
    pub description: String,
    pub estimated_minutes: u64,
    pub resource_url: String,
    pub resource_title: String,
    pub skill_name: String,
    pub phase: String,
    pub importance: Importance,
    pub status: ProgressStatus,
}

pub fn next_action(roadmap: &Roadmap, ledger: &Ledger) -> Option<NextAction> {
    Importance::PRIORITY.iter().find_map(|&tier| {
        roadmap
            .skills()
            .filter(|(_, skill)| skill.importance == tier)
            .find(|(_, skill)| ledger.status(&skill.name).is_open())
            .map(|(phase, skill)| build_action(phase, skill, ledger.status(&skill.name)))
    })
}

fn build_action(phase: &Phase, skill: &SkillDefinition, status: ProgressStatus) -> NextAction {
    let (resource_url, resource_title) = skill
        .resources
        .first()
        .map(|r| (r.url.clone(), r.title.clone()))
        .unwrap_or_default();

    NextAction {
        id: skill.id.clone().unwrap_or_else(|| skill.name.clone()),
        title: format!("Complete {}", skill.name),
        description: skill
            .description
            .clone()
            .unwrap_or_else(|| format!("Learn {} fundamentals", skill.name)),
        // Half of the declared effort.
        estimated_minutes: u64::from(skill.estimated_hours) * 60 / 2,
        resource_url,
        resource_title,
        skill_name: skill.name.clone(),
        phase: phase.name.clone(),
        importance: skill.importance,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readiness::fixtures::{
        phase, record, roadmap, sample_roadmap, skill, skill_with_resource,
    };
    use crate::readiness::ledger::build_ledger;

    #[test]
    fn test_critical_tier_first() {
        let rm = sample_roadmap();
        let ledger = build_ledger(
            &rm,
            &[
                record("B", ProgressStatus::Completed, 0, None),
                record("C", ProgressStatus::InProgress, 0, None),
            ],
        );
        let action = next_action(&rm, &ledger).unwrap();
        assert_eq!(action.skill_name, "A");
        assert_eq!(action.title, "Complete A");
        assert_eq!(action.phase, "Foundations");
        assert_eq!(action.importance, Importance::Critical);
        assert_eq!(action.status, ProgressStatus::NotStarted);
    }

    #[test]
    fn test_falls_through_to_optional_tier() {
        let rm = sample_roadmap();
        let ledger = build_ledger(
            &rm,
            &[
                record("A", ProgressStatus::Completed, 0, None),
                record("B", ProgressStatus::Completed, 0, None),
                record("C", ProgressStatus::InProgress, 0, None),
            ],
        );
        let action = next_action(&rm, &ledger).unwrap();
        assert_eq!(action.skill_name, "C");
        assert_eq!(action.phase, "Advanced");
        assert_eq!(action.status, ProgressStatus::InProgress);
    }

    #[test]
    fn test_none_when_everything_completed() {
        let rm = sample_roadmap();
        let done: Vec<_> = ["A", "B", "C"]
            .iter()
            .map(|n| record(n, ProgressStatus::Completed, 0, None))
            .collect();
        assert!(next_action(&rm, &build_ledger(&rm, &done)).is_none());
    }

    #[test]
    fn test_none_for_empty_roadmap() {
        let rm = roadmap(vec![], vec![]);
        assert!(next_action(&rm, &build_ledger(&rm, &[])).is_none());
    }

    #[test]
    fn test_tier_beats_phase_order() {
        let rm = roadmap(
            vec![
                phase("Early", vec![skill("Optional early", Importance::Optional)]),
                phase("Late", vec![skill("Critical late", Importance::Critical)]),
            ],
            vec![],
        );
        let action = next_action(&rm, &build_ledger(&rm, &[])).unwrap();
        assert_eq!(action.skill_name, "Critical late");
        assert_eq!(action.phase, "Late");
    }

    #[test]
    fn test_first_declared_wins_within_tier() {
        let rm = roadmap(
            vec![
                phase("P1", vec![skill("First", Importance::Important)]),
                phase("P2", vec![skill("Second", Importance::Important)]),
            ],
            vec![],
        );
        let ledger = build_ledger(&rm, &[record("Second", ProgressStatus::InProgress, 10, None)]);
        assert_eq!(next_action(&rm, &ledger).unwrap().skill_name, "First");
    }

    #[test]
    fn test_enriched_with_first_resource_and_half_estimate() {
        let mut s = skill_with_resource(
            "Docker",
            Importance::Critical,
            5,
            "https://docs.docker.com",
            "Docker docs",
        );
        s.resources.push(crate::models::roadmap::Resource {
            url: "https://second.example".to_string(),
            title: "Second".to_string(),
        });
        s.id = Some("skill-docker".to_string());
        s.description = Some("Containerize services".to_string());
        let rm = roadmap(vec![phase("Ops", vec![s])], vec![]);

        let action = next_action(&rm, &build_ledger(&rm, &[])).unwrap();
        assert_eq!(action.id, "skill-docker");
        assert_eq!(action.estimated_minutes, 150);
        assert_eq!(action.resource_url, "https://docs.docker.com");
        assert_eq!(action.resource_title, "Docker docs");
        assert_eq!(action.description, "Containerize services");
    }

    #[test]
    fn test_defaults_without_resources_or_description() {
        let rm = roadmap(vec![phase("P", vec![skill("SQL", Importance::Important)])], vec![]);
        let action = next_action(&rm, &build_ledger(&rm, &[])).unwrap();
        assert_eq!(action.id, "SQL");
        assert_eq!(action.resource_url, "");
        assert_eq!(action.resource_title, "");
        assert_eq!(action.description, "Learn SQL fundamentals");
        assert_eq!(action.estimated_minutes, 60);
    }

    #[test]
    fn test_duplicate_name_completed_once_skips_every_occurrence() {
        let rm = roadmap(
            vec![
                phase("P1", vec![skill("Testing", Importance::Critical)]),
                phase("P2", vec![skill("Testing", Importance::Critical)]),
            ],
            vec![],
        );
        let ledger = build_ledger(&rm, &[record("Testing", ProgressStatus::Completed, 0, None)]);
        assert!(next_action(&rm, &ledger).is_none());
    }

    #[test]
    fn test_huge_effort_estimate_does_not_overflow() {
        let mut s = skill("Distributed systems", Importance::Critical);
        s.estimated_hours = u32::MAX;
        let rm = roadmap(vec![phase("P", vec![s])], vec![]);
        let action = next_action(&rm, &build_ledger(&rm, &[])).unwrap();
        assert_eq!(action.estimated_minutes, u64::from(u32::MAX) * 30);
    }

    #[test]
    fn test_first_resource_without_title_gets_placeholder() {
        let json = serde_json::json!({
            "name": "Kafka",
            "importance": "critical",
            "resources": [{ "url": "https://kafka.apache.org/documentation" }]
        });
        let s: SkillDefinition = serde_json::from_value(json).unwrap();
        let rm = roadmap(vec![phase("Streaming", vec![s])], vec![]);
        let action = next_action(&rm, &build_ledger(&rm, &[])).unwrap();
        assert_eq!(action.resource_url, "https://kafka.apache.org/documentation");
        assert_eq!(action.resource_title, "Learning Resource");
    }

    #[test]
    fn test_serialized_shape() {
        let rm = sample_roadmap();
        let action = next_action(&rm, &build_ledger(&rm, &[])).unwrap();
        let json = serde_json::to_value(&action).unwrap();
        for key in [
            "id",
            "title",
            "description",
            "estimatedMinutes",
            "resourceUrl",
            "resourceTitle",
            "skillName",
            "phase",
            "importance",
            "status",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["importance"], "critical");
        assert_eq!(json["status"], "not_started");
    }
}
