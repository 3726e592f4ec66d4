use serde::{Deserialize, Serialize};

use crate::models::progress::ProgressStatus;
use crate::models::roadmap::Roadmap;
use crate::readiness::ledger::Ledger;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SkillsScore {
    pub percentage: u32,
    pub completed: u32,
    pub total: u32,
    pub in_progress: u32,
}

/// Skills coverage. Every definition counts once per occurrence; an
/// in-progress skill is worth half a completed one.
///
/// percentage = floor(100 * (completed + 0.5 * in_progress) / total)
pub fn score_skills(roadmap: &Roadmap, ledger: &Ledger) -> SkillsScore {
    let mut total = 0_u32;
    let mut completed = 0_u32;
    let mut in_progress = 0_u32;

    for (_, skill) in roadmap.skills() {
        total += 1;
        match ledger.status(&skill.name) {
            ProgressStatus::Completed => completed += 1,
            ProgressStatus::InProgress => in_progress += 1,
            ProgressStatus::NotStarted => {}
        }
    }

    if total == 0 {
        return SkillsScore::default();
    }

    // Doubled to keep the half-weight exact in integer arithmetic.
    let effective_x2 = 2 * u64::from(completed) + u64::from(in_progress);
    let percentage = (100 * effective_x2 / (2 * u64::from(total))).min(100) as u32;

    SkillsScore {
        percentage,
        completed,
        total,
        in_progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roadmap::Importance;
    use crate::readiness::fixtures::{phase, record, roadmap, sample_roadmap, skill};
    use crate::readiness::ledger::build_ledger;

    #[test]
    fn test_zero_skills_scores_zero() {
        let rm = roadmap(vec![phase("Empty", vec![])], vec![]);
        let score = score_skills(&rm, &build_ledger(&rm, &[]));
        assert_eq!(score, SkillsScore::default());
    }

    #[test]
    fn test_in_progress_counts_half() {
        let rm = sample_roadmap();
        let ledger = build_ledger(
            &rm,
            &[
                record("B", ProgressStatus::Completed, 0, None),
                record("C", ProgressStatus::InProgress, 0, None),
            ],
        );
        let score = score_skills(&rm, &ledger);
        // floor(100 * 1.5 / 3)
        assert_eq!(score.percentage, 50);
        assert_eq!(score.completed, 1);
        assert_eq!(score.in_progress, 1);
        assert_eq!(score.total, 3);
    }

    #[test]
    fn test_percentage_floors() {
        let rm = sample_roadmap();
        let ledger = build_ledger(
            &rm,
            &[
                record("A", ProgressStatus::Completed, 0, None),
                record("B", ProgressStatus::Completed, 0, None),
                record("C", ProgressStatus::InProgress, 0, None),
            ],
        );
        // floor(100 * 2.5 / 3) = floor(83.33)
        assert_eq!(score_skills(&rm, &ledger).percentage, 83);
    }

    #[test]
    fn test_duplicate_names_count_per_occurrence() {
        let rm = roadmap(
            vec![
                phase("P1", vec![skill("Git", Importance::Important)]),
                phase("P2", vec![skill("Git", Importance::Important), skill("CI", Importance::Optional)]),
            ],
            vec![],
        );
        let ledger = build_ledger(&rm, &[record("Git", ProgressStatus::Completed, 0, None)]);
        let score = score_skills(&rm, &ledger);
        // One completion record satisfies both occurrences of "Git".
        assert_eq!(score.total, 3);
        assert_eq!(score.completed, 2);
        assert_eq!(score.percentage, 66);
    }

    #[test]
    fn test_completing_a_skill_never_lowers_coverage() {
        let rm = sample_roadmap();
        let mut records = vec![record("C", ProgressStatus::InProgress, 0, None)];
        let mut last = score_skills(&rm, &build_ledger(&rm, &records)).percentage;

        for name in ["A", "C", "B"] {
            records.retain(|r| r.skill_name != name);
            records.push(record(name, ProgressStatus::Completed, 0, None));
            let next = score_skills(&rm, &build_ledger(&rm, &records)).percentage;
            assert!(next >= last, "{name}: {next} < {last}");
            last = next;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(SkillsScore {
            percentage: 50,
            completed: 1,
            total: 3,
            in_progress: 1,
        })
        .unwrap();
        assert_eq!(json["inProgress"], 1);
    }
}
