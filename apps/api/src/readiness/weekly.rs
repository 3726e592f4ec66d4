use serde::{Deserialize, Serialize};

use crate::readiness::{Breakdown, ReadinessScore};

const WEAK_AREA_LIMIT: usize = 3;
const DEFAULT_FOCUS: &str = "Continue current progress";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub current_score: u32,
    /// Skills completed inside the trailing week.
    pub skills_unlocked: u32,
    pub weak_areas: Vec<String>,
    pub next_week_focus: String,
    pub target_role: String,
    pub breakdown: Breakdown,
}

/// Summarises a readiness score for the weekly digest.
pub fn weekly_report(score: &ReadinessScore) -> WeeklyReport {
    let skills_unlocked = score
        .breakdown
        .interview
        .as_ref()
        .map(|i| i.recent_activity_count)
        .unwrap_or(0);

    WeeklyReport {
        current_score: score.overall,
        skills_unlocked,
        weak_areas: score
            .missing_skills
            .iter()
            .take(WEAK_AREA_LIMIT)
            .cloned()
            .collect(),
        next_week_focus: score
            .missing_skills
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_FOCUS.to_string()),
        target_role: score.target_role.clone(),
        breakdown: score.breakdown.clone(),
    }
}
