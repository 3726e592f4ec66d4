//! Interview readiness: how prepared the user is to talk about the role.
//!
//! Three signals, weighted 0.5 / 0.25 / 0.25:
//! 1. completed critical skills, as a percentage (50 when there are none)
//! 2. time invested, 6000 minutes counting as full preparation
//! 3. completions inside the trailing 7 days, 15 points each, capped at 100

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::roadmap::{Importance, Roadmap};
use crate::readiness::ledger::Ledger;

/// Minutes of study treated as fully prepared.
pub const FULL_PREPARATION_MINUTES: u64 = 6000;
pub const RECENT_ACTIVITY_DAYS: i64 = 7;
pub const POINTS_PER_RECENT_COMPLETION: u64 = 15;
/// Critical-completion signal used when the roadmap tags nothing critical.
pub const NO_CRITICAL_SKILLS_SIGNAL: u64 = 50;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct InterviewScore {
    pub percentage: u32,
    pub critical_skills_completed: u32,
    pub total_critical_skills: u32,
    pub total_time_minutes: u64,
    pub recent_activity_count: u32,
}

pub fn score_interview(
    roadmap: &Roadmap,
    ledger: &Ledger,
    evaluated_at: DateTime<Utc>,
) -> InterviewScore {
    let mut total_critical = 0_u32;
    let mut critical_completed = 0_u32;
    for (_, skill) in roadmap.skills() {
        if skill.importance == Importance::Critical {
            total_critical += 1;
            if ledger.is_completed(&skill.name) {
                critical_completed += 1;
            }
        }
    }

    let total_time_minutes = ledger.total_time_minutes();
    let cutoff = evaluated_at - Duration::days(RECENT_ACTIVITY_DAYS);
    let recent_activity_count = ledger.completed_after(cutoff) as u32;

    let percentage = weighted_percentage(
        critical_completed,
        total_critical,
        total_time_minutes,
        recent_activity_count,
    );

    InterviewScore {
        percentage,
        critical_skills_completed: critical_completed,
        total_critical_skills: total_critical,
        total_time_minutes,
        recent_activity_count,
    }
}

/// floor(0.5 * critical + 0.25 * time + 0.25 * recency), evaluated over a
/// common denominator so no float rounding leaks into the floor.
fn weighted_percentage(
    critical_completed: u32,
    total_critical: u32,
    total_minutes: u64,
    recent_count: u32,
) -> u32 {
    // 240 = 4 * 60 clears both the 0.25 weight and the 6000-minute divisor.
    let denom = u64::from(total_critical.max(1)) * 240;

    let critical_term = if total_critical == 0 {
        NO_CRITICAL_SKILLS_SIGNAL * 120
    } else {
        12_000 * u64::from(critical_completed)
    };
    let time_term = total_minutes.min(FULL_PREPARATION_MINUTES) * u64::from(total_critical.max(1));
    let recency_signal = (u64::from(recent_count) * POINTS_PER_RECENT_COMPLETION).min(100);
    let recency_term = recency_signal * 60 * u64::from(total_critical.max(1));

    ((critical_term + time_term + recency_term) / denom) as u32
}
