//! Progress write path. Pure functions over one roadmap's progress records;
//! the store calls these while holding its write lock.

use chrono::{DateTime, Utc};

use crate::models::progress::{ProgressRecord, ProgressStatus};

/// Upserts the record for `skill_name` with a new status.
///
/// Moving to `completed` stamps `completed_at`. Moving away from it keeps the
/// old stamp, so a reopened skill still counts toward recent activity.
pub fn apply_status(
    records: &mut Vec<ProgressRecord>,
    skill_name: &str,
    status: ProgressStatus,
    now: DateTime<Utc>,
) -> ProgressRecord {
    let index = match records.iter().position(|r| r.skill_name == skill_name) {
        Some(i) => i,
        None => {
            records.push(ProgressRecord::new(skill_name));
            records.len() - 1
        }
    };

    let record = &mut records[index];
    record.status = status;
    if status == ProgressStatus::Completed {
        record.completed_at = Some(now);
    }
    record.clone()
}

/// Adds minutes to an existing record. Logging time on a skill that was never
/// started moves it to in progress. Returns `None` when there is no record.
pub fn log_time(
    records: &mut [ProgressRecord],
    skill_name: &str,
    minutes: u32,
) -> Option<ProgressRecord> {
    let record = records.iter_mut().find(|r| r.skill_name == skill_name)?;
    record.time_spent_minutes = record.time_spent_minutes.saturating_add(minutes);
    if record.status == ProgressStatus::NotStarted {
        record.status = ProgressStatus::InProgress;
    }
    Some(record.clone())
}

/// Share of touched skills that are completed, floored.
/// `None` when nothing has been touched yet.
pub fn completion_percentage(records: &[ProgressRecord]) -> Option<u32> {
    if records.is_empty() {
        return None;
    }
    let completed = records
        .iter()
        .filter(|r| r.status == ProgressStatus::Completed)
        .count();
    Some((completed * 100 / records.len()) as u32)
}
