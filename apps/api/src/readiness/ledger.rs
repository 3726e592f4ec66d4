//! Skill ledger: the normalized per-skill view every calculator reads from.
//!
//! Keyed by skill *name*, not id. Two definitions sharing a name in different
//! phases resolve to the same entry.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::progress::{ProgressRecord, ProgressStatus};
use crate::models::roadmap::{Importance, Roadmap};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LedgerEntry {
    /// `None` for progress recorded against a name the roadmap never declares.
    pub importance: Option<Importance>,
    pub status: ProgressStatus,
    pub time_spent_minutes: u32,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: HashMap<String, LedgerEntry>,
}

/// Joins a roadmap's skill definitions with its progress records.
pub fn build_ledger(roadmap: &Roadmap, records: &[ProgressRecord]) -> Ledger {
    let mut entries: HashMap<String, LedgerEntry> = HashMap::new();

    for (_, skill) in roadmap.skills() {
        entries
            .entry(skill.name.clone())
            .or_insert_with(|| LedgerEntry {
                importance: Some(skill.importance),
                ..LedgerEntry::default()
            });
    }

    // Later records for the same name overwrite earlier ones.
    for record in records {
        let entry = entries.entry(record.skill_name.clone()).or_default();
        entry.status = record.status;
        entry.time_spent_minutes = record.time_spent_minutes;
        entry.completed_at = record.completed_at;
    }

    Ledger { entries }
}

impl Ledger {
    pub fn get(&self, skill_name: &str) -> Option<&LedgerEntry> {
        self.entries.get(skill_name)
    }

    /// Status for a skill name; unknown names are not started.
    pub fn status(&self, skill_name: &str) -> ProgressStatus {
        self.get(skill_name).map(|e| e.status).unwrap_or_default()
    }

    pub fn is_completed(&self, skill_name: &str) -> bool {
        self.status(skill_name) == ProgressStatus::Completed
    }

    /// Minutes logged across every record, declared in the roadmap or not.
    pub fn total_time_minutes(&self) -> u64 {
        self.entries
            .values()
            .map(|e| u64::from(e.time_spent_minutes))
            .sum()
    }

    /// Entries whose completion timestamp is strictly after `cutoff`.
    pub fn completed_after(&self, cutoff: DateTime<Utc>) -> usize {
        self.entries
            .values()
            .filter(|e| e.completed_at.is_some_and(|at| at > cutoff))
            .count()
    }

    /// Progress recorded against names the roadmap does not declare.
    pub fn orphan_count(&self) -> usize {
        self.entries
            .values()
            .filter(|e| e.importance.is_none())
            .count()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
