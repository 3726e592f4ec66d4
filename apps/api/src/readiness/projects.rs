use serde::{Deserialize, Serialize};

use crate::models::roadmap::Roadmap;
use crate::readiness::ledger::Ledger;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProjectsScore {
    pub percentage: u32,
    pub completed: u32,
    pub total: u32,
}

/// A project is complete once every skill it references is complete.
/// Projects that reference no skills are left out of both counts.
pub fn score_projects(roadmap: &Roadmap, ledger: &Ledger) -> ProjectsScore {
    let mut total = 0_u32;
    let mut completed = 0_u32;

    for project in &roadmap.projects {
        if project.skills.is_empty() {
            continue;
        }
        total += 1;
        if project.skills.iter().all(|name| ledger.is_completed(name)) {
            completed += 1;
        }
    }

    if total == 0 {
        return ProjectsScore::default();
    }

    ProjectsScore {
        percentage: 100 * completed / total,
        completed,
        total,
    }
}
