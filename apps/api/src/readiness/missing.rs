use crate::models::roadmap::Roadmap;
use crate::readiness::ledger::Ledger;

/// How many missing skills the score surfaces.
pub const MAX_MISSING_SKILLS: usize = 5;

/// Incomplete critical and important skills, phase by phase in declaration
/// order. Optional skills never show up here. The caller truncates.
pub fn missing_skills(roadmap: &Roadmap, ledger: &Ledger) -> Vec<String> {
    roadmap
        .skills()
        .filter(|(_, skill)| skill.importance.is_required())
        .filter(|(_, skill)| !ledger.is_completed(&skill.name))
        .map(|(_, skill)| skill.name.clone())
        .collect()
}
