/// Weights applied to the three sub-scores, in percent.
pub const SKILLS_WEIGHT_PCT: u32 = 40;
pub const PROJECTS_WEIGHT_PCT: u32 = 30;
pub const INTERVIEW_WEIGHT_PCT: u32 = 30;

/// Overall readiness: floor(0.40 * skills + 0.30 * projects + 0.30 * interview).
pub fn compose(skills_pct: u32, projects_pct: u32, interview_pct: u32) -> u32 {
    (SKILLS_WEIGHT_PCT * skills_pct
        + PROJECTS_WEIGHT_PCT * projects_pct
        + INTERVIEW_WEIGHT_PCT * interview_pct)
        / 100
}
