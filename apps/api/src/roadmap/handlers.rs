//! Axum route handlers for the Roadmap API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::progress::{ProgressRecord, ProgressStatus};
use crate::models::roadmap::{Phase, Project, Roadmap, RoadmapStatus, SkillDefinition};
use crate::roadmap::store::{owned_roadmap, StatusUpdate};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// A roadmap as produced by the generation step.
#[derive(Debug, Deserialize)]
pub struct RegisterRoadmapRequest {
    pub user_id: Uuid,
    pub job_title: String,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub skill_level: Option<String>,
    #[serde(default)]
    pub estimated_weeks: Option<u32>,
    #[serde(default)]
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoadmapSummary {
    pub id: Uuid,
    pub job_title: String,
    pub industry: Option<String>,
    pub skill_level: Option<String>,
    pub completion_percentage: u32,
    pub estimated_weeks: Option<u32>,
    pub status: RoadmapStatus,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SkillProgressView {
    pub status: ProgressStatus,
    pub time_spent_minutes: u32,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SkillWithProgress {
    #[serde(flatten)]
    pub skill: SkillDefinition,
    pub progress: SkillProgressView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PhaseWithProgress {
    pub name: String,
    pub description: Option<String>,
    pub skills: Vec<SkillWithProgress>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoadmapDetailResponse {
    #[serde(flatten)]
    pub summary: RoadmapSummary,
    pub job_description: Option<String>,
    pub phases: Vec<PhaseWithProgress>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
pub struct ProgressUpdateRequest {
    pub user_id: Uuid,
    pub roadmap_id: Uuid,
    pub skill_name: String,
    pub status: ProgressStatus,
}

#[derive(Debug, Deserialize)]
pub struct TimeLogRequest {
    pub user_id: Uuid,
    pub roadmap_id: Uuid,
    pub skill_name: String,
    pub minutes: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TimeLogResponse {
    pub skill_name: String,
    pub total_time_minutes: u32,
    pub status: ProgressStatus,
}

impl From<&Roadmap> for RoadmapSummary {
    fn from(r: &Roadmap) -> Self {
        Self {
            id: r.id,
            job_title: r.job_title.clone(),
            industry: r.industry.clone(),
            skill_level: r.skill_level.clone(),
            completion_percentage: r.completion_percentage,
            estimated_weeks: r.estimated_weeks,
            status: r.status.clone(),
            generated_at: r.generated_at,
        }
    }
}

fn validate_roadmap_request(req: &RegisterRoadmapRequest) -> Result<(), AppError> {
    if req.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }
    for phase in &req.phases {
        if phase.skills.iter().any(|s| s.name.trim().is_empty()) {
            return Err(AppError::Validation(format!(
                "phase '{}' contains a skill without a name",
                phase.name
            )));
        }
    }
    Ok(())
}

/// Lays each skill's progress next to its definition. Untouched skills show
/// as not started.
fn merge_progress(phases: &[Phase], progress: &[ProgressRecord]) -> Vec<PhaseWithProgress> {
    phases
        .iter()
        .map(|phase| PhaseWithProgress {
            name: phase.name.clone(),
            description: phase.description.clone(),
            skills: phase
                .skills
                .iter()
                .map(|skill| {
                    let record = progress.iter().find(|p| p.skill_name == skill.name);
                    SkillWithProgress {
                        skill: skill.clone(),
                        progress: SkillProgressView {
                            status: record.map(|r| r.status).unwrap_or_default(),
                            time_spent_minutes: record.map(|r| r.time_spent_minutes).unwrap_or(0),
                            completed_at: record.and_then(|r| r.completed_at),
                        },
                    }
                })
                .collect(),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/roadmaps
pub async fn handle_register_roadmap(
    State(state): State<AppState>,
    Json(req): Json<RegisterRoadmapRequest>,
) -> Result<(StatusCode, Json<Roadmap>), AppError> {
    validate_roadmap_request(&req)?;

    let roadmap = Roadmap {
        id: Uuid::new_v4(),
        user_id: req.user_id,
        job_title: req.job_title,
        job_description: req.job_description,
        industry: req.industry,
        skill_level: req.skill_level,
        estimated_weeks: req.estimated_weeks,
        phases: req.phases,
        projects: req.projects,
        status: RoadmapStatus::Active,
        completion_percentage: 0,
        generated_at: req.generated_at.unwrap_or_else(|| state.clock.now()),
    };

    state.store.insert(roadmap.clone()).await?;
    Ok((StatusCode::CREATED, Json(roadmap)))
}

/// GET /api/v1/roadmaps
pub async fn handle_list_roadmaps(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<RoadmapSummary>>, AppError> {
    let roadmaps = state.store.list_for_user(params.user_id).await?;
    Ok(Json(roadmaps.iter().map(RoadmapSummary::from).collect()))
}

/// GET /api/v1/roadmaps/:id
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Path(roadmap_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<RoadmapDetailResponse>, AppError> {
    let snapshot = owned_roadmap(state.store.as_ref(), roadmap_id, params.user_id).await?;
    let roadmap = &snapshot.roadmap;

    Ok(Json(RoadmapDetailResponse {
        summary: RoadmapSummary::from(roadmap),
        job_description: roadmap.job_description.clone(),
        phases: merge_progress(&roadmap.phases, &snapshot.progress),
        projects: roadmap.projects.clone(),
    }))
}

/// DELETE /api/v1/roadmaps/:id
///
/// Removes the roadmap and, with it, every progress record.
pub async fn handle_delete_roadmap(
    State(state): State<AppState>,
    Path(roadmap_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    owned_roadmap(state.store.as_ref(), roadmap_id, params.user_id).await?;
    state.store.delete(roadmap_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/roadmaps/progress
pub async fn handle_update_progress(
    State(state): State<AppState>,
    Json(req): Json<ProgressUpdateRequest>,
) -> Result<Json<StatusUpdate>, AppError> {
    owned_roadmap(state.store.as_ref(), req.roadmap_id, req.user_id).await?;

    let update = state
        .store
        .set_status(req.roadmap_id, &req.skill_name, req.status, state.clock.now())
        .await?;
    Ok(Json(update))
}

/// POST /api/v1/roadmaps/time-log
pub async fn handle_log_time(
    State(state): State<AppState>,
    Json(req): Json<TimeLogRequest>,
) -> Result<Json<TimeLogResponse>, AppError> {
    if req.minutes == 0 {
        return Err(AppError::Validation("minutes must be positive".to_string()));
    }
    owned_roadmap(state.store.as_ref(), req.roadmap_id, req.user_id).await?;

    let record = state
        .store
        .log_time(req.roadmap_id, &req.skill_name, req.minutes)
        .await?;
    Ok(Json(TimeLogResponse {
        skill_name: record.skill_name,
        total_time_minutes: record.time_spent_minutes,
        status: record.status,
    }))
}
