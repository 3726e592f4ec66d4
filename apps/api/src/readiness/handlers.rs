//! Axum route handlers for the Readiness API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::progress::ProgressRecord;
use crate::models::roadmap::{Phase, Project, Roadmap, RoadmapStatus};
use crate::readiness::weekly::{weekly_report, WeeklyReport};
use crate::readiness::{build_ledger, evaluate, next_action, NextAction, ReadinessScore};
use crate::roadmap::store::select_roadmap;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReadinessQuery {
    pub user_id: Uuid,
    #[serde(default)]
    pub roadmap_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct WeeklyReportQuery {
    pub user_id: Uuid,
}

/// Inline roadmap and progress, scored without touching the store.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub job_title: String,
    #[serde(default)]
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub progress: Vec<ProgressRecord>,
    /// Defaults to the server clock.
    #[serde(default)]
    pub evaluated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub score: ReadinessScore,
    pub next_action: Option<NextAction>,
    pub evaluated_at: DateTime<Utc>,
}

/// GET /api/v1/readiness/score
pub async fn handle_readiness_score(
    State(state): State<AppState>,
    Query(params): Query<ReadinessQuery>,
) -> Result<Json<ReadinessScore>, AppError> {
    let snapshot = select_roadmap(state.store.as_ref(), params.user_id, params.roadmap_id).await?;

    let score = match snapshot {
        Some(s) => evaluate(&s.roadmap, &s.progress, state.clock.now()),
        None => ReadinessScore::no_roadmap(),
    };
    Ok(Json(score))
}

/// GET /api/v1/readiness/next-action
///
/// `null` when the user has no matching roadmap or has completed every skill.
pub async fn handle_next_action(
    State(state): State<AppState>,
    Query(params): Query<ReadinessQuery>,
) -> Result<Json<Option<NextAction>>, AppError> {
    let snapshot = select_roadmap(state.store.as_ref(), params.user_id, params.roadmap_id).await?;

    let action =
        snapshot.and_then(|s| next_action(&s.roadmap, &build_ledger(&s.roadmap, &s.progress)));
    Ok(Json(action))
}

/// GET /api/v1/readiness/weekly-report
pub async fn handle_weekly_report(
    State(state): State<AppState>,
    Query(params): Query<WeeklyReportQuery>,
) -> Result<Json<WeeklyReport>, AppError> {
    let snapshot = select_roadmap(state.store.as_ref(), params.user_id, None).await?;

    let score = match snapshot {
        Some(s) => evaluate(&s.roadmap, &s.progress, state.clock.now()),
        None => ReadinessScore::no_roadmap(),
    };
    Ok(Json(weekly_report(&score)))
}

/// POST /api/v1/readiness/evaluate
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    if req.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }

    let evaluated_at = req.evaluated_at.unwrap_or_else(|| state.clock.now());
    let roadmap = Roadmap {
        id: Uuid::nil(),
        user_id: Uuid::nil(),
        job_title: req.job_title,
        job_description: None,
        industry: None,
        skill_level: None,
        estimated_weeks: None,
        phases: req.phases,
        projects: req.projects,
        status: RoadmapStatus::Active,
        completion_percentage: 0,
        generated_at: evaluated_at,
    };

    let score = evaluate(&roadmap, &req.progress, evaluated_at);
    let next_action = next_action(&roadmap, &build_ledger(&roadmap, &req.progress));

    Ok(Json(EvaluateResponse {
        score,
        next_action,
        evaluated_at,
    }))
}
