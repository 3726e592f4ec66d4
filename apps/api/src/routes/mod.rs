pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::readiness::handlers as readiness;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Roadmap API
        .route(
            "/api/v1/roadmaps",
            post(roadmap::handle_register_roadmap).get(roadmap::handle_list_roadmaps),
        )
        .route(
            "/api/v1/roadmaps/progress",
            post(roadmap::handle_update_progress),
        )
        .route("/api/v1/roadmaps/time-log", post(roadmap::handle_log_time))
        .route(
            "/api/v1/roadmaps/:id",
            get(roadmap::handle_get_roadmap).delete(roadmap::handle_delete_roadmap),
        )
        // Readiness API
        .route(
            "/api/v1/readiness/score",
            get(readiness::handle_readiness_score),
        )
        .route(
            "/api/v1/readiness/next-action",
            get(readiness::handle_next_action),
        )
        .route(
            "/api/v1/readiness/weekly-report",
            get(readiness::handle_weekly_report),
        )
        .route(
            "/api/v1/readiness/evaluate",
            post(readiness::handle_evaluate),
        )
        .with_state(state)
}
