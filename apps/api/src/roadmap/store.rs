//! Roadmap store: pluggable, trait-based persistence for roadmaps and their
//! progress records.
//!
//! Default: `InMemoryRoadmapStore` (process-local, lost on restart).
//! `AppState` holds an `Arc<dyn RoadmapStore>`, chosen at startup.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::progress::{ProgressRecord, ProgressStatus};
use crate::models::roadmap::{Roadmap, RoadmapStatus};
use crate::roadmap::progress;

/// A roadmap together with every progress record written against it.
#[derive(Debug, Clone)]
pub struct RoadmapSnapshot {
    pub roadmap: Roadmap,
    pub progress: Vec<ProgressRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub skill_name: String,
    pub status: ProgressStatus,
    pub roadmap_completion: u32,
}

#[async_trait]
pub trait RoadmapStore: Send + Sync {
    async fn insert(&self, roadmap: Roadmap) -> Result<(), AppError>;

    async fn get(&self, roadmap_id: Uuid) -> Result<Option<RoadmapSnapshot>, AppError>;

    /// The user's roadmaps, most recently generated first.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Roadmap>, AppError>;

    /// Sets a skill's status and refreshes the roadmap's completion percentage.
    async fn set_status(
        &self,
        roadmap_id: Uuid,
        skill_name: &str,
        status: ProgressStatus,
        now: DateTime<Utc>,
    ) -> Result<StatusUpdate, AppError>;

    /// Adds study minutes to a skill that already has a progress record.
    async fn log_time(
        &self,
        roadmap_id: Uuid,
        skill_name: &str,
        minutes: u32,
    ) -> Result<ProgressRecord, AppError>;

    /// Removes a roadmap together with all of its progress records.
    async fn delete(&self, roadmap_id: Uuid) -> Result<(), AppError>;
}

/// Loads a roadmap only if it belongs to `user_id`.
pub async fn owned_roadmap(
    store: &dyn RoadmapStore,
    roadmap_id: Uuid,
    user_id: Uuid,
) -> Result<RoadmapSnapshot, AppError> {
    store
        .get(roadmap_id)
        .await?
        .filter(|s| s.roadmap.user_id == user_id)
        .ok_or_else(|| AppError::NotFound(format!("Roadmap {roadmap_id} not found")))
}

/// Picks the roadmap to score: the requested one if the user owns it,
/// otherwise the user's most recently generated active roadmap.
pub async fn select_roadmap(
    store: &dyn RoadmapStore,
    user_id: Uuid,
    roadmap_id: Option<Uuid>,
) -> Result<Option<RoadmapSnapshot>, AppError> {
    if let Some(id) = roadmap_id {
        let snapshot = store.get(id).await?;
        return Ok(snapshot.filter(|s| s.roadmap.user_id == user_id));
    }

    let latest_active = store
        .list_for_user(user_id)
        .await?
        .into_iter()
        .find(|r| r.status == RoadmapStatus::Active);

    match latest_active {
        Some(roadmap) => store.get(roadmap.id).await,
        None => Ok(None),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// InMemoryRoadmapStore
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryRoadmapStore {
    roadmaps: RwLock<HashMap<Uuid, RoadmapSnapshot>>,
}

impl InMemoryRoadmapStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn roadmap_not_found(roadmap_id: Uuid) -> AppError {
    AppError::NotFound(format!("Roadmap {roadmap_id} not found"))
}

fn skill_not_found(skill_name: &str) -> AppError {
    AppError::NotFound(format!("Skill '{skill_name}' not found in roadmap"))
}

#[async_trait]
impl RoadmapStore for InMemoryRoadmapStore {
    async fn insert(&self, roadmap: Roadmap) -> Result<(), AppError> {
        let mut roadmaps = self.roadmaps.write().await;
        if roadmaps.contains_key(&roadmap.id) {
            return Err(AppError::Validation(format!(
                "Roadmap {} already exists",
                roadmap.id
            )));
        }
        info!(roadmap_id = %roadmap.id, user_id = %roadmap.user_id, "Roadmap stored");
        roadmaps.insert(
            roadmap.id,
            RoadmapSnapshot {
                roadmap,
                progress: vec![],
            },
        );
        Ok(())
    }

    async fn get(&self, roadmap_id: Uuid) -> Result<Option<RoadmapSnapshot>, AppError> {
        Ok(self.roadmaps.read().await.get(&roadmap_id).cloned())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Roadmap>, AppError> {
        let roadmaps = self.roadmaps.read().await;
        let mut owned: Vec<Roadmap> = roadmaps
            .values()
            .filter(|s| s.roadmap.user_id == user_id)
            .map(|s| s.roadmap.clone())
            .collect();
        owned.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
        Ok(owned)
    }

    async fn set_status(
        &self,
        roadmap_id: Uuid,
        skill_name: &str,
        status: ProgressStatus,
        now: DateTime<Utc>,
    ) -> Result<StatusUpdate, AppError> {
        let mut roadmaps = self.roadmaps.write().await;
        let snapshot = roadmaps
            .get_mut(&roadmap_id)
            .ok_or_else(|| roadmap_not_found(roadmap_id))?;
        if !snapshot.roadmap.declares_skill(skill_name) {
            return Err(skill_not_found(skill_name));
        }

        let record = progress::apply_status(&mut snapshot.progress, skill_name, status, now);
        if let Some(pct) = progress::completion_percentage(&snapshot.progress) {
            snapshot.roadmap.completion_percentage = pct;
        }

        info!(
            %roadmap_id,
            skill = skill_name,
            status = ?record.status,
            completion = snapshot.roadmap.completion_percentage,
            "Skill progress updated"
        );

        Ok(StatusUpdate {
            skill_name: record.skill_name,
            status: record.status,
            roadmap_completion: snapshot.roadmap.completion_percentage,
        })
    }

    async fn log_time(
        &self,
        roadmap_id: Uuid,
        skill_name: &str,
        minutes: u32,
    ) -> Result<ProgressRecord, AppError> {
        let mut roadmaps = self.roadmaps.write().await;
        let snapshot = roadmaps
            .get_mut(&roadmap_id)
            .ok_or_else(|| roadmap_not_found(roadmap_id))?;

        let record = progress::log_time(&mut snapshot.progress, skill_name, minutes)
            .ok_or_else(|| skill_not_found(skill_name))?;

        info!(
            %roadmap_id,
            skill = skill_name,
            minutes,
            total = record.time_spent_minutes,
            "Study time logged"
        );
        Ok(record)
    }

    async fn delete(&self, roadmap_id: Uuid) -> Result<(), AppError> {
        let removed = self
            .roadmaps
            .write()
            .await
            .remove(&roadmap_id)
            .ok_or_else(|| roadmap_not_found(roadmap_id))?;

        info!(
            %roadmap_id,
            progress_records = removed.progress.len(),
            "Roadmap deleted"
        );
        Ok(())
    }
}
