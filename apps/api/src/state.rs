use std::sync::Arc;

use crate::clock::Clock;
use crate::roadmap::RoadmapStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable roadmap/progress store. Default: InMemoryRoadmapStore.
    pub store: Arc<dyn RoadmapStore>,
    /// Evaluation time for readiness scoring and progress timestamps.
    pub clock: Arc<dyn Clock>,
}
