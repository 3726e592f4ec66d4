// Roadmap registration and the progress write path.
// Roadmaps arrive already generated; this module stores them and records
// per-skill progress against them.

pub mod handlers;
pub mod progress;
pub mod store;

pub use store::{InMemoryRoadmapStore, RoadmapStore};
