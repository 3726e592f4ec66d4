pub mod progress;
pub mod roadmap;
