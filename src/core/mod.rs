//! Core configuration and data model

pub mod config;
pub mod models;

// Re-export the main types for convenience
pub use config::AppConfig;
pub use models::{Language, ScoreTier, SummarizationRequest, SummaryRecord};
