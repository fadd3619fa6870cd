// File: crates/linechart-core/src/error.rs
// Summary: Configuration and ingestion errors. Rendering itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid color '{0}': expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidColor(String),
    #[error("invalid records: {0}")]
    InvalidRecords(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
