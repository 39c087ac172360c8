//! Error types for course analysis.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for building and exporting course statistics.
#[derive(Debug, Error)]
pub enum CourseError {
    /// A declared lesson source does not resolve to readable content.
    /// Aborts the rebuild for the whole course.
    #[error("lesson source not found: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A cross-lesson or export operation was invoked with zero lessons
    /// loaded.
    #[error("no lessons loaded; assign lesson sources before querying course statistics")]
    EmptyCourse,

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV/TSV export error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON export error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for course analysis operations.
pub type Result<T> = std::result::Result<T, CourseError>;
