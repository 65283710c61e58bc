//! Error types for the adhtc-app service layer.

use std::path::PathBuf;

/// Unified error for the CLI over every backend crate.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Plant file error: {0}")]
    Plant(String),

    #[error("Plant validation failed: {0}")]
    Validation(String),

    #[error("Invalid engine input: {0}")]
    Engine(String),

    #[error("Diagram unavailable: {0}")]
    DiagramUnavailable(String),

    #[error("Diagram export failed: {0}")]
    Diagram(String),

    #[error("Failed to write report: {path}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read report: {path}")]
    ReportRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Report serialization failed: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for adhtc-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<adhtc_project::ProjectError> for AppError {
    fn from(err: adhtc_project::ProjectError) -> Self {
        match err {
            adhtc_project::ProjectError::Validation(v) => AppError::Validation(v.to_string()),
            other => AppError::Plant(other.to_string()),
        }
    }
}

impl From<adhtc_project::ValidationError> for AppError {
    fn from(err: adhtc_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<adhtc_engines::EngineError> for AppError {
    fn from(err: adhtc_engines::EngineError) -> Self {
        AppError::Engine(err.to_string())
    }
}

impl From<adhtc_diagram::DiagramError> for AppError {
    fn from(err: adhtc_diagram::DiagramError) -> Self {
        AppError::Diagram(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
