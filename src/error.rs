//! Error handling for turnlab.
//!
//! The engine functions themselves are total and return plain values; only
//! the adapters (catalog loading, storage, config) are fallible.

use std::io;

use thiserror::Error;

/// Main error type for turnlab operations.
#[derive(Error, Debug)]
pub enum TlError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Skill not found: {0}")]
    SkillNotFound(String),

    #[error("Assessment not found: {0}")]
    AssessmentNotFound(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}

/// Result type alias using [`TlError`].
pub type Result<T> = std::result::Result<T, TlError>;
