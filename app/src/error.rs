//! Error handling for the Agri-Pro application
//!
//! No error here is fatal; each is scoped to the operation that raised it.

use shared::types::LocationError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The AI call failed or returned an unparsable payload. Recoverable by
    /// retrying the wizard step.
    #[error("Estimate generation failed: {0}")]
    EstimateGeneration(String),

    /// The forecast could not be fetched; the weather widget is omitted.
    #[error("Weather fetch failed: {0}")]
    WeatherFetch(String),

    /// Device location unavailable, with one of four sub-reasons.
    #[error(transparent)]
    Location(#[from] LocationError),

    /// Local persistence is best-effort; callers log this, never surface it.
    #[error("Store persistence failed: {0}")]
    StorePersist(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
