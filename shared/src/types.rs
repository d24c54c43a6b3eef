//! Common types used across the platform

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Validate)]
pub struct GpsCoordinates {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Soil types supported by the planning wizard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SoilType {
    Argileux,
    Limoneux,
    Sableux,
    Fertile,
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilType::Argileux => write!(f, "Argileux"),
            SoilType::Limoneux => write!(f, "Limoneux"),
            SoilType::Sableux => write!(f, "Sableux"),
            SoilType::Fertile => write!(f, "Fertile"),
        }
    }
}

impl std::str::FromStr for SoilType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Argileux" => Ok(SoilType::Argileux),
            "Limoneux" => Ok(SoilType::Limoneux),
            "Sableux" => Ok(SoilType::Sableux),
            "Fertile" => Ok(SoilType::Fertile),
            other => Err(format!("unknown soil type: {other}")),
        }
    }
}

/// Irrigation systems supported by the planning wizard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IrrigationSystem {
    #[serde(rename = "Goutte-à-goutte")]
    GoutteAGoutte,
    Aspersion,
    Manuel,
    Aucun,
}

impl std::fmt::Display for IrrigationSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IrrigationSystem::GoutteAGoutte => write!(f, "Goutte-à-goutte"),
            IrrigationSystem::Aspersion => write!(f, "Aspersion"),
            IrrigationSystem::Manuel => write!(f, "Manuel"),
            IrrigationSystem::Aucun => write!(f, "Aucun"),
        }
    }
}

impl std::str::FromStr for IrrigationSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Goutte-à-goutte" => Ok(IrrigationSystem::GoutteAGoutte),
            "Aspersion" => Ok(IrrigationSystem::Aspersion),
            "Manuel" => Ok(IrrigationSystem::Manuel),
            "Aucun" => Ok(IrrigationSystem::Aucun),
            other => Err(format!("unknown irrigation system: {other}")),
        }
    }
}

/// Reasons a device location can be unavailable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Position unavailable")]
    PositionUnavailable,

    #[error("Location request timed out")]
    Timeout,

    #[error("Location error: {0}")]
    Unknown(String),
}

static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generate an opaque, timestamp-derived identifier.
///
/// The process-local sequence number keeps identifiers unique even when
/// several records are created within the same millisecond.
pub fn timestamp_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let sequence = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{millis}-{sequence:04}")
}
