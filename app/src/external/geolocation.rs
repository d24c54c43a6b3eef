//! Geolocation provider
//!
//! Yields the device position or one of the four enumerated failure
//! reasons. The dependent weather display is simply omitted on failure;
//! nothing retries automatically.

use async_trait::async_trait;

use shared::types::{GpsCoordinates, LocationError};
use shared::validation::validate_coordinates;

/// Produces the coordinates the weather forecast is fetched for
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    async fn locate(&self) -> Result<GpsCoordinates, LocationError>;
}

/// Provider pinned to configured coordinates
pub struct FixedLocationProvider {
    coordinates: GpsCoordinates,
}

impl FixedLocationProvider {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        let coordinates = GpsCoordinates::new(latitude, longitude);
        validate_coordinates(&coordinates).map_err(LocationError::Unknown)?;
        Ok(Self { coordinates })
    }
}

#[async_trait]
impl GeolocationProvider for FixedLocationProvider {
    async fn locate(&self) -> Result<GpsCoordinates, LocationError> {
        Ok(self.coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_provider_returns_configured_position() {
        let provider = FixedLocationProvider::new(5.36, -4.01).unwrap();
        let position = provider.locate().await.unwrap();
        assert_eq!(position, GpsCoordinates::new(5.36, -4.01));
    }

    #[test]
    fn test_fixed_provider_rejects_invalid_coordinates() {
        let result = FixedLocationProvider::new(95.0, 0.0);
        assert!(matches!(result, Err(LocationError::Unknown(_))));
    }

    #[test]
    fn test_failure_reasons_are_descriptive() {
        assert_eq!(
            LocationError::PermissionDenied.to_string(),
            "Location permission denied"
        );
        assert_eq!(
            LocationError::Timeout.to_string(),
            "Location request timed out"
        );
    }
}
