//! Validation utilities for the Agri-Pro field planning platform

use rust_decimal::Decimal;
use validator::Validate;

use crate::models::{CalculatedData, EstimateRequest, Rect};
use crate::types::GpsCoordinates;

/// Validate an estimate request before it is sent to the provider
pub fn validate_estimate_request(request: &EstimateRequest) -> Result<(), &'static str> {
    if request.crop_name.trim().is_empty() {
        return Err("Crop name must not be empty");
    }
    if request.field_size_hectares <= Decimal::ZERO {
        return Err("Field size must be a positive number of hectares");
    }
    Ok(())
}

/// Validate an estimate bundle returned by the provider.
///
/// Task-calendar day violations are tolerated (the timeline clamps them);
/// see [`task_calendar_warnings`] for reporting them.
pub fn validate_calculated_data(data: &CalculatedData) -> Result<(), &'static str> {
    if data.estimated_yield_per_hectare_kg < Decimal::ZERO
        || data.water_needs_liter_per_hectare_per_day < Decimal::ZERO
        || data.labor_needs_hours_per_hectare < Decimal::ZERO
        || data.estimated_plants_per_hectare < Decimal::ZERO
    {
        return Err("Per-hectare rates cannot be negative");
    }
    Ok(())
}

/// Describe task-calendar entries that violate the day-offset invariant
pub fn task_calendar_warnings(data: &CalculatedData) -> Vec<String> {
    let total = data.estimated_growth_time_days;
    let mut warnings = Vec::new();
    for task in &data.task_calendar {
        if task.end_day < task.start_day {
            warnings.push(format!(
                "task '{}' ends on day {} before it starts on day {}",
                task.task, task.end_day, task.start_day
            ));
        }
        if task.end_day > total {
            warnings.push(format!(
                "task '{}' runs to day {} beyond the {}-day cycle",
                task.task, task.end_day, total
            ));
        }
    }
    warnings
}

/// Validate a candidate zone rectangle from the draw gesture
pub fn validate_zone_rect(rect: &Rect) -> Result<(), &'static str> {
    if !rect.meets_minimum_size() {
        return Err("Zone is below the minimum drawable size");
    }
    Ok(())
}

/// Validate GPS coordinates
pub fn validate_coordinates(coordinates: &GpsCoordinates) -> Result<(), String> {
    coordinates.validate().map_err(|e| e.to_string())
}
