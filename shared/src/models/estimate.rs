//! Agronomic estimate models
//!
//! `CalculatedData` is the structured estimate bundle produced by the AI
//! collaborator for a crop/field configuration. Field names stay
//! wire-compatible with the original JSON schema.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{IrrigationSystem, SoilType};

/// Request sent to the estimate provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub crop_name: String,
    pub field_size_hectares: Decimal,
    pub soil_type: SoilType,
    pub irrigation_system: IrrigationSystem,
}

/// The agronomic estimate bundle for one project, set once at creation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedData {
    /// Total cycle length in days; denominator for all progress math.
    /// A value of 0 is treated as 0 % progress, never as a division.
    pub estimated_growth_time_days: u32,
    pub estimated_yield_per_hectare_kg: Decimal,
    pub water_needs_liter_per_hectare_per_day: Decimal,
    pub labor_needs_hours_per_hectare: Decimal,
    pub task_calendar: Vec<Task>,
    pub estimated_plants_per_hectare: Decimal,
    pub estimated_bags: u32,
}

impl CalculatedData {
    /// The task calendar ordered by start day.
    ///
    /// The producer does not guarantee a sorted calendar, so every display
    /// surface sorts before rendering.
    pub fn sorted_calendar(&self) -> Vec<Task> {
        let mut calendar = self.task_calendar.clone();
        calendar.sort_by_key(|task| task.start_day);
        calendar
    }
}

/// A scheduled activity within the growth cycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub task: String,
    /// 0-based offset from project start
    pub start_day: u32,
    pub end_day: u32,
    pub description: String,
}
