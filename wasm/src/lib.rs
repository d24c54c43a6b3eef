//! WebAssembly module for the Agri-Pro planner
//!
//! Provides client-side computation for:
//! - Field metric totals
//! - Zone geometry and palette assignment
//! - Growth stage and task timing
//! - Task calendar classification

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Compute whole-field totals from an estimate payload
#[wasm_bindgen]
pub fn compute_field_metrics(calculated_data_json: &str, field_size_hectares: f64) -> Result<String, JsValue> {
    let data: CalculatedData = serde_json::from_str(calculated_data_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid estimate JSON: {}", e)))?;
    let size = Decimal::from_f64_retain(field_size_hectares)
        .ok_or_else(|| JsValue::from_str("Invalid field size"))?;

    let metrics = shared::metrics::FieldMetrics::compute(&data, size);
    serde_json::to_string(&metrics).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Real area in hectares of a percentage-space zone rectangle
#[wasm_bindgen]
pub fn zone_area_hectares(width_percent: f64, height_percent: f64, field_size_hectares: f64) -> f64 {
    let rect = Rect {
        x: 0.0,
        y: 0.0,
        width: width_percent,
        height: height_percent,
    };
    let size = Decimal::from_f64_retain(field_size_hectares).unwrap_or(Decimal::ZERO);
    rect.area_hectares(size).to_string().parse().unwrap_or(0.0)
}

/// Whether a candidate rectangle is large enough to keep
#[wasm_bindgen]
pub fn zone_meets_minimum_size(width_percent: f64, height_percent: f64) -> bool {
    let rect = Rect {
        x: 0.0,
        y: 0.0,
        width: width_percent,
        height: height_percent,
    };
    rect.meets_minimum_size()
}

/// Fill color the next zone will take
#[wasm_bindgen]
pub fn next_zone_color(existing_zone_count: usize) -> String {
    ZONE_COLORS[palette_index(existing_zone_count)].to_string()
}

/// Border color the next zone will take
#[wasm_bindgen]
pub fn next_zone_border_color(existing_zone_count: usize) -> String {
    ZONE_BORDER_COLORS[palette_index(existing_zone_count)].to_string()
}

/// Growth stage name for a cycle position
#[wasm_bindgen]
pub fn growth_stage_name(days_passed: u32, total_days: u32) -> String {
    let progress = shared::schedule::progress_percent(days_passed, total_days);
    shared::schedule::current_stage(progress).name.to_string()
}

/// Cycle completion as a percentage
#[wasm_bindgen]
pub fn growth_progress_percent(days_passed: u32, total_days: u32) -> f64 {
    shared::schedule::progress_percent(days_passed, total_days)
}

/// Human label for when a task starts relative to today
#[wasm_bindgen]
pub fn task_start_label(start_day: u32, days_passed: u32) -> String {
    shared::schedule::start_label(start_day, days_passed).to_string()
}

/// Display label of a task's inferred category
#[wasm_bindgen]
pub fn task_category_label(task_name: &str) -> String {
    shared::timeline::classify_task(task_name).label().to_string()
}

/// Color token of a task's inferred category
#[wasm_bindgen]
pub fn task_category_color(task_name: &str) -> String {
    shared::timeline::classify_task(task_name)
        .color_token()
        .to_string()
}
