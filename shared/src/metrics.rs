//! Derived field metrics
//!
//! Pure conversions from per-hectare estimate rates to whole-field totals.
//! No rounding happens here; display surfaces round as they see fit.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::CalculatedData;

/// Whole-field totals derived from an estimate and the field size
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldMetrics {
    pub total_yield_tonnes: Decimal,
    pub total_labor_hours: Decimal,
    pub total_plants: Decimal,
    pub total_water_m3: Decimal,
}

impl FieldMetrics {
    pub fn compute(data: &CalculatedData, field_size_hectares: Decimal) -> Self {
        let thousand = Decimal::from(1000);
        let growth_days = Decimal::from(data.estimated_growth_time_days);
        Self {
            // kg -> t
            total_yield_tonnes: data.estimated_yield_per_hectare_kg * field_size_hectares / thousand,
            total_labor_hours: data.labor_needs_hours_per_hectare * field_size_hectares,
            total_plants: data.estimated_plants_per_hectare * field_size_hectares,
            // liters over the full cycle -> m³
            total_water_m3: data.water_needs_liter_per_hectare_per_day
                * field_size_hectares
                * growth_days
                / thousand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn data(yield_kg: u32, water: u32, labor: u32, plants: u32, days: u32) -> CalculatedData {
        CalculatedData {
            estimated_growth_time_days: days,
            estimated_yield_per_hectare_kg: Decimal::from(yield_kg),
            water_needs_liter_per_hectare_per_day: Decimal::from(water),
            labor_needs_hours_per_hectare: Decimal::from(labor),
            task_calendar: Vec::new(),
            estimated_plants_per_hectare: Decimal::from(plants),
            estimated_bags: 0,
        }
    }

    #[test]
    fn test_yield_conversion_is_exact() {
        let metrics = FieldMetrics::compute(&data(2000, 0, 0, 0, 90), dec("2.5"));
        assert_eq!(metrics.total_yield_tonnes, dec("5.0"));
    }

    #[test]
    fn test_labor_and_plants_scale_linearly() {
        let metrics = FieldMetrics::compute(&data(0, 0, 120, 10000, 90), dec("3"));
        assert_eq!(metrics.total_labor_hours, Decimal::from(360));
        assert_eq!(metrics.total_plants, Decimal::from(30000));
    }

    #[test]
    fn test_water_accounts_for_full_cycle() {
        // 5000 L/ha/day * 2 ha * 100 days = 1_000_000 L = 1000 m³
        let metrics = FieldMetrics::compute(&data(0, 5000, 0, 0, 100), Decimal::from(2));
        assert_eq!(metrics.total_water_m3, Decimal::from(1000));
    }

    #[test]
    fn test_zero_growth_time_zeroes_water_only() {
        let metrics = FieldMetrics::compute(&data(1000, 5000, 10, 100, 0), Decimal::from(1));
        assert_eq!(metrics.total_water_m3, Decimal::ZERO);
        assert_eq!(metrics.total_yield_tonnes, Decimal::ONE);
    }
}
