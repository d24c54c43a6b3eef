//! Agronomic estimate provider
//!
//! The real system asks a generative model for crop estimates and parses the
//! reply into `CalculatedData`. Real integration stays out of scope; the
//! trait below is the seam, [`parse_estimate_json`] is the shared response
//! parser, and [`MockEstimateProvider`] is a deterministic agronomic table.

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use shared::models::{CalculatedData, EstimateRequest, Task};
use shared::types::{IrrigationSystem, SoilType};
use shared::validation::{task_calendar_warnings, validate_calculated_data, validate_estimate_request};

use crate::error::{AppError, AppResult};

/// Produces the agronomic estimate bundle for a crop/field configuration
#[async_trait]
pub trait EstimateProvider: Send + Sync {
    async fn generate(&self, request: &EstimateRequest) -> AppResult<CalculatedData>;
}

/// Parse a raw provider payload into `CalculatedData`.
///
/// Partial responses are never interpreted: any transport artifact, missing
/// field or invalid rate collapses into one descriptive error. Task-calendar
/// day violations are tolerated and logged.
pub fn parse_estimate_json(raw: &str) -> AppResult<CalculatedData> {
    let data: CalculatedData = serde_json::from_str(raw.trim())
        .map_err(|e| AppError::EstimateGeneration(format!("unparsable estimate payload: {e}")))?;
    validate_calculated_data(&data).map_err(|msg| AppError::EstimateGeneration(msg.to_string()))?;
    for warning in task_calendar_warnings(&data) {
        tracing::warn!("estimate task calendar: {warning}");
    }
    Ok(data)
}

/// Base agronomic profile for one crop
struct CropProfile {
    growth_time_days: u32,
    yield_per_hectare_kg: i64,
    water_liter_per_hectare_per_day: i64,
    labor_hours_per_hectare: i64,
    plants_per_hectare: i64,
}

fn crop_profile(crop_name: &str) -> CropProfile {
    match crop_name {
        "Manioc" => CropProfile {
            growth_time_days: 270,
            yield_per_hectare_kg: 12_000,
            water_liter_per_hectare_per_day: 3_500,
            labor_hours_per_hectare: 220,
            plants_per_hectare: 10_000,
        },
        "Maïs" => CropProfile {
            growth_time_days: 110,
            yield_per_hectare_kg: 2_500,
            water_liter_per_hectare_per_day: 4_500,
            labor_hours_per_hectare: 120,
            plants_per_hectare: 62_500,
        },
        "Igname" => CropProfile {
            growth_time_days: 240,
            yield_per_hectare_kg: 15_000,
            water_liter_per_hectare_per_day: 3_000,
            labor_hours_per_hectare: 260,
            plants_per_hectare: 10_000,
        },
        "Riz" => CropProfile {
            growth_time_days: 130,
            yield_per_hectare_kg: 4_500,
            water_liter_per_hectare_per_day: 10_000,
            labor_hours_per_hectare: 300,
            plants_per_hectare: 200_000,
        },
        "Cacao" => CropProfile {
            growth_time_days: 365,
            yield_per_hectare_kg: 600,
            water_liter_per_hectare_per_day: 2_500,
            labor_hours_per_hectare: 180,
            plants_per_hectare: 1_100,
        },
        _ => CropProfile {
            growth_time_days: 120,
            yield_per_hectare_kg: 3_000,
            water_liter_per_hectare_per_day: 4_000,
            labor_hours_per_hectare: 150,
            plants_per_hectare: 20_000,
        },
    }
}

fn soil_yield_factor(soil: SoilType) -> Decimal {
    match soil {
        SoilType::Fertile => Decimal::new(115, 2),
        SoilType::Limoneux => Decimal::new(105, 2),
        SoilType::Argileux => Decimal::new(95, 2),
        SoilType::Sableux => Decimal::new(85, 2),
    }
}

fn irrigation_water_factor(system: IrrigationSystem) -> Decimal {
    match system {
        IrrigationSystem::GoutteAGoutte => Decimal::new(80, 2),
        IrrigationSystem::Aspersion => Decimal::ONE,
        IrrigationSystem::Manuel => Decimal::new(110, 2),
        IrrigationSystem::Aucun => Decimal::new(125, 2),
    }
}

fn task_calendar(total_days: u32) -> Vec<Task> {
    let at = |percent: u32| total_days * percent / 100;
    let entry = |name: &str, start_day: u32, end_day: u32, description: &str| Task {
        task: name.to_string(),
        start_day,
        end_day,
        description: description.to_string(),
    };
    vec![
        entry("Préparation du sol", 0, at(5).max(3), "Labour et nivellement de la parcelle"),
        entry("Plantation", at(5), at(8).max(at(5) + 2), "Mise en terre des plants ou boutures"),
        entry("Arrosage régulier", at(8), at(90), "Maintien de l'humidité du sol sur tout le cycle"),
        entry("Désherbage", at(20), at(30), "Élimination manuelle ou mécanique des adventices"),
        entry("Traitement phytosanitaire", at(40), at(45), "Surveillance et traitement des ravageurs"),
        entry("Fertilisation", at(50), at(55), "Apport d'engrais adapté au stade de croissance"),
        entry("Récolte", at(92), total_days, "Récolte et conditionnement de la production"),
    ]
}

/// Deterministic estimate provider.
///
/// Yields scale with the soil type and water needs with the irrigation
/// system, so two identical requests always produce identical bundles.
pub struct MockEstimateProvider;

#[async_trait]
impl EstimateProvider for MockEstimateProvider {
    async fn generate(&self, request: &EstimateRequest) -> AppResult<CalculatedData> {
        validate_estimate_request(request).map_err(|msg| AppError::Validation(msg.to_string()))?;

        let profile = crop_profile(&request.crop_name);
        let yield_per_hectare_kg =
            Decimal::from(profile.yield_per_hectare_kg) * soil_yield_factor(request.soil_type);
        let water_needs = Decimal::from(profile.water_liter_per_hectare_per_day)
            * irrigation_water_factor(request.irrigation_system);
        let total_yield_kg = yield_per_hectare_kg * request.field_size_hectares;
        let estimated_bags = (total_yield_kg / Decimal::from(50))
            .round()
            .to_u32()
            .unwrap_or(u32::MAX);

        tracing::debug!(
            crop = %request.crop_name,
            soil = %request.soil_type,
            irrigation = %request.irrigation_system,
            "generated agronomic estimate"
        );

        Ok(CalculatedData {
            estimated_growth_time_days: profile.growth_time_days,
            estimated_yield_per_hectare_kg: yield_per_hectare_kg,
            water_needs_liter_per_hectare_per_day: water_needs,
            labor_needs_hours_per_hectare: Decimal::from(profile.labor_hours_per_hectare),
            task_calendar: task_calendar(profile.growth_time_days),
            estimated_plants_per_hectare: Decimal::from(profile.plants_per_hectare),
            estimated_bags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(crop: &str) -> EstimateRequest {
        EstimateRequest {
            crop_name: crop.to_string(),
            field_size_hectares: Decimal::from(2),
            soil_type: SoilType::Fertile,
            irrigation_system: IrrigationSystem::GoutteAGoutte,
        }
    }

    #[tokio::test]
    async fn test_mock_estimates_are_deterministic() {
        let provider = MockEstimateProvider;
        let first = provider.generate(&request("Manioc")).await.unwrap();
        let second = provider.generate(&request("Manioc")).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.estimated_growth_time_days, 270);
    }

    #[tokio::test]
    async fn test_soil_adjusts_yield() {
        let provider = MockEstimateProvider;
        let fertile = provider.generate(&request("Maïs")).await.unwrap();
        let mut sandy_request = request("Maïs");
        sandy_request.soil_type = SoilType::Sableux;
        let sandy = provider.generate(&sandy_request).await.unwrap();
        assert!(fertile.estimated_yield_per_hectare_kg > sandy.estimated_yield_per_hectare_kg);
    }

    #[tokio::test]
    async fn test_unknown_crop_falls_back() {
        let provider = MockEstimateProvider;
        let data = provider.generate(&request("Sorgho")).await.unwrap();
        assert_eq!(data.estimated_growth_time_days, 120);
        assert!(!data.task_calendar.is_empty());
    }

    #[tokio::test]
    async fn test_empty_crop_rejected() {
        let provider = MockEstimateProvider;
        let result = provider.generate(&request("  ")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_parse_accepts_original_schema() {
        let payload = r#"{
            "estimatedGrowthTimeDays": 90,
            "estimatedYieldPerHectareKg": 1200,
            "waterNeedsLiterPerHectarePerDay": 5000,
            "laborNeedsHoursPerHectare": 120,
            "estimatedPlantsPerHectare": 10000,
            "estimatedBags": 72,
            "taskCalendar": [
                {"task": "Plantation", "startDay": 0, "endDay": 5, "description": "Semis"}
            ]
        }"#;
        let data = parse_estimate_json(payload).unwrap();
        assert_eq!(data.estimated_bags, 72);
        assert_eq!(data.task_calendar.len(), 1);
    }

    #[test]
    fn test_parse_rejects_missing_field_with_one_error() {
        let payload = r#"{"estimatedGrowthTimeDays": 90}"#;
        let err = parse_estimate_json(payload).unwrap_err();
        assert!(matches!(err, AppError::EstimateGeneration(_)));
        assert!(err.to_string().contains("unparsable estimate payload"));
    }

    #[test]
    fn test_parse_rejects_negative_rate() {
        let payload = r#"{
            "estimatedGrowthTimeDays": 90,
            "estimatedYieldPerHectareKg": -5,
            "waterNeedsLiterPerHectarePerDay": 5000,
            "laborNeedsHoursPerHectare": 120,
            "estimatedPlantsPerHectare": 10000,
            "estimatedBags": 72,
            "taskCalendar": []
        }"#;
        assert!(parse_estimate_json(payload).is_err());
    }
}
