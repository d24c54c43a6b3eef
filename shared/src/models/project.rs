//! Project models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CalculatedData;
use crate::types::{timestamp_id, IrrigationSystem, SoilType};

/// Crops offered by the planning wizard
pub const AVAILABLE_CROPS: [&str; 5] = ["Manioc", "Maïs", "Igname", "Riz", "Cacao"];

/// Display format for project creation dates
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// An agricultural planning project
///
/// Created once by the wizard flow after the estimate is accepted and never
/// updated in place. The creation date is stored as a calendar date and the
/// `dd/mm/yyyy` display string is derived from it, so schedule math never
/// re-parses a localized string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub crop_name: String,
    pub field_size_hectares: Decimal,
    pub soil_type: SoilType,
    pub irrigation_system: IrrigationSystem,
    pub created_on: NaiveDate,
    pub calculated_data: CalculatedData,
}

impl Project {
    pub fn new(
        crop_name: String,
        field_size_hectares: Decimal,
        soil_type: SoilType,
        irrigation_system: IrrigationSystem,
        created_on: NaiveDate,
        calculated_data: CalculatedData,
    ) -> Self {
        Self {
            id: timestamp_id(),
            crop_name,
            field_size_hectares,
            soil_type,
            irrigation_system,
            created_on,
            calculated_data,
        }
    }

    /// Creation date in the `dd/mm/yyyy` display form
    pub fn creation_date_display(&self) -> String {
        self.created_on.format(DISPLAY_DATE_FORMAT).to_string()
    }

    /// Parse a legacy `dd/mm/yyyy` display string into a calendar date
    pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value, DISPLAY_DATE_FORMAT).ok()
    }
}
