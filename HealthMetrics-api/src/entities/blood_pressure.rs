use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use health_metrics_domain::entities::{BloodPressureCategory, BloodPressureResult, DisplayColor, RiskLevel};

/// Successful blood pressure categorization
#[derive(Debug, Serialize, ToSchema)]
pub struct BloodPressureCalculationResponse {
    /// Identifier of this calculation, for log correlation
    pub calculation_id: Uuid,

    /// When the calculation was performed
    pub calculated_at: DateTime<Utc>,

    pub result: BloodPressureResult,
}

impl BloodPressureCalculationResponse {
    pub fn new(result: BloodPressureResult) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            calculated_at: Utc::now(),
            result,
        }
    }
}

/// One row of the blood pressure reference table
#[derive(Debug, Serialize, ToSchema)]
pub struct BloodPressureCategoryInfo {
    pub category: BloodPressureCategory,
    /// Abbreviated label, e.g. "High BP (Stage 1)"
    pub label: String,
    /// Range as displayed, e.g. "130-139/80-89 mmHg"
    pub range: String,
    pub color: DisplayColor,
    pub risk_level: RiskLevel,
    /// Risk as shown in the panel, e.g. "Medium"
    pub risk_label: String,
    pub risk_color: DisplayColor,
}

impl From<BloodPressureCategory> for BloodPressureCategoryInfo {
    fn from(category: BloodPressureCategory) -> Self {
        Self {
            category,
            label: category.short_label().to_string(),
            range: category.range_label().to_string(),
            color: category.color(),
            risk_level: category.risk_level(),
            risk_label: category.risk_level().display_label().to_string(),
            risk_color: category.risk_level().color(),
        }
    }
}
