use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use health_metrics_domain::entities::{BmiCategory, BmiResult, DisplayColor};

/// Successful BMI calculation
#[derive(Debug, Serialize, ToSchema)]
pub struct BmiCalculationResponse {
    /// Identifier of this calculation, for log correlation
    pub calculation_id: Uuid,

    /// When the calculation was performed
    pub calculated_at: DateTime<Utc>,

    pub result: BmiResult,
}

impl BmiCalculationResponse {
    pub fn new(result: BmiResult) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            calculated_at: Utc::now(),
            result,
        }
    }
}

/// One row of the BMI reference table
#[derive(Debug, Serialize, ToSchema)]
pub struct BmiCategoryInfo {
    pub category: BmiCategory,
    /// BMI range as displayed, e.g. "18.5 - 24.9"
    pub range: String,
    pub color: DisplayColor,
}

impl From<BmiCategory> for BmiCategoryInfo {
    fn from(category: BmiCategory) -> Self {
        Self {
            category,
            range: category.range_label().to_string(),
            color: category.color(),
        }
    }
}
