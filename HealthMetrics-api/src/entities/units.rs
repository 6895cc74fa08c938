use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unit toggle on a panel input field
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UnitToggleRequest {
    /// Field text as currently entered
    #[serde(default, deserialize_with = "health_metrics_domain::entities::parsing::deserialize_field_text")]
    pub value: String,

    /// Unit the field was entered in
    pub from: String,

    /// Newly selected unit
    pub to: String,
}

/// Field text to display after the unit toggle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UnitToggleResponse {
    /// Re-rendered text, or the text as entered when it held nothing numeric
    pub value: String,

    /// Newly selected unit
    pub unit: String,

    /// Whether the text was converted
    pub converted: bool,

    /// Value in kilograms or centimeters, when the text is numeric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_value: Option<f64>,
}
