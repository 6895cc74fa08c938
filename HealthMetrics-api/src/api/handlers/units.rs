use std::fmt::Display;
use std::str::FromStr;

use axum::extract::Json;
use tracing::{debug, instrument};

use health_metrics_domain::entities::parsing::parse_decimal;
use health_metrics_domain::entities::units::{convert_to_metric, rerender_field};
use health_metrics_domain::entities::{HeightUnit, MeasurementUnit, UnitConversionError, WeightUnit};

use crate::entities::common::ErrorResponse;
use crate::entities::units::{UnitToggleRequest, UnitToggleResponse};

/// Re-render a field for a new unit of dimension `U`
pub fn toggle_unit<U>(request: &UnitToggleRequest) -> Result<UnitToggleResponse, UnitConversionError>
where
    U: MeasurementUnit + FromStr<Err = UnitConversionError> + Display,
{
    let from: U = request.from.parse()?;
    let to: U = request.to.parse()?;

    let rerendered = rerender_field(&request.value, from, to);
    let metric_value = parse_decimal(&request.value).map(|value| convert_to_metric(value, from));

    Ok(UnitToggleResponse {
        converted: rerendered.is_some(),
        value: rerendered.unwrap_or_else(|| request.value.clone()),
        unit: to.to_string(),
        metric_value,
    })
}

fn respond<U>(request: UnitToggleRequest) -> Result<Json<UnitToggleResponse>, ErrorResponse>
where
    U: MeasurementUnit + FromStr<Err = UnitConversionError> + Display,
{
    let response = toggle_unit::<U>(&request).map_err(|e| {
        debug!("Unit toggle rejected: {}", e);
        ErrorResponse::validation_error(e.to_string())
    })?;
    Ok(Json(response))
}

/// Re-render the weight field after the weight unit selector changed
#[utoipa::path(
    post,
    path = "/api/v1/units/weight",
    request_body = UnitToggleRequest,
    responses(
        (status = 200, description = "Field re-rendered", body = UnitToggleResponse),
        (status = 400, description = "Unsupported unit", body = ErrorResponse),
    ),
    tag = "units"
)]
#[instrument(skip(request))]
pub async fn convert_weight(
    Json(request): Json<UnitToggleRequest>,
) -> Result<Json<UnitToggleResponse>, ErrorResponse> {
    respond::<WeightUnit>(request)
}

/// Re-render the height field after the height unit selector changed
#[utoipa::path(
    post,
    path = "/api/v1/units/height",
    request_body = UnitToggleRequest,
    responses(
        (status = 200, description = "Field re-rendered", body = UnitToggleResponse),
        (status = 400, description = "Unsupported unit", body = ErrorResponse),
    ),
    tag = "units"
)]
#[instrument(skip(request))]
pub async fn convert_height(
    Json(request): Json<UnitToggleRequest>,
) -> Result<Json<UnitToggleResponse>, ErrorResponse> {
    respond::<HeightUnit>(request)
}
