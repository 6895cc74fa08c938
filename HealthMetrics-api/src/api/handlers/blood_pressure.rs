use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, instrument, warn};

use health_metrics_domain::entities::{BloodPressureCategory, BloodPressureRequest};
use health_metrics_domain::services::{create_blood_pressure_service, BloodPressureServiceTrait};

use crate::entities::blood_pressure::{BloodPressureCalculationResponse, BloodPressureCategoryInfo};
use crate::entities::common::ErrorResponse;

/// Service type for dependency injection
pub type BloodPressureService = Arc<dyn BloodPressureServiceTrait + Send + Sync>;

/// Create the service the handlers use, delivering results after `delay`
pub fn create_service(delay: Duration) -> BloodPressureService {
    Arc::new(create_blood_pressure_service(delay))
}

/// Categorize a blood pressure reading from the blood pressure panel form
#[utoipa::path(
    post,
    path = "/api/v1/bloodpressure",
    request_body = BloodPressureRequest,
    responses(
        (status = 200, description = "Reading categorized", body = BloodPressureCalculationResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    ),
    tag = "blood_pressure"
)]
#[instrument(skip(service, request))]
pub async fn calculate_blood_pressure(
    State(service): State<BloodPressureService>,
    Json(request): Json<BloodPressureRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    info!("Blood pressure categorization requested");

    match service.submit(request).await {
        Ok(result) => {
            let response = BloodPressureCalculationResponse::new(result);
            info!("Blood pressure calculation {} completed", response.calculation_id);
            Ok((StatusCode::OK, Json(response)))
        }
        Err(e) => {
            warn!("Invalid blood pressure reading: {}", e);
            Err(ErrorResponse::validation_error(e.to_string()))
        }
    }
}

/// Blood pressure reference table shown beside the panel
#[utoipa::path(
    get,
    path = "/api/v1/bloodpressure/categories",
    responses(
        (status = 200, description = "Blood pressure categories in ascending severity", body = [BloodPressureCategoryInfo]),
    ),
    tag = "blood_pressure"
)]
pub async fn get_blood_pressure_categories() -> Json<Vec<BloodPressureCategoryInfo>> {
    Json(
        BloodPressureCategory::ALL
            .into_iter()
            .map(BloodPressureCategoryInfo::from)
            .collect(),
    )
}
