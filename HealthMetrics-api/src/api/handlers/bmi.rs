use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, instrument, warn};

use health_metrics_domain::entities::{BmiCategory, BmiRequest};
use health_metrics_domain::services::{create_bmi_service, BmiServiceTrait};

use crate::entities::bmi::{BmiCalculationResponse, BmiCategoryInfo};
use crate::entities::common::ErrorResponse;

/// Service type for dependency injection
pub type BmiService = Arc<dyn BmiServiceTrait + Send + Sync>;

/// Create the service the handlers use, delivering results after `delay`
pub fn create_service(delay: Duration) -> BmiService {
    Arc::new(create_bmi_service(delay))
}

/// Calculate BMI, body fat and ideal weight from the BMI panel form
#[utoipa::path(
    post,
    path = "/api/v1/bmi",
    request_body = BmiRequest,
    responses(
        (status = 200, description = "BMI calculated", body = BmiCalculationResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    ),
    tag = "bmi"
)]
#[instrument(skip(service, request))]
pub async fn calculate_bmi(
    State(service): State<BmiService>,
    Json(request): Json<BmiRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    info!("BMI calculation requested");

    match service.submit(request).await {
        Ok(result) => {
            let response = BmiCalculationResponse::new(result);
            info!("BMI calculation {} completed", response.calculation_id);
            Ok((StatusCode::OK, Json(response)))
        }
        Err(e) => {
            warn!("Invalid BMI input: {}", e);
            Err(ErrorResponse::validation_error(e.to_string()))
        }
    }
}

/// BMI reference table shown beside the panel
#[utoipa::path(
    get,
    path = "/api/v1/bmi/categories",
    responses(
        (status = 200, description = "BMI categories in ascending order", body = [BmiCategoryInfo]),
    ),
    tag = "bmi"
)]
pub async fn get_bmi_categories() -> Json<Vec<BmiCategoryInfo>> {
    Json(BmiCategory::ALL.into_iter().map(BmiCategoryInfo::from).collect())
}
