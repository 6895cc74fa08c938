#[cfg(test)]
mod bmi_tests {
    use std::sync::Arc;

    use axum::extract::{Json, State};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use health_metrics_domain::entities::{BmiCategory, BmiRequest, Gender, HeightUnit, IdealWeightRange, WeightUnit};
    use health_metrics_domain::services::BmiServiceError;
    use health_metrics_domain::testing::MockBmiService;

    use crate::api::handlers::bmi::{calculate_bmi, get_bmi_categories, BmiService};
    use crate::api::handlers::tests::body_json;

    fn request(weight: &str, height: &str, age: &str) -> BmiRequest {
        BmiRequest {
            gender: Gender::Male,
            age: age.to_string(),
            weight: weight.to_string(),
            weight_unit: WeightUnit::Kg,
            height: height.to_string(),
            height_unit: HeightUnit::Cm,
        }
    }

    #[tokio::test]
    async fn test_calculate_bmi_with_mock() {
        let service: BmiService = Arc::new(MockBmiService::new());

        let response = calculate_bmi(State(service), Json(request("70", "175", "30")))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["result"]["bmi"], 22.9);
        assert_eq!(body["result"]["category"], "Normal Weight");
        assert_eq!(body["result"]["ideal_weight"]["min"], 63);
        assert!(body["calculation_id"].is_string());
        assert!(body["calculated_at"].is_string());
    }

    #[tokio::test]
    async fn test_canned_result_is_returned() {
        let service: BmiService = Arc::new(MockBmiService::new().with_result(
            31.2,
            BmiCategory::Obese,
            33.0,
            IdealWeightRange { min: 60, max: 73 },
        ));

        let response = calculate_bmi(State(service), Json(request("100", "179", "45")))
            .await
            .into_response();

        let body = body_json(response).await;
        assert_eq!(body["result"]["category"], "Obese");
        assert_eq!(body["result"]["color"], "red");
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request() {
        let service: BmiService = Arc::new(MockBmiService::new());

        let response = calculate_bmi(State(service), Json(request("-5", "175", "30")))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "All values must be positive numbers");
    }

    #[tokio::test]
    async fn test_mock_with_preconfigured_failure() {
        let service: BmiService =
            Arc::new(MockBmiService::new().with_validation_failure(BmiServiceError::AgeOutOfRange));

        let response = calculate_bmi(State(service), Json(request("70", "175", "30")))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Please enter a valid age between 18 and 120");
    }

    #[tokio::test]
    async fn test_bmi_categories_table() {
        let Json(rows) = get_bmi_categories().await;

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].category, BmiCategory::Underweight);
        assert_eq!(rows[0].range, "< 18.5");
        assert_eq!(rows[1].range, "18.5 - 24.9");
        assert_eq!(rows[3].range, "≥ 30");
    }
}
