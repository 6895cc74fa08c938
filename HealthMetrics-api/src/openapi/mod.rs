use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // BMI endpoints
        crate::api::handlers::bmi::calculate_bmi,
        crate::api::handlers::bmi::get_bmi_categories,

        // Blood pressure endpoints
        crate::api::handlers::blood_pressure::calculate_blood_pressure,
        crate::api::handlers::blood_pressure::get_blood_pressure_categories,

        // Unit toggle endpoints
        crate::api::handlers::units::convert_weight,
        crate::api::handlers::units::convert_height
    ),
    components(
        schemas(
            // Domain entities
            health_metrics_domain::entities::BmiRequest,
            health_metrics_domain::entities::BmiResult,
            health_metrics_domain::entities::BmiCategory,
            health_metrics_domain::entities::IdealWeightRange,
            health_metrics_domain::entities::Gender,
            health_metrics_domain::entities::WeightUnit,
            health_metrics_domain::entities::HeightUnit,
            health_metrics_domain::entities::BloodPressureRequest,
            health_metrics_domain::entities::BloodPressureResult,
            health_metrics_domain::entities::BloodPressureCategory,
            health_metrics_domain::entities::RiskLevel,
            health_metrics_domain::entities::DisplayColor,

            // Public entities
            crate::entities::common::ErrorResponse,
            crate::entities::bmi::BmiCalculationResponse,
            crate::entities::bmi::BmiCategoryInfo,
            crate::entities::blood_pressure::BloodPressureCalculationResponse,
            crate::entities::blood_pressure::BloodPressureCategoryInfo,
            crate::entities::units::UnitToggleRequest,
            crate::entities::units::UnitToggleResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "bmi", description = "BMI calculator endpoints"),
        (name = "blood_pressure", description = "Blood pressure calculator endpoints"),
        (name = "units", description = "Unit toggle endpoints")
    ),
    info(
        title = "HealthMetrics API",
        version = "0.1.0",
        description = "BMI and blood pressure calculators",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_generation() {
        let openapi = ApiDoc::openapi();

        assert_eq!(openapi.info.title, "HealthMetrics API");
        assert_eq!(openapi.info.version, "0.1.0");

        let tags = openapi.tags.as_ref().unwrap();
        assert!(tags.iter().any(|tag| tag.name == "bmi"));
        assert!(tags.iter().any(|tag| tag.name == "blood_pressure"));

        for path in [
            "/health",
            "/api/v1/bmi",
            "/api/v1/bmi/categories",
            "/api/v1/bloodpressure",
            "/api/v1/bloodpressure/categories",
            "/api/v1/units/weight",
            "/api/v1/units/height",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing path {}", path);
        }
    }

    #[test]
    fn test_schemas_registered() {
        let openapi = ApiDoc::openapi();
        let schemas = &openapi.components.as_ref().unwrap().schemas;

        assert!(schemas.contains_key("BmiResult"));
        assert!(schemas.contains_key("BloodPressureResult"));
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
