use std::time::Duration;

use axum::{
    extract::FromRef,
    http::{header, HeaderName, HeaderValue, Method},
    routing::{get, post},
    Extension, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::debug;
use std::sync::Arc;

use health_metrics_domain::health::HealthServiceTrait;

use crate::api::handlers::{blood_pressure, bmi, health, units};
use crate::config::ServerConfig;
use crate::openapi::configure_swagger_routes;

/// Shared state of the calculator routes
#[derive(Clone, FromRef)]
pub struct AppState {
    pub bmi_service: bmi::BmiService,
    pub blood_pressure_service: blood_pressure::BloodPressureService,
}

impl AppState {
    /// Services delivering successful results after `delay`
    pub fn new(delay: Duration) -> Self {
        Self {
            bmi_service: bmi::create_service(delay),
            blood_pressure_service: blood_pressure::create_service(delay),
        }
    }
}

/// Create the application router
pub fn create_app(config: &ServerConfig) -> Router {
    debug!("Creating application router");

    let router = create_router(
        AppState::new(config.calculation_delay()),
        health::create_health_service(),
        health::AppEnvironment(config.environment.clone()),
    );

    // Initialize health check service startup time
    health::initialize_server_start_time();
    debug!("Health check service initialized");

    router
}

/// Assemble the routes around the given services
pub fn create_router(
    state: AppState,
    health_service: Arc<dyn HealthServiceTrait + Send + Sync>,
    environment: health::AppEnvironment,
) -> Router {
    let api_routes = Router::new()
        .route("/bmi", post(bmi::calculate_bmi))
        .route("/bmi/categories", get(bmi::get_bmi_categories))
        .route("/bloodpressure", post(blood_pressure::calculate_blood_pressure))
        .route(
            "/bloodpressure/categories",
            get(blood_pressure::get_blood_pressure_categories),
        )
        .route("/units/weight", post(units::convert_weight))
        .route("/units/height", post(units::convert_height));

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service))
        .layer(Extension(environment));

    debug!("Public routes configured");

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .with_state(state);

    debug!("API routes nested");

    // Configure the Swagger UI using the helper function
    let app = add_swagger_ui(app);

    debug!("Swagger UI merged");

    let app = configure_security(app).layer(TraceLayer::new_for_http());
    debug!("Security configuration applied");

    app
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    // Get Swagger UI routes
    let swagger = configure_swagger_routes();

    // Merge Swagger UI with the app router
    app.merge(swagger)
}

/// Apply CORS and security headers to every response
pub fn configure_security(app: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    let security_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    app.layer(cors).layer(security_headers)
}
