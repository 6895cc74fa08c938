// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

use std::collections::HashMap;

use async_trait::async_trait;

use crate::entities::blood_pressure::{
    BloodPressureCategory, BloodPressureReading, BloodPressureRequest, BloodPressureResult,
};
use crate::entities::bmi::{BmiCategory, BmiInput, BmiRequest, BmiResult, IdealWeightRange};
use crate::health::{
    ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth, SystemStatus, BLOOD_PRESSURE_ENGINE,
    BMI_ENGINE,
};
use crate::services::blood_pressure::{
    validate_blood_pressure_request, BloodPressureServiceError, BloodPressureServiceTrait,
};
use crate::services::bmi::{validate_bmi_request, BmiServiceError, BmiServiceTrait};

/// Mock implementation of the BmiServiceTrait for testing.
///
/// Requests are validated for real, then answered with a canned result and no delay.
#[derive(Debug, Clone)]
pub struct MockBmiService {
    result: BmiResult,
    validation_failure: Option<BmiServiceError>,
}

impl Default for MockBmiService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBmiService {
    /// Create a new mock returning the reference adult result
    pub fn new() -> Self {
        Self {
            result: BmiResult::new(22.9, BmiCategory::NormalWeight, 25.1, IdealWeightRange { min: 63, max: 78 }),
            validation_failure: None,
        }
    }

    /// Configure the mock to fail validation with `error`
    pub fn with_validation_failure(mut self, error: BmiServiceError) -> Self {
        self.validation_failure = Some(error);
        self
    }

    /// Configure the canned result
    pub fn with_result(
        mut self,
        bmi: f64,
        category: BmiCategory,
        body_fat_percentage: f64,
        ideal_weight: IdealWeightRange,
    ) -> Self {
        self.result = BmiResult::new(bmi, category, body_fat_percentage, ideal_weight);
        self
    }
}

#[async_trait]
impl BmiServiceTrait for MockBmiService {
    fn validate_request(&self, request: &BmiRequest) -> Result<BmiInput, BmiServiceError> {
        match &self.validation_failure {
            Some(error) => Err(error.clone()),
            None => validate_bmi_request(request),
        }
    }

    fn calculate(&self, _input: &BmiInput) -> BmiResult {
        self.result.clone()
    }

    async fn submit(&self, request: BmiRequest) -> Result<BmiResult, BmiServiceError> {
        let input = self.validate_request(&request)?;
        Ok(self.calculate(&input))
    }
}

/// Mock implementation of the BloodPressureServiceTrait for testing
#[derive(Debug, Clone)]
pub struct MockBloodPressureService {
    category: BloodPressureCategory,
    validation_failure: Option<BloodPressureServiceError>,
}

impl Default for MockBloodPressureService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBloodPressureService {
    /// Create a new mock that reports every reading as normal
    pub fn new() -> Self {
        Self {
            category: BloodPressureCategory::Normal,
            validation_failure: None,
        }
    }

    /// Configure the mock to fail validation with `error`
    pub fn with_validation_failure(mut self, error: BloodPressureServiceError) -> Self {
        self.validation_failure = Some(error);
        self
    }

    /// Configure the category reported for every reading
    pub fn with_category(mut self, category: BloodPressureCategory) -> Self {
        self.category = category;
        self
    }
}

#[async_trait]
impl BloodPressureServiceTrait for MockBloodPressureService {
    fn validate_request(
        &self,
        request: &BloodPressureRequest,
    ) -> Result<BloodPressureReading, BloodPressureServiceError> {
        match &self.validation_failure {
            Some(error) => Err(error.clone()),
            None => validate_blood_pressure_request(request),
        }
    }

    fn get_severity(&self, _reading: &BloodPressureReading) -> BloodPressureCategory {
        self.category
    }

    fn calculate(&self, reading: &BloodPressureReading) -> BloodPressureResult {
        BloodPressureResult::for_category(self.get_severity(reading))
    }

    async fn submit(&self, request: BloodPressureRequest) -> Result<BloodPressureResult, BloodPressureServiceError> {
        let reading = self.validate_request(&request)?;
        Ok(self.calculate(&reading))
    }
}

/// Mock implementation of health services for testing system health
#[derive(Debug)]
pub struct MockHealthService {
    components: HashMap<String, HealthComponent>,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a new mock health service with both engines healthy
    pub fn new() -> Self {
        let mut components = HashMap::new();
        for name in [BMI_ENGINE, BLOOD_PRESSURE_ENGINE] {
            components.insert(
                name.to_string(),
                HealthComponent {
                    status: ComponentStatus::Healthy,
                    details: None,
                },
            );
        }
        Self { components }
    }

    /// Configure the mock with a failing BMI engine
    pub fn with_unhealthy_bmi_engine(self) -> Self {
        self.with_component(BMI_ENGINE, ComponentStatus::Unhealthy, Some("BMI self-check failed"))
    }

    /// Add or replace a component with a specific status
    pub fn with_component(mut self, name: &str, status: ComponentStatus, details: Option<&str>) -> Self {
        self.components.insert(
            name.to_string(),
            HealthComponent {
                status,
                details: details.map(str::to_string),
            },
        );
        self
    }

    /// Overall status the mock will report
    pub fn status(&self) -> SystemStatus {
        SystemHealth::from_components(self.components.clone()).status
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        SystemHealth::from_components(self.components.clone())
    }
}
