use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::entities::blood_pressure::{
    BloodPressureCategory, BloodPressureReading, BloodPressureRequest, BloodPressureResult,
};
use crate::entities::parsing::parse_integer;
use crate::services::delivery::DeferredDelivery;

/// Highest systolic value accepted as realistic, mmHg
pub const MAX_SYSTOLIC: i64 = 300;

/// Highest diastolic value accepted as realistic, mmHg
pub const MAX_DIASTOLIC: i64 = 200;

/// Blood pressure validation errors, displayed inline in the panel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BloodPressureServiceError {
    /// Systolic or diastolic left empty
    #[error("Please enter both systolic and diastolic values")]
    MissingValues,

    /// A field has no numeric value
    #[error("Please enter valid numbers")]
    InvalidNumber,

    /// A value is zero or negative
    #[error("Blood pressure values must be positive numbers")]
    NonPositive,

    /// Systolic reading below diastolic
    #[error("Systolic pressure must be greater than diastolic pressure")]
    SystolicBelowDiastolic,

    /// Reading beyond the realistic limits
    #[error("Please enter realistic blood pressure values")]
    Unrealistic,
}

/// Validate raw blood pressure form input. The first failing check wins.
pub fn validate_blood_pressure_request(
    request: &BloodPressureRequest,
) -> Result<BloodPressureReading, BloodPressureServiceError> {
    if request.systolic.is_empty() || request.diastolic.is_empty() {
        return Err(BloodPressureServiceError::MissingValues);
    }

    let (systolic, diastolic) = match (parse_integer(&request.systolic), parse_integer(&request.diastolic)) {
        (Some(systolic), Some(diastolic)) => (systolic, diastolic),
        _ => return Err(BloodPressureServiceError::InvalidNumber),
    };

    if systolic <= 0 || diastolic <= 0 {
        return Err(BloodPressureServiceError::NonPositive);
    }

    // Equal readings pass; only a strictly lower systolic is rejected
    if systolic < diastolic {
        return Err(BloodPressureServiceError::SystolicBelowDiastolic);
    }

    if systolic > MAX_SYSTOLIC || diastolic > MAX_DIASTOLIC {
        return Err(BloodPressureServiceError::Unrealistic);
    }

    Ok(BloodPressureReading::new(systolic as u16, diastolic as u16))
}

/// Categorize blood pressure based on measurements.
///
/// Conditions are checked in order and the first match wins. The stage 1 condition
/// is an OR, so any reading that is not normal or elevated and has either value
/// below its stage 2 threshold is stage 1.
pub fn categorize_blood_pressure(systolic: u16, diastolic: u16) -> BloodPressureCategory {
    if systolic < 120 && diastolic < 80 {
        BloodPressureCategory::Normal
    } else if systolic < 130 && diastolic < 80 {
        BloodPressureCategory::Elevated
    } else if systolic < 140 || diastolic < 90 {
        BloodPressureCategory::Hypertension1
    } else {
        BloodPressureCategory::Hypertension2
    }
}

/// Compute the full result for a validated reading
pub fn calculate_blood_pressure(reading: &BloodPressureReading) -> BloodPressureResult {
    BloodPressureResult::for_category(categorize_blood_pressure(reading.systolic(), reading.diastolic()))
}

/// Validate and categorize in one synchronous step
pub fn evaluate_blood_pressure(
    request: &BloodPressureRequest,
) -> Result<BloodPressureResult, BloodPressureServiceError> {
    validate_blood_pressure_request(request).map(|reading| calculate_blood_pressure(&reading))
}

/// Trait for blood pressure service operations
#[async_trait]
pub trait BloodPressureServiceTrait: Send + Sync {
    /// Validate raw form input
    fn validate_request(
        &self,
        request: &BloodPressureRequest,
    ) -> Result<BloodPressureReading, BloodPressureServiceError>;

    /// Get severity category for a blood pressure reading
    fn get_severity(&self, reading: &BloodPressureReading) -> BloodPressureCategory;

    /// Calculate a result from a validated reading
    fn calculate(&self, reading: &BloodPressureReading) -> BloodPressureResult;

    /// Validate, categorize and deliver the result after the configured delay.
    /// Validation errors are returned immediately.
    async fn submit(&self, request: BloodPressureRequest) -> Result<BloodPressureResult, BloodPressureServiceError>;
}

/// Blood pressure engine with deferred result delivery
#[derive(Debug, Clone, Default)]
pub struct BloodPressureService {
    delivery: DeferredDelivery,
}

impl BloodPressureService {
    pub fn new(delivery: DeferredDelivery) -> Self {
        Self { delivery }
    }
}

#[async_trait]
impl BloodPressureServiceTrait for BloodPressureService {
    fn validate_request(
        &self,
        request: &BloodPressureRequest,
    ) -> Result<BloodPressureReading, BloodPressureServiceError> {
        validate_blood_pressure_request(request)
    }

    fn get_severity(&self, reading: &BloodPressureReading) -> BloodPressureCategory {
        categorize_blood_pressure(reading.systolic(), reading.diastolic())
    }

    fn calculate(&self, reading: &BloodPressureReading) -> BloodPressureResult {
        calculate_blood_pressure(reading)
    }

    #[instrument(skip(self, request))]
    async fn submit(&self, request: BloodPressureRequest) -> Result<BloodPressureResult, BloodPressureServiceError> {
        let reading = self.validate_request(&request).map_err(|e| {
            debug!("Blood pressure input rejected: {}", e);
            e
        })?;

        let result = self.calculate(&reading);
        info!(
            systolic = reading.systolic(),
            diastolic = reading.diastolic(),
            category = %result.category(),
            "Blood pressure categorized"
        );

        Ok(self.delivery.deliver(result).await)
    }
}

/// Create a blood pressure service with the default delivery delay
pub fn create_default_blood_pressure_service() -> impl BloodPressureServiceTrait {
    BloodPressureService::default()
}

/// Create a blood pressure service with a custom delivery delay
pub fn create_blood_pressure_service(delay: Duration) -> impl BloodPressureServiceTrait {
    BloodPressureService::new(DeferredDelivery::new(delay))
}

/// Create a mock blood pressure service for testing
/// This function is only available when the mock feature is enabled
#[cfg(feature = "mock")]
pub fn create_mock_blood_pressure_service() -> impl BloodPressureServiceTrait {
    crate::testing::MockBloodPressureService::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::blood_pressure::RiskLevel;

    fn request(systolic: &str, diastolic: &str) -> BloodPressureRequest {
        BloodPressureRequest {
            systolic: systolic.to_string(),
            diastolic: diastolic.to_string(),
        }
    }

    #[test]
    fn test_bp_category_normal() {
        let category = categorize_blood_pressure(110, 75);
        assert_eq!(category, BloodPressureCategory::Normal);
    }

    #[test]
    fn test_bp_category_elevated() {
        let result = evaluate_blood_pressure(&request("125", "78")).unwrap();
        assert_eq!(result.category(), BloodPressureCategory::Elevated);
        assert_eq!(result.category().label(), "Elevated");
        assert_eq!(result.risk_level(), RiskLevel::Medium);
    }

    #[test]
    fn test_hex_readings_are_accepted() {
        let result = evaluate_blood_pressure(&request("0x78", "0x4f")).unwrap();
        assert_eq!(result.category(), BloodPressureCategory::Elevated);
    }

    #[test]
    fn test_bp_category_boundaries() {
        assert_eq!(categorize_blood_pressure(120, 79), BloodPressureCategory::Elevated);
        assert_eq!(categorize_blood_pressure(119, 79), BloodPressureCategory::Normal);
        assert_eq!(categorize_blood_pressure(139, 89), BloodPressureCategory::Hypertension1);
        assert_eq!(categorize_blood_pressure(140, 90), BloodPressureCategory::Hypertension2);
    }

    #[test]
    fn test_bp_stage_1_overlap_is_preserved() {
        // Stage 1 is an OR: a high systolic with a low diastolic still lands here
        assert_eq!(categorize_blood_pressure(180, 85), BloodPressureCategory::Hypertension1);
        assert_eq!(categorize_blood_pressure(135, 120), BloodPressureCategory::Hypertension1);
        assert_eq!(categorize_blood_pressure(110, 80), BloodPressureCategory::Hypertension1);
    }

    #[test]
    fn test_bp_category_hypertension2() {
        let result = evaluate_blood_pressure(&request("160", "100")).unwrap();
        assert_eq!(result.category().label(), "High Blood Pressure (Stage 2)");
        assert_eq!(result.risk_level(), RiskLevel::High);
        assert_eq!(result.recommendations().len(), 6);
    }

    #[test]
    fn test_empty_field_wins_over_invalid_number() {
        let result = evaluate_blood_pressure(&request("", "abc"));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Please enter both systolic and diastolic values"
        );
    }

    #[test]
    fn test_invalid_number() {
        let result = evaluate_blood_pressure(&request("120", "high"));
        assert_eq!(result.unwrap_err(), BloodPressureServiceError::InvalidNumber);
    }

    #[test]
    fn test_non_positive_values() {
        let result = evaluate_blood_pressure(&request("0", "80"));
        assert_eq!(result.unwrap_err().to_string(), "Blood pressure values must be positive numbers");

        let result = evaluate_blood_pressure(&request("120", "-80"));
        assert_eq!(result.unwrap_err(), BloodPressureServiceError::NonPositive);
    }

    #[test]
    fn test_systolic_not_below_diastolic() {
        let result = evaluate_blood_pressure(&request("80", "90"));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Systolic pressure must be greater than diastolic pressure"
        );

        // Equal values are accepted
        let result = evaluate_blood_pressure(&request("90", "90")).unwrap();
        assert_eq!(result.category(), BloodPressureCategory::Hypertension2);
    }

    #[test]
    fn test_unrealistic_values() {
        let result = evaluate_blood_pressure(&request("301", "80"));
        assert_eq!(result.unwrap_err().to_string(), "Please enter realistic blood pressure values");

        let result = evaluate_blood_pressure(&request("250", "201"));
        assert_eq!(result.unwrap_err(), BloodPressureServiceError::Unrealistic);

        assert!(evaluate_blood_pressure(&request("300", "200")).is_ok());
    }

    #[test]
    fn test_decimal_input_is_truncated() {
        let result = evaluate_blood_pressure(&request("119.9", "79.9")).unwrap();
        assert_eq!(result.category(), BloodPressureCategory::Normal);
    }

    #[test]
    fn test_get_severity() {
        let service = BloodPressureService::new(DeferredDelivery::immediate());
        let reading = service.validate_request(&request("135", "85")).unwrap();
        assert_eq!(service.get_severity(&reading), BloodPressureCategory::Hypertension1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_delivers_after_delay() {
        let service = create_blood_pressure_service(Duration::from_millis(500));
        let started = tokio::time::Instant::now();

        let result = service.submit(request("118", "76")).await.unwrap();

        assert_eq!(result.category(), BloodPressureCategory::Normal);
        assert_eq!(result.risk_level(), RiskLevel::Low);
        assert!(started.elapsed() >= Duration::from_millis(500));
    }
}
