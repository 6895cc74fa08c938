use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::entities::bmi::{BmiCategory, BmiInput, BmiRequest, BmiResult, Gender, IdealWeightRange};
use crate::entities::parsing::{parse_decimal, parse_integer};
use crate::entities::units::round_to_tenth;
use crate::services::delivery::DeferredDelivery;

/// Youngest age the adult BMI categories apply to
pub const MIN_AGE: i64 = 18;

/// Oldest accepted age
pub const MAX_AGE: i64 = 120;

/// BMI validation errors, displayed inline in the panel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BmiServiceError {
    /// Weight, height or age left empty
    #[error("Please enter all required values")]
    MissingValues,

    /// A field has no numeric value
    #[error("Please enter valid numbers")]
    InvalidNumber,

    /// A value is zero or negative
    #[error("All values must be positive numbers")]
    NonPositive,

    /// Age outside the accepted range
    #[error("Please enter a valid age between 18 and 120")]
    AgeOutOfRange,
}

/// Validate raw BMI form input. The first failing check wins.
pub fn validate_bmi_request(request: &BmiRequest) -> Result<BmiInput, BmiServiceError> {
    if request.weight.is_empty() || request.height.is_empty() || request.age.is_empty() {
        return Err(BmiServiceError::MissingValues);
    }

    let (weight, height, age) = match (
        parse_decimal(&request.weight),
        parse_decimal(&request.height),
        parse_integer(&request.age),
    ) {
        (Some(weight), Some(height), Some(age)) => (weight, height, age),
        _ => return Err(BmiServiceError::InvalidNumber),
    };

    if weight <= 0.0 || height <= 0.0 || age <= 0 {
        return Err(BmiServiceError::NonPositive);
    }

    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(BmiServiceError::AgeOutOfRange);
    }

    Ok(BmiInput::new(
        weight,
        request.weight_unit,
        height,
        request.height_unit,
        age as u32,
        request.gender,
    ))
}

/// Body Mass Index from metric weight and height, unrounded
pub fn calculate_bmi_value(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Body fat percentage estimate (Deurenberg equation), one decimal place
pub fn calculate_body_fat_percentage(bmi: f64, age: u32, gender: Gender) -> f64 {
    let sex = match gender {
        Gender::Male => 1.0,
        Gender::Female => 0.0,
    };
    round_to_tenth(1.2 * bmi + 0.23 * f64::from(age) - 3.8 * sex - 5.4)
}

/// Ideal weight range (Devine formula), ±10% of the base weight in whole kilograms
pub fn calculate_ideal_weight(height_cm: f64, gender: Gender) -> IdealWeightRange {
    let height_in = height_cm / 2.54;
    let base = match gender {
        Gender::Male => 50.0,
        Gender::Female => 45.5,
    };
    let ideal = base + 2.3 * (height_in - 60.0);

    IdealWeightRange {
        min: round_half_up(ideal * 0.9),
        max: round_half_up(ideal * 1.1),
    }
}

// Halves round toward positive infinity, also for negative values.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Compute the full BMI result for validated input
pub fn calculate_bmi(input: &BmiInput) -> BmiResult {
    let height_cm = input.height_cm();
    let bmi = calculate_bmi_value(input.weight_kg(), height_cm);

    BmiResult::new(
        round_to_tenth(bmi),
        BmiCategory::from_bmi(bmi),
        calculate_body_fat_percentage(bmi, input.age(), input.gender()),
        calculate_ideal_weight(height_cm, input.gender()),
    )
}

/// Validate and calculate in one synchronous step
pub fn evaluate_bmi(request: &BmiRequest) -> Result<BmiResult, BmiServiceError> {
    validate_bmi_request(request).map(|input| calculate_bmi(&input))
}

/// Trait for BMI service operations
#[async_trait]
pub trait BmiServiceTrait: Send + Sync {
    /// Validate raw form input
    fn validate_request(&self, request: &BmiRequest) -> Result<BmiInput, BmiServiceError>;

    /// Calculate a result from validated input
    fn calculate(&self, input: &BmiInput) -> BmiResult;

    /// Validate, calculate and deliver the result after the configured delay.
    /// Validation errors are returned immediately.
    async fn submit(&self, request: BmiRequest) -> Result<BmiResult, BmiServiceError>;
}

/// BMI engine with deferred result delivery
#[derive(Debug, Clone, Default)]
pub struct BmiService {
    delivery: DeferredDelivery,
}

impl BmiService {
    pub fn new(delivery: DeferredDelivery) -> Self {
        Self { delivery }
    }
}

#[async_trait]
impl BmiServiceTrait for BmiService {
    fn validate_request(&self, request: &BmiRequest) -> Result<BmiInput, BmiServiceError> {
        validate_bmi_request(request)
    }

    fn calculate(&self, input: &BmiInput) -> BmiResult {
        calculate_bmi(input)
    }

    #[instrument(skip(self, request))]
    async fn submit(&self, request: BmiRequest) -> Result<BmiResult, BmiServiceError> {
        let input = self.validate_request(&request).map_err(|e| {
            debug!("BMI input rejected: {}", e);
            e
        })?;

        let result = self.calculate(&input);
        info!(bmi = result.bmi(), category = %result.category(), "BMI calculated");

        Ok(self.delivery.deliver(result).await)
    }
}

/// Create a BMI service with the default delivery delay
pub fn create_default_bmi_service() -> impl BmiServiceTrait {
    BmiService::default()
}

/// Create a BMI service with a custom delivery delay
pub fn create_bmi_service(delay: Duration) -> impl BmiServiceTrait {
    BmiService::new(DeferredDelivery::new(delay))
}

/// Create a mock BMI service for testing
/// This function is only available when the mock feature is enabled
#[cfg(feature = "mock")]
pub fn create_mock_bmi_service() -> impl BmiServiceTrait {
    crate::testing::MockBmiService::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::units::{HeightUnit, WeightUnit};

    fn request(weight: &str, height: &str, age: &str, gender: Gender) -> BmiRequest {
        BmiRequest {
            gender,
            age: age.to_string(),
            weight: weight.to_string(),
            weight_unit: WeightUnit::Kg,
            height: height.to_string(),
            height_unit: HeightUnit::Cm,
        }
    }

    fn metric_input(weight_kg: f64, height_cm: f64) -> BmiInput {
        BmiInput::new(weight_kg, WeightUnit::Kg, height_cm, HeightUnit::Cm, 30, Gender::Male)
    }

    #[test]
    fn test_reference_male_scenario() {
        let result = evaluate_bmi(&request("70", "175", "30", Gender::Male)).unwrap();

        assert_eq!(result.bmi(), 22.9);
        assert_eq!(result.category(), BmiCategory::NormalWeight);
        assert_eq!(result.category().label(), "Normal Weight");
        assert_eq!(result.body_fat_percentage(), 25.1);
        assert_eq!(result.ideal_weight(), IdealWeightRange { min: 63, max: 78 });
    }

    #[test]
    fn test_female_scenario() {
        let result = evaluate_bmi(&request("55", "160", "40", Gender::Female)).unwrap();

        assert_eq!(result.bmi(), 21.5);
        assert_eq!(result.body_fat_percentage(), 29.6);
        assert_eq!(result.ideal_weight(), IdealWeightRange { min: 47, max: 58 });
    }

    #[test]
    fn test_imperial_units_are_converted() {
        let mut imperial = request("154.3", "69", "30", Gender::Male);
        imperial.weight_unit = WeightUnit::Lbs;
        imperial.height_unit = HeightUnit::In;

        let result = evaluate_bmi(&imperial).unwrap();
        assert_eq!(result.bmi(), 22.8);
        assert_eq!(result.category(), BmiCategory::NormalWeight);
    }

    #[test]
    fn test_results_round_the_stored_value() {
        // BMI 10.35 is stored just below the half
        let result = evaluate_bmi(&request("41.4", "200", "30", Gender::Male)).unwrap();
        assert_eq!(result.bmi(), 10.3);

        let result = evaluate_bmi(&request("45.5", "200", "30", Gender::Male)).unwrap();
        assert_eq!(result.bmi(), 11.4);
        assert_eq!(result.body_fat_percentage(), 11.3);
    }

    #[test]
    fn test_bmi_matches_formula() {
        for &(weight, height) in &[(50.0, 150.0), (82.5, 181.0), (120.0, 190.0), (45.2, 171.3)] {
            let expected = round_to_tenth(weight / ((height / 100.0) * (height / 100.0)));
            assert_eq!(calculate_bmi(&metric_input(weight, height)).bmi(), expected);
        }
    }

    #[test]
    fn test_category_boundaries_use_exact_values() {
        assert_eq!(calculate_bmi(&metric_input(18.5, 100.0)).category(), BmiCategory::NormalWeight);
        assert_eq!(calculate_bmi(&metric_input(25.0, 100.0)).category(), BmiCategory::Overweight);
        assert_eq!(calculate_bmi(&metric_input(30.0, 100.0)).category(), BmiCategory::Obese);
        assert_eq!(calculate_bmi(&metric_input(18.49, 100.0)).category(), BmiCategory::Underweight);
    }

    #[test]
    fn test_category_uses_unrounded_bmi() {
        // 24.96 rounds to 25.0 for display but stays in the normal range
        let result = calculate_bmi(&metric_input(24.96, 100.0));
        assert_eq!(result.bmi(), 25.0);
        assert_eq!(result.category(), BmiCategory::NormalWeight);
    }

    #[test]
    fn test_missing_values_reported_first() {
        let result = evaluate_bmi(&request("abc", "175", "", Gender::Male));
        assert_eq!(result.unwrap_err(), BmiServiceError::MissingValues);
    }

    #[test]
    fn test_invalid_numbers() {
        let result = evaluate_bmi(&request("heavy", "175", "30", Gender::Male));
        assert_eq!(result.unwrap_err().to_string(), "Please enter valid numbers");
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = evaluate_bmi(&request("-5", "175", "30", Gender::Male));
        assert_eq!(result.unwrap_err().to_string(), "All values must be positive numbers");
    }

    #[test]
    fn test_zero_age_is_not_positive() {
        let result = evaluate_bmi(&request("70", "175", "0", Gender::Male));
        assert_eq!(result.unwrap_err(), BmiServiceError::NonPositive);
    }

    #[test]
    fn test_age_range() {
        let young = evaluate_bmi(&request("70", "175", "17", Gender::Male));
        assert_eq!(young.unwrap_err().to_string(), "Please enter a valid age between 18 and 120");

        let old = evaluate_bmi(&request("70", "175", "121", Gender::Male));
        assert_eq!(old.unwrap_err(), BmiServiceError::AgeOutOfRange);

        assert!(evaluate_bmi(&request("70", "175", "18", Gender::Male)).is_ok());
        assert!(evaluate_bmi(&request("70", "175", "120", Gender::Male)).is_ok());
    }

    #[test]
    fn test_fractional_age_is_truncated() {
        let truncated = evaluate_bmi(&request("70", "175", "30.9", Gender::Male)).unwrap();
        let whole = evaluate_bmi(&request("70", "175", "30", Gender::Male)).unwrap();
        assert_eq!(truncated, whole);
    }

    #[test]
    fn test_ideal_weight_rounds_half_up() {
        assert_eq!(round_half_up(63.5), 64);
        assert_eq!(round_half_up(-71.5), -71);
        assert_eq!(round_half_up(77.49), 77);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_delivers_after_delay() {
        let service = BmiService::default();
        let started = tokio::time::Instant::now();

        let result = service.submit(request("70", "175", "30", Gender::Male)).await.unwrap();

        assert_eq!(result.bmi(), 22.9);
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_reports_errors_without_delay() {
        let service = BmiService::default();
        let started = tokio::time::Instant::now();

        let result = service.submit(request("", "175", "30", Gender::Male)).await;

        assert_eq!(result.unwrap_err(), BmiServiceError::MissingValues);
        assert!(started.elapsed() < Duration::from_millis(500));
    }
}
