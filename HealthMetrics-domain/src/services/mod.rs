pub mod blood_pressure;
pub mod bmi;
pub mod delivery;

// Domain services
// This module contains the calculation engines. Each engine is a set of pure
// functions plus a service that delivers results after the configured delay.

// Re-export service traits and factory functions
pub use blood_pressure::{
    create_blood_pressure_service, create_default_blood_pressure_service, BloodPressureServiceError,
    BloodPressureServiceTrait,
};
pub use bmi::{create_bmi_service, create_default_bmi_service, BmiServiceError, BmiServiceTrait};
pub use delivery::{DeferredDelivery, DEFAULT_CALCULATION_DELAY};

// Re-export mock service factory functions when the mock feature is enabled
#[cfg(feature = "mock")]
pub use blood_pressure::create_mock_blood_pressure_service;
#[cfg(feature = "mock")]
pub use bmi::create_mock_bmi_service;
