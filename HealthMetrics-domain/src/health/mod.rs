//! Domain layer health check functionality
//! Each calculation engine is exercised against a known reading; a wrong answer
//! marks the engine unhealthy.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::entities::blood_pressure::{BloodPressureCategory, BloodPressureRequest};
use crate::entities::bmi::{BmiCategory, BmiRequest, Gender};
use crate::entities::units::{HeightUnit, WeightUnit};
use crate::services::blood_pressure::evaluate_blood_pressure;
use crate::services::bmi::evaluate_bmi;

/// Component name of the BMI engine
pub const BMI_ENGINE: &str = "bmi_engine";

/// Component name of the blood pressure engine
pub const BLOOD_PRESSURE_ENGINE: &str = "blood_pressure_engine";

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced performance
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

impl HealthComponent {
    fn from_check(check: Result<(), String>) -> Self {
        match check {
            Ok(()) => HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
            Err(e) => HealthComponent {
                status: ComponentStatus::Unhealthy,
                details: Some(e),
            },
        }
    }
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

impl SystemHealth {
    /// Build a report, deriving the overall status from the worst component
    pub fn from_components(components: HashMap<String, HealthComponent>) -> Self {
        let status = if components.values().any(|c| c.status == ComponentStatus::Unhealthy) {
            SystemStatus::Unhealthy
        } else if components.values().any(|c| c.status == ComponentStatus::Degraded) {
            SystemStatus::Degraded
        } else {
            SystemStatus::Healthy
        };

        SystemHealth { status, components }
    }
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;
}

/// Run the BMI engine on the reference adult reading (70 kg, 175 cm, 30, male)
pub fn check_bmi_engine() -> Result<(), String> {
    let request = BmiRequest {
        gender: Gender::Male,
        age: "30".to_string(),
        weight: "70".to_string(),
        weight_unit: WeightUnit::Kg,
        height: "175".to_string(),
        height_unit: HeightUnit::Cm,
    };

    let result = evaluate_bmi(&request).map_err(|e| format!("BMI self-check rejected: {}", e))?;
    if result.bmi() != 22.9 || result.category() != BmiCategory::NormalWeight {
        return Err(format!(
            "BMI self-check returned {} ({}), expected 22.9 (Normal Weight)",
            result.bmi(),
            result.category()
        ));
    }
    Ok(())
}

/// Run the blood pressure engine on a reading of 125/78
pub fn check_blood_pressure_engine() -> Result<(), String> {
    let request = BloodPressureRequest {
        systolic: "125".to_string(),
        diastolic: "78".to_string(),
    };

    let result = evaluate_blood_pressure(&request)
        .map_err(|e| format!("Blood pressure self-check rejected: {}", e))?;
    if result.category() != BloodPressureCategory::Elevated {
        return Err(format!(
            "Blood pressure self-check returned {}, expected Elevated",
            result.category()
        ));
    }
    Ok(())
}

/// Get overall system health
pub async fn get_system_health() -> SystemHealth {
    let components = vec![
        (BMI_ENGINE.to_string(), HealthComponent::from_check(check_bmi_engine())),
        (
            BLOOD_PRESSURE_ENGINE.to_string(),
            HealthComponent::from_check(check_blood_pressure_engine()),
        ),
    ]
    .into_iter()
    .collect();

    SystemHealth::from_components(components)
}
