// Public entities for the HealthMetrics API
// This module contains data structures that are shared across the application boundary

// Blood pressure responses and reference table
pub mod blood_pressure;

// BMI responses and reference table
pub mod bmi;

// Common entities for error handling
pub mod common;

// Unit toggle requests and responses
pub mod units;
