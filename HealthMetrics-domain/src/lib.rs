// HealthMetrics Domain
// This crate contains the calculation logic for the HealthMetrics application

// Domain entities and value objects
pub mod entities;

// Calculation engines
pub mod services;

// Presentation view-state for the calculator panels
pub mod panels;

// Engine self-checks and system status
pub mod health;

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;
