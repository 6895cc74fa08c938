// Domain entities and value objects
pub mod blood_pressure;
pub mod bmi;
pub mod display;
pub mod parsing;
pub mod units;

// Re-export common types for easier imports
pub use blood_pressure::{
    BloodPressureCategory, BloodPressureReading, BloodPressureRequest, BloodPressureResult, RiskLevel,
};
pub use bmi::{BmiCategory, BmiInput, BmiRequest, BmiResult, Gender, IdealWeightRange};
pub use display::DisplayColor;
pub use units::{HeightUnit, MeasurementUnit, UnitConversionError, WeightUnit};
