pub mod blood_pressure;
pub mod bmi;
pub mod health;
pub mod units;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use blood_pressure::{calculate_blood_pressure, get_blood_pressure_categories};
pub use bmi::{calculate_bmi, get_bmi_categories};
pub use health::health_check;
pub use units::{convert_height, convert_weight};
