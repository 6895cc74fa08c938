//! Measurement units accepted by the calculator panels
//!
//! Mass is canonically expressed in kilograms and length in centimeters. Every
//! supported unit carries a fixed factor to its canonical unit; conversions used for
//! calculation are never rounded, only values re-rendered into an input field are.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::parsing::parse_decimal;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Centimeters per foot
pub const CM_PER_FT: f64 = 30.48;
/// Centimeters per inch
pub const CM_PER_IN: f64 = 2.54;

/// Error raised when a unit tag is not one of the supported units
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitConversionError {
    #[error("Unsupported weight unit: {0}")]
    UnsupportedWeightUnit(String),

    #[error("Unsupported height unit: {0}")]
    UnsupportedHeightUnit(String),
}

/// A unit with a fixed conversion factor to the canonical unit of its dimension
pub trait MeasurementUnit: Copy + PartialEq + fmt::Debug {
    /// The canonical unit of this dimension
    const CANONICAL: Self;

    /// Number of canonical units in one of this unit
    fn factor(self) -> f64;

    /// Short symbol shown next to the input field
    fn symbol(self) -> &'static str;

    /// Express `value` (given in this unit) in the canonical unit
    fn to_canonical(self, value: f64) -> f64 {
        if self == Self::CANONICAL {
            value
        } else {
            value * self.factor()
        }
    }

    /// Express a canonical `value` in this unit
    fn from_canonical(self, value: f64) -> f64 {
        if self == Self::CANONICAL {
            value
        } else {
            value / self.factor()
        }
    }
}

/// Weight unit selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms (canonical)
    #[default]
    Kg,
    /// Pounds
    Lbs,
}

impl MeasurementUnit for WeightUnit {
    const CANONICAL: Self = WeightUnit::Kg;

    fn factor(self) -> f64 {
        match self {
            WeightUnit::Kg => 1.0,
            WeightUnit::Lbs => KG_PER_LB,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl FromStr for WeightUnit {
    type Err = UnitConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Ok(WeightUnit::Kg),
            "lbs" | "lb" => Ok(WeightUnit::Lbs),
            other => Err(UnitConversionError::UnsupportedWeightUnit(other.to_string())),
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Height unit selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    /// Centimeters (canonical)
    #[default]
    Cm,
    /// Feet
    Ft,
    /// Inches
    In,
}

impl MeasurementUnit for HeightUnit {
    const CANONICAL: Self = HeightUnit::Cm;

    fn factor(self) -> f64 {
        match self {
            HeightUnit::Cm => 1.0,
            HeightUnit::Ft => CM_PER_FT,
            HeightUnit::In => CM_PER_IN,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::Ft => "ft",
            HeightUnit::In => "in",
        }
    }
}

impl FromStr for HeightUnit {
    type Err = UnitConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" => Ok(HeightUnit::Cm),
            "ft" => Ok(HeightUnit::Ft),
            "in" => Ok(HeightUnit::In),
            other => Err(UnitConversionError::UnsupportedHeightUnit(other.to_string())),
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Convert a value in `unit` to the canonical metric unit (kg or cm)
pub fn convert_to_metric<U: MeasurementUnit>(value: f64, unit: U) -> f64 {
    unit.to_canonical(value)
}

/// Convert a value between two units of the same dimension without rounding
pub fn convert_between<U: MeasurementUnit>(value: f64, from: U, to: U) -> f64 {
    to.from_canonical(from.to_canonical(value))
}

/// Round to one decimal place using the exact decimal value of `value`.
///
/// `10.35` is stored as `10.3499…` and rounds down. Exact ties, which an f64 can
/// only hold at quarter values, round away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && (value * 2.0).fract() != 0.0 {
        return (value * 10.0).round() / 10.0;
    }
    // Float formatting rounds the exact binary expansion
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Re-render an input field after its unit selector changed from `from` to `to`.
///
/// Returns `None` when the field holds nothing numeric, in which case the field is
/// left as typed.
pub fn rerender_field<U: MeasurementUnit>(field: &str, from: U, to: U) -> Option<String> {
    let value = parse_decimal(field)?;
    let converted = round_to_tenth(convert_between(value, from, to));
    Some(format!("{:.1}", converted))
}
