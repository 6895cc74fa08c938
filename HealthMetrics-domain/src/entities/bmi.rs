use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::display::DisplayColor;
use super::parsing::deserialize_field_text;
use super::units::{convert_to_metric, HeightUnit, WeightUnit};

/// Gender selector used by the body fat and ideal weight formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Raw BMI form input, exactly as typed into the panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(default)]
pub struct BmiRequest {
    /// Selected gender
    pub gender: Gender,

    /// Age in whole years
    #[serde(deserialize_with = "deserialize_field_text")]
    pub age: String,

    /// Weight in `weight_unit`
    #[serde(deserialize_with = "deserialize_field_text")]
    pub weight: String,

    /// Unit of the weight field
    pub weight_unit: WeightUnit,

    /// Height in `height_unit`
    #[serde(deserialize_with = "deserialize_field_text")]
    pub height: String,

    /// Unit of the height field
    pub height_unit: HeightUnit,
}

/// BMI input that passed validation.
///
/// Only the BMI engine's validation can produce one, so every result is computed
/// from checked values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiInput {
    weight: f64,
    weight_unit: WeightUnit,
    height: f64,
    height_unit: HeightUnit,
    age: u32,
    gender: Gender,
}

impl BmiInput {
    pub(crate) fn new(
        weight: f64,
        weight_unit: WeightUnit,
        height: f64,
        height_unit: HeightUnit,
        age: u32,
        gender: Gender,
    ) -> Self {
        Self {
            weight,
            weight_unit,
            height,
            height_unit,
            age,
            gender,
        }
    }

    /// Weight in kilograms
    pub fn weight_kg(&self) -> f64 {
        convert_to_metric(self.weight, self.weight_unit)
    }

    /// Height in centimeters
    pub fn height_cm(&self) -> f64 {
        convert_to_metric(self.height, self.height_unit)
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }
}

/// BMI category, bounded by half-open intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum BmiCategory {
    /// BMI below 18.5
    #[serde(rename = "Underweight")]
    Underweight,

    /// BMI from 18.5 up to 25
    #[serde(rename = "Normal Weight")]
    NormalWeight,

    /// BMI from 25 up to 30
    #[serde(rename = "Overweight")]
    Overweight,

    /// BMI of 30 and above
    #[serde(rename = "Obese")]
    Obese,
}

impl BmiCategory {
    /// All categories in ascending BMI order
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::NormalWeight,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Categorize an unrounded BMI value
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn color(&self) -> DisplayColor {
        match self {
            BmiCategory::Underweight => DisplayColor::Blue,
            BmiCategory::NormalWeight => DisplayColor::Green,
            BmiCategory::Overweight => DisplayColor::Yellow,
            BmiCategory::Obese => DisplayColor::Red,
        }
    }

    /// Range shown in the panel's reference table
    pub fn range_label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "< 18.5",
            BmiCategory::NormalWeight => "18.5 - 24.9",
            BmiCategory::Overweight => "25 - 29.9",
            BmiCategory::Obese => "≥ 30",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Ideal weight range in whole kilograms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct IdealWeightRange {
    pub min: i32,
    pub max: i32,
}

/// Outcome of a successful BMI calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    bmi: f64,

    /// Category of the unrounded BMI
    category: BmiCategory,

    /// Display color of the category
    color: DisplayColor,

    /// Estimated body fat percentage, one decimal place
    body_fat_percentage: f64,

    /// Ideal weight range in kilograms
    ideal_weight: IdealWeightRange,
}

impl BmiResult {
    pub(crate) fn new(
        bmi: f64,
        category: BmiCategory,
        body_fat_percentage: f64,
        ideal_weight: IdealWeightRange,
    ) -> Self {
        Self {
            bmi,
            category,
            color: category.color(),
            body_fat_percentage,
            ideal_weight,
        }
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn category(&self) -> BmiCategory {
        self.category
    }

    pub fn color(&self) -> DisplayColor {
        self.color
    }

    pub fn body_fat_percentage(&self) -> f64 {
        self.body_fat_percentage
    }

    pub fn ideal_weight(&self) -> IdealWeightRange {
        self.ideal_weight
    }
}
