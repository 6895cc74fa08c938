use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::display::DisplayColor;
use super::parsing::deserialize_field_text;

/// Raw blood pressure form input, exactly as typed into the panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(default)]
pub struct BloodPressureRequest {
    /// Systolic blood pressure (the higher number), mmHg
    #[serde(deserialize_with = "deserialize_field_text")]
    pub systolic: String,

    /// Diastolic blood pressure (the lower number), mmHg
    #[serde(deserialize_with = "deserialize_field_text")]
    pub diastolic: String,
}

/// A blood pressure reading that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloodPressureReading {
    systolic: u16,
    diastolic: u16,
}

impl BloodPressureReading {
    pub(crate) fn new(systolic: u16, diastolic: u16) -> Self {
        Self { systolic, diastolic }
    }

    pub fn systolic(&self) -> u16 {
        self.systolic
    }

    pub fn diastolic(&self) -> u16 {
        self.diastolic
    }
}

/// Blood pressure category based on measurements
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum BloodPressureCategory {
    /// Normal blood pressure (systolic < 120 and diastolic < 80)
    #[serde(rename = "Normal")]
    Normal,

    /// Elevated blood pressure (systolic 120-129 and diastolic < 80)
    #[serde(rename = "Elevated")]
    Elevated,

    /// Stage 1 Hypertension (systolic < 140 or diastolic < 90, once the above fail)
    #[serde(rename = "High Blood Pressure (Stage 1)")]
    Hypertension1,

    /// Stage 2 Hypertension (systolic ≥ 140 and diastolic ≥ 90)
    #[serde(rename = "High Blood Pressure (Stage 2)")]
    Hypertension2,
}

const NORMAL_RECOMMENDATIONS: &[&str] = &[
    "Maintain a balanced diet rich in fruits and vegetables",
    "Stay physically active with regular exercise",
    "Manage stress through relaxation techniques",
    "Get regular check-ups with your healthcare provider",
];

const ELEVATED_RECOMMENDATIONS: &[&str] = &[
    "Reduce sodium intake in your diet",
    "Increase physical activity to at least 150 minutes per week",
    "Practice stress management techniques",
    "Monitor your blood pressure regularly",
    "Consider lifestyle changes to prevent progression",
];

const STAGE_1_RECOMMENDATIONS: &[&str] = &[
    "Consult your healthcare provider for a treatment plan",
    "Reduce sodium intake to less than 2,300mg per day",
    "Increase physical activity and maintain a healthy weight",
    "Limit alcohol consumption",
    "Quit smoking if applicable",
    "Take prescribed medications as directed",
];

const STAGE_2_RECOMMENDATIONS: &[&str] = &[
    "Seek immediate medical attention",
    "Take prescribed medications as directed",
    "Follow a strict low-sodium diet",
    "Monitor blood pressure multiple times daily",
    "Avoid strenuous activities until cleared by a doctor",
    "Keep a log of your blood pressure readings",
];

impl BloodPressureCategory {
    /// All categories in ascending severity
    pub const ALL: [BloodPressureCategory; 4] = [
        BloodPressureCategory::Normal,
        BloodPressureCategory::Elevated,
        BloodPressureCategory::Hypertension1,
        BloodPressureCategory::Hypertension2,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "Normal",
            BloodPressureCategory::Elevated => "Elevated",
            BloodPressureCategory::Hypertension1 => "High Blood Pressure (Stage 1)",
            BloodPressureCategory::Hypertension2 => "High Blood Pressure (Stage 2)",
        }
    }

    /// Abbreviated label used in the reference table
    pub fn short_label(&self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "Normal",
            BloodPressureCategory::Elevated => "Elevated",
            BloodPressureCategory::Hypertension1 => "High BP (Stage 1)",
            BloodPressureCategory::Hypertension2 => "High BP (Stage 2)",
        }
    }

    /// Range shown in the panel's reference table
    pub fn range_label(&self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "< 120/80 mmHg",
            BloodPressureCategory::Elevated => "120-129/< 80 mmHg",
            BloodPressureCategory::Hypertension1 => "130-139/80-89 mmHg",
            BloodPressureCategory::Hypertension2 => "≥ 140/90 mmHg",
        }
    }

    pub fn color(&self) -> DisplayColor {
        match self {
            BloodPressureCategory::Normal => DisplayColor::Green,
            BloodPressureCategory::Elevated => DisplayColor::Yellow,
            BloodPressureCategory::Hypertension1 => DisplayColor::Orange,
            BloodPressureCategory::Hypertension2 => DisplayColor::Red,
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        match self {
            BloodPressureCategory::Normal => RiskLevel::Low,
            BloodPressureCategory::Elevated | BloodPressureCategory::Hypertension1 => RiskLevel::Medium,
            BloodPressureCategory::Hypertension2 => RiskLevel::High,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => {
                "Your blood pressure is within the normal range. Keep maintaining a healthy lifestyle!"
            }
            BloodPressureCategory::Elevated => {
                "Your blood pressure is slightly elevated. Consider lifestyle changes to prevent hypertension."
            }
            BloodPressureCategory::Hypertension1 => {
                "You have Stage 1 hypertension. Consult your healthcare provider for lifestyle changes and possible medication."
            }
            BloodPressureCategory::Hypertension2 => {
                "You have Stage 2 hypertension. Immediate medical attention is recommended."
            }
        }
    }

    /// Ordered recommendations for this category
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            BloodPressureCategory::Normal => NORMAL_RECOMMENDATIONS,
            BloodPressureCategory::Elevated => ELEVATED_RECOMMENDATIONS,
            BloodPressureCategory::Hypertension1 => STAGE_1_RECOMMENDATIONS,
            BloodPressureCategory::Hypertension2 => STAGE_2_RECOMMENDATIONS,
        }
    }
}

impl std::fmt::Display for BloodPressureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Cardiovascular risk attached to a category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Capitalized label shown in the panel
    pub fn display_label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Color of the risk badge
    pub fn color(&self) -> DisplayColor {
        match self {
            RiskLevel::Low => DisplayColor::Green,
            RiskLevel::Medium => DisplayColor::Yellow,
            RiskLevel::High => DisplayColor::Red,
        }
    }
}

/// Outcome of a successful blood pressure categorization
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BloodPressureResult {
    category: BloodPressureCategory,
    color: DisplayColor,
    description: String,
    recommendations: Vec<String>,
    risk_level: RiskLevel,
}

impl BloodPressureResult {
    pub(crate) fn for_category(category: BloodPressureCategory) -> Self {
        Self {
            category,
            color: category.color(),
            description: category.description().to_string(),
            recommendations: category.recommendations().iter().map(|r| r.to_string()).collect(),
            risk_level: category.risk_level(),
        }
    }

    pub fn category(&self) -> BloodPressureCategory {
        self.category
    }

    pub fn color(&self) -> DisplayColor {
        self.color
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }
}
