use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Color tag a panel uses to render a category or risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
}

impl DisplayColor {
    /// Text color class used by the web front end
    pub fn css_class(&self) -> &'static str {
        match self {
            DisplayColor::Blue => "text-blue-500",
            DisplayColor::Green => "text-green-500",
            DisplayColor::Yellow => "text-yellow-500",
            DisplayColor::Orange => "text-orange-500",
            DisplayColor::Red => "text-red-500",
        }
    }
}
