//! Unit formatting utilities
//!
//! The editing model works in feet. These helpers produce the display
//! strings used by labels and the summary panel, and the fixed-precision
//! rounding applied on export.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Feet to metres.
pub const FEET_TO_METERS: f64 = 0.3048;

/// Measurement system used for display strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Feet and square feet
    #[default]
    Imperial,
    /// Metres and square metres
    Metric,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imperial => write!(f, "Imperial"),
            Self::Metric => write!(f, "Metric"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "imperial" | "ft" | "feet" => Ok(Self::Imperial),
            "metric" | "m" | "meters" | "metres" => Ok(Self::Metric),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Length label, one decimal: `12.5 ft`
pub fn format_feet(value: f64) -> String {
    format!("{:.1} ft", value)
}

/// Area label, whole square feet: `80 sqft`
pub fn format_area(value: f64) -> String {
    format!("{} sqft", value.round() as i64)
}

/// Percentage label, one decimal: `53.3%`
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Length label in the chosen system
pub fn format_length(value_ft: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Imperial => format_feet(value_ft),
        MeasurementSystem::Metric => format!("{:.2} m", value_ft * FEET_TO_METERS),
    }
}

/// Area label in the chosen system
pub fn format_area_in(value_sqft: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Imperial => format_area(value_sqft),
        MeasurementSystem::Metric => {
            format!("{:.1} m²", value_sqft * FEET_TO_METERS * FEET_TO_METERS)
        }
    }
}
