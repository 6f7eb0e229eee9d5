use serde::{Deserialize, Serialize};

use floorplan_core::constants::*;
use floorplan_settings::{MapDefaults, PlotDefaults};

use super::Point;
use crate::geometry::Bounds;

/// Plot dimensions and setbacks. Length runs along x, width along y.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSummary {
    pub plot_length_ft: f64,
    pub plot_width_ft: f64,
    pub setback_front_ft: f64,
    pub setback_rear_ft: f64,
    pub setback_side_left_ft: f64,
    pub setback_side_right_ft: f64,
}

impl Default for PlotSummary {
    fn default() -> Self {
        Self {
            plot_length_ft: DEFAULT_PLOT_LENGTH_FT,
            plot_width_ft: DEFAULT_PLOT_WIDTH_FT,
            setback_front_ft: DEFAULT_SETBACK_FRONT_FT,
            setback_rear_ft: DEFAULT_SETBACK_REAR_FT,
            setback_side_left_ft: DEFAULT_SETBACK_SIDE_FT,
            setback_side_right_ft: DEFAULT_SETBACK_SIDE_FT,
        }
    }
}

impl From<&PlotDefaults> for PlotSummary {
    fn from(d: &PlotDefaults) -> Self {
        Self {
            plot_length_ft: d.plot_length_ft,
            plot_width_ft: d.plot_width_ft,
            setback_front_ft: d.setback_front_ft,
            setback_rear_ft: d.setback_rear_ft,
            setback_side_left_ft: d.setback_side_left_ft,
            setback_side_right_ft: d.setback_side_right_ft,
        }
    }
}

impl PlotSummary {
    pub fn area(&self) -> f64 {
        self.plot_length_ft * self.plot_width_ft
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.plot_length_ft, self.plot_width_ft)
    }

    /// Area left after setbacks; front is at y = 0.
    pub fn buildable_bounds(&self) -> Bounds {
        Bounds::new(
            self.setback_side_left_ft,
            self.setback_front_ft,
            self.plot_length_ft - self.setback_side_right_ft,
            self.plot_width_ft - self.setback_rear_ft,
        )
    }

    /// Reason the dimensions are unusable, if they are.
    pub fn check(&self) -> Option<String> {
        for (name, v) in [
            ("plot_length_ft", self.plot_length_ft),
            ("plot_width_ft", self.plot_width_ft),
        ] {
            if !(v > 0.0 && v <= MAX_PLOT_DIMENSION_FT) {
                return Some(format!("{} must be in (0, {}], got {}", name, MAX_PLOT_DIMENSION_FT, v));
            }
        }
        for (name, v) in [
            ("setback_front_ft", self.setback_front_ft),
            ("setback_rear_ft", self.setback_rear_ft),
            ("setback_side_left_ft", self.setback_side_left_ft),
            ("setback_side_right_ft", self.setback_side_right_ft),
        ] {
            if !(v >= 0.0 && v.is_finite()) {
                return Some(format!("{} must be a non-negative number, got {}", name, v));
            }
        }
        None
    }

    /// True when `p` lies within `tolerance` of any of the four boundary lines.
    pub fn is_near_boundary(&self, p: Point, tolerance: f64) -> bool {
        p.x_ft.abs() < tolerance
            || p.y_ft.abs() < tolerance
            || (p.x_ft - self.plot_length_ft).abs() < tolerance
            || (p.y_ft - self.plot_width_ft).abs() < tolerance
    }
}

/// Title-block metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapInfo {
    pub title: String,
    pub author: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub scale: String,
    pub north_direction: String,
}

impl Default for MapInfo {
    fn default() -> Self {
        Self::from(&MapDefaults::default())
    }
}

impl From<&MapDefaults> for MapInfo {
    fn from(d: &MapDefaults) -> Self {
        Self {
            title: d.title.clone(),
            author: d.author.clone(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            scale: d.scale.clone(),
            north_direction: d.north_direction.clone(),
        }
    }
}
