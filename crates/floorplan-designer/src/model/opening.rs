use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

use floorplan_core::constants::{MAX_DOOR_WIDTH, MAX_WINDOW_WIDTH, MIN_DOOR_WIDTH, MIN_WINDOW_WIDTH};

use super::{ElementId, Point, Property};

/// Which way a door leaf opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoorSwing {
    InLeft,
    #[default]
    InRight,
    OutLeft,
    OutRight,
}

impl DoorSwing {
    pub const ALL: [DoorSwing; 4] = [
        DoorSwing::InLeft,
        DoorSwing::InRight,
        DoorSwing::OutLeft,
        DoorSwing::OutRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DoorSwing::InLeft => "in-left",
            DoorSwing::InRight => "in-right",
            DoorSwing::OutLeft => "out-left",
            DoorSwing::OutRight => "out-right",
        }
    }

    /// Start angle of the quarter arc, in radians.
    pub fn arc_start_angle(&self) -> f64 {
        match self {
            DoorSwing::InLeft => 0.0,
            DoorSwing::InRight => FRAC_PI_2,
            DoorSwing::OutLeft => PI,
            DoorSwing::OutRight => -FRAC_PI_2,
        }
    }
}

impl std::fmt::Display for DoorSwing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DoorSwing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DoorSwing::ALL
            .into_iter()
            .find(|swing| swing.as_str() == s)
            .ok_or_else(|| format!("Unknown door swing: {}", s))
    }
}

/// A door anchored at a point (normally on a wall).
#[derive(Debug, Clone, PartialEq)]
pub struct Door {
    pub id: ElementId,
    pub position: Point,
    pub width_ft: f64,
    pub swing: DoorSwing,
}

impl Door {
    pub fn new(position: Point, width_ft: f64, swing: DoorSwing) -> Self {
        Self {
            id: ElementId::UNASSIGNED,
            position,
            width_ft,
            swing,
        }
    }

    pub fn clamp_width(width_ft: f64) -> f64 {
        width_ft.clamp(MIN_DOOR_WIDTH, MAX_DOOR_WIDTH)
    }

    pub fn properties(&self) -> Vec<Property> {
        vec![
            Property::number("x", self.position.x_ft),
            Property::number("y", self.position.y_ft),
            Property::number("width", self.width_ft),
            Property::text("swing", self.swing.as_str()),
        ]
    }
}

/// A window anchored at a point (normally on a wall).
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub id: ElementId,
    pub position: Point,
    pub width_ft: f64,
}

impl Window {
    pub fn new(position: Point, width_ft: f64) -> Self {
        Self {
            id: ElementId::UNASSIGNED,
            position,
            width_ft,
        }
    }

    pub fn clamp_width(width_ft: f64) -> f64 {
        width_ft.clamp(MIN_WINDOW_WIDTH, MAX_WINDOW_WIDTH)
    }

    pub fn properties(&self) -> Vec<Property> {
        vec![
            Property::number("x", self.position.x_ft),
            Property::number("y", self.position.y_ft),
            Property::number("width", self.width_ft),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swing_wire_names() {
        assert_eq!(
            serde_json::to_string(&DoorSwing::OutRight).unwrap(),
            "\"out-right\""
        );
        assert_eq!("in-left".parse::<DoorSwing>(), Ok(DoorSwing::InLeft));
        assert!("sideways".parse::<DoorSwing>().is_err());
        assert_eq!(DoorSwing::default(), DoorSwing::InRight);
    }

    #[test]
    fn test_width_ranges() {
        assert_eq!(Door::clamp_width(1.0), 2.0);
        assert_eq!(Door::clamp_width(7.0), 6.0);
        assert_eq!(Window::clamp_width(1.0), 1.5);
        assert_eq!(Window::clamp_width(3.0), 3.0);
    }
}
