use serde::{Deserialize, Serialize};

use super::{ElementId, Point, Property};

/// Plumbing and appliance fixtures. Unknown names map to [`FixtureType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FixtureType {
    #[default]
    Toilet,
    Sink,
    KitchenSink,
    Stove,
    Shower,
    Bathtub,
    Washer,
    Dryer,
    Other,
}

impl FixtureType {
    pub const ALL: [FixtureType; 9] = [
        FixtureType::Toilet,
        FixtureType::Sink,
        FixtureType::KitchenSink,
        FixtureType::Stove,
        FixtureType::Shower,
        FixtureType::Bathtub,
        FixtureType::Washer,
        FixtureType::Dryer,
        FixtureType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FixtureType::Toilet => "toilet",
            FixtureType::Sink => "sink",
            FixtureType::KitchenSink => "kitchen_sink",
            FixtureType::Stove => "stove",
            FixtureType::Shower => "shower",
            FixtureType::Bathtub => "bathtub",
            FixtureType::Washer => "washer",
            FixtureType::Dryer => "dryer",
            FixtureType::Other => "other",
        }
    }

    pub fn from_name(name: &str) -> Self {
        FixtureType::ALL
            .into_iter()
            .find(|t| t.as_str() == name)
            .unwrap_or(FixtureType::Other)
    }

    /// Glyph drawn at the fixture position.
    pub fn glyph(&self) -> &'static str {
        match self {
            FixtureType::Toilet => "🚽",
            FixtureType::Sink | FixtureType::KitchenSink => "🚰",
            FixtureType::Stove => "🔥",
            FixtureType::Shower => "🚿",
            FixtureType::Bathtub => "🛁",
            FixtureType::Washer => "🌀",
            FixtureType::Dryer => "📦",
            FixtureType::Other => "📍",
        }
    }

    /// Human-readable label for notifications.
    pub fn label(&self) -> &'static str {
        match self {
            FixtureType::Toilet => "Toilet",
            FixtureType::Sink => "Sink",
            FixtureType::KitchenSink => "Kitchen sink",
            FixtureType::Stove => "Stove",
            FixtureType::Shower => "Shower",
            FixtureType::Bathtub => "Bathtub",
            FixtureType::Washer => "Washer",
            FixtureType::Dryer => "Dryer",
            FixtureType::Other => "Fixture",
        }
    }
}

impl From<String> for FixtureType {
    fn from(name: String) -> Self {
        FixtureType::from_name(&name)
    }
}

impl From<FixtureType> for String {
    fn from(t: FixtureType) -> Self {
        t.as_str().to_string()
    }
}

impl std::fmt::Display for FixtureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub id: ElementId,
    pub position: Point,
    pub fixture_type: FixtureType,
    pub rotation_deg: f64,
}

impl Fixture {
    pub fn new(position: Point, fixture_type: FixtureType, rotation_deg: f64) -> Self {
        Self {
            id: ElementId::UNASSIGNED,
            position,
            fixture_type,
            rotation_deg,
        }
    }

    /// Wrap into [0, 360).
    pub fn normalize_rotation(rotation_deg: f64) -> f64 {
        let r = rotation_deg.rem_euclid(360.0);
        if r >= 360.0 {
            0.0
        } else {
            r
        }
    }

    pub fn properties(&self) -> Vec<Property> {
        vec![
            Property::text("fixture_type", self.fixture_type.as_str()),
            Property::number("x", self.position.x_ft),
            Property::number("y", self.position.y_ft),
            Property::number("rotation", self.rotation_deg),
        ]
    }
}
