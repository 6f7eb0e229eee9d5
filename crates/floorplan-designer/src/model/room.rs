use serde::{Deserialize, Serialize};

use super::{ElementId, Point, Property};
use crate::geometry::{self, Bounds};

/// Functional category of a room. Unknown names map to [`RoomType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomType {
    #[default]
    Bedroom,
    Bathroom,
    Kitchen,
    LivingRoom,
    Dining,
    Hallway,
    PoojaRoom,
    Utility,
    Storage,
    Entry,
    Other,
}

impl RoomType {
    pub const ALL: [RoomType; 11] = [
        RoomType::Bedroom,
        RoomType::Bathroom,
        RoomType::Kitchen,
        RoomType::LivingRoom,
        RoomType::Dining,
        RoomType::Hallway,
        RoomType::PoojaRoom,
        RoomType::Utility,
        RoomType::Storage,
        RoomType::Entry,
        RoomType::Other,
    ];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Bedroom => "bedroom",
            RoomType::Bathroom => "bathroom",
            RoomType::Kitchen => "kitchen",
            RoomType::LivingRoom => "living_room",
            RoomType::Dining => "dining",
            RoomType::Hallway => "hallway",
            RoomType::PoojaRoom => "pooja_room",
            RoomType::Utility => "utility",
            RoomType::Storage => "storage",
            RoomType::Entry => "entry",
            RoomType::Other => "other",
        }
    }

    pub fn from_name(name: &str) -> Self {
        RoomType::ALL
            .into_iter()
            .find(|t| t.as_str() == name)
            .unwrap_or(RoomType::Other)
    }

    /// Fill colour used by the renderer.
    pub fn fill_color(&self) -> &'static str {
        match self {
            RoomType::Bedroom => "#e8f5e9",
            RoomType::Bathroom => "#e0f2f1",
            RoomType::Kitchen => "#fff3e0",
            RoomType::LivingRoom => "#e3f2fd",
            RoomType::Dining => "#fce4ec",
            RoomType::Hallway => "#f3e5f5",
            RoomType::PoojaRoom => "#fff9c4",
            RoomType::Utility => "#f1f8e9",
            RoomType::Storage => "#efebe9",
            RoomType::Entry => "#ffebee",
            RoomType::Other => "#f5f5f5",
        }
    }
}

impl From<String> for RoomType {
    fn from(name: String) -> Self {
        RoomType::from_name(&name)
    }
}

impl From<RoomType> for String {
    fn from(t: RoomType) -> Self {
        t.as_str().to_string()
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A room: a named, typed polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: ElementId,
    pub name: String,
    pub room_type: RoomType,
    pub polygon: Vec<Point>,
}

impl Room {
    pub fn new(name: impl Into<String>, room_type: RoomType, polygon: Vec<Point>) -> Self {
        Self {
            id: ElementId::UNASSIGNED,
            name: name.into(),
            room_type,
            polygon,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.polygon.len() >= 3
    }

    pub fn area(&self) -> f64 {
        geometry::polygon_area(&self.polygon)
    }

    pub fn bounds(&self) -> Bounds {
        geometry::polygon_bounds(&self.polygon)
    }

    pub fn label_anchor(&self) -> Point {
        geometry::polygon_centroid_of_bounds(&self.polygon)
    }

    pub fn contains(&self, p: Point) -> bool {
        geometry::point_in_polygon(p, &self.polygon)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for v in &mut self.polygon {
            *v = v.offset(dx, dy);
        }
    }

    pub fn is_rectangle(&self) -> bool {
        geometry::is_axis_aligned_rectangle(&self.polygon)
    }

    pub fn properties(&self) -> Vec<Property> {
        let b = self.bounds();
        vec![
            Property::text("name", self.name.clone()),
            Property::text("type", self.room_type.as_str()),
            Property::number("area", self.area()),
            Property::number("vertices", self.polygon.len() as f64),
            Property::number("width", b.width()),
            Property::number("height", b.height()),
        ]
    }
}
