//! Scene element types.
//!
//! Every element lives in world space (feet). Elements are plain data; the
//! [`crate::scene::Scene`] owns them and hands out [`ElementRef`]s.

mod fixture;
mod opening;
mod plot;
mod room;
mod stair;
mod wall;

pub use fixture::{Fixture, FixtureType};
pub use opening::{Door, DoorSwing, Window};
pub use plot::{MapInfo, PlotSummary};
pub use room::{Room, RoomType};
pub use stair::Stair;
pub use wall::Wall;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::{self, Bounds};

/// A point in world space, in feet.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x_ft: f64,
    pub y_ft: f64,
}

impl Point {
    pub fn new(x_ft: f64, y_ft: f64) -> Self {
        Self { x_ft, y_ft }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        geometry::distance(*self, *other)
    }

    /// Copy shifted by a delta.
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x_ft + dx, self.y_ft + dy)
    }
}

/// Process-unique element identifier. Zero means "not yet assigned".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl ElementId {
    pub const UNASSIGNED: ElementId = ElementId(0);

    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Element category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Room,
    Wall,
    Door,
    Window,
    Fixture,
    Stair,
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Room => "room",
            ElementKind::Wall => "wall",
            ElementKind::Door => "door",
            ElementKind::Window => "window",
            ElementKind::Fixture => "fixture",
            ElementKind::Stair => "stair",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Weak reference to an element: kind plus id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementRef {
    pub kind: ElementKind,
    pub id: ElementId,
}

impl ElementRef {
    pub fn new(kind: ElementKind, id: ElementId) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}

/// Owning sum type over every element kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Room(Room),
    Wall(Wall),
    Door(Door),
    Window(Window),
    Fixture(Fixture),
    Stair(Stair),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Room(_) => ElementKind::Room,
            Element::Wall(_) => ElementKind::Wall,
            Element::Door(_) => ElementKind::Door,
            Element::Window(_) => ElementKind::Window,
            Element::Fixture(_) => ElementKind::Fixture,
            Element::Stair(_) => ElementKind::Stair,
        }
    }

    pub fn id(&self) -> ElementId {
        match self {
            Element::Room(e) => e.id,
            Element::Wall(e) => e.id,
            Element::Door(e) => e.id,
            Element::Window(e) => e.id,
            Element::Fixture(e) => e.id,
            Element::Stair(e) => e.id,
        }
    }

    pub(crate) fn set_id(&mut self, id: ElementId) {
        match self {
            Element::Room(e) => e.id = id,
            Element::Wall(e) => e.id = id,
            Element::Door(e) => e.id = id,
            Element::Window(e) => e.id = id,
            Element::Fixture(e) => e.id = id,
            Element::Stair(e) => e.id = id,
        }
    }

    pub fn element_ref(&self) -> ElementRef {
        ElementRef::new(self.kind(), self.id())
    }

    /// Structural validity required for commit.
    pub fn is_valid(&self) -> bool {
        match self {
            Element::Room(e) => e.is_valid(),
            Element::Wall(e) => !e.is_degenerate(),
            Element::Door(e) => e.width_ft.is_finite(),
            Element::Window(e) => e.width_ft.is_finite(),
            Element::Fixture(e) => e.rotation_deg.is_finite(),
            Element::Stair(e) => e.footprint.len() >= 3,
        }
    }

    /// Bring ranged values into range (widths, thickness, rotation).
    pub fn normalize(&mut self) {
        match self {
            Element::Room(_) | Element::Stair(_) => {}
            Element::Wall(e) => e.thickness_ft = Wall::clamp_thickness(e.thickness_ft),
            Element::Door(e) => e.width_ft = Door::clamp_width(e.width_ft),
            Element::Window(e) => e.width_ft = Window::clamp_width(e.width_ft),
            Element::Fixture(e) => e.rotation_deg = Fixture::normalize_rotation(e.rotation_deg),
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Element::Room(e) => e.translate(dx, dy),
            Element::Wall(e) => e.translate(dx, dy),
            Element::Door(e) => e.position = e.position.offset(dx, dy),
            Element::Window(e) => e.position = e.position.offset(dx, dy),
            Element::Fixture(e) => e.position = e.position.offset(dx, dy),
            Element::Stair(e) => e.translate(dx, dy),
        }
    }

    /// Bounding box of the element's geometry.
    pub fn bounds(&self) -> Bounds {
        match self {
            Element::Room(e) => e.bounds(),
            Element::Wall(e) => Bounds::from_corners(e.start, e.end),
            Element::Door(e) => Bounds::from_corners(e.position, e.position),
            Element::Window(e) => Bounds::from_corners(e.position, e.position),
            Element::Fixture(e) => Bounds::from_corners(e.position, e.position),
            Element::Stair(e) => geometry::polygon_bounds(&e.footprint),
        }
    }
}

/// A name/value pair shown by the properties panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
}

impl Property {
    pub fn new(name: &str, value: PropertyValue) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }

    pub fn number(name: &str, value: f64) -> Self {
        Self::new(name, PropertyValue::Number(value))
    }

    pub fn text(name: &str, value: impl Into<String>) -> Self {
        Self::new(name, PropertyValue::String(value.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Number(f64),
    String(String),
    Bool(bool),
}

/// Typed edit pushed back from the properties panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyEdit {
    Name(String),
    RoomType(RoomType),
    Thickness(f64),
    Width(f64),
    Swing(DoorSwing),
    FixtureType(FixtureType),
    Rotation(f64),
    X(f64),
    Y(f64),
    Direction(String),
    Steps(u32),
}

impl PropertyEdit {
    pub fn name(&self) -> &'static str {
        match self {
            PropertyEdit::Name(_) => "name",
            PropertyEdit::RoomType(_) => "type",
            PropertyEdit::Thickness(_) => "thickness",
            PropertyEdit::Width(_) => "width",
            PropertyEdit::Swing(_) => "swing",
            PropertyEdit::FixtureType(_) => "fixture_type",
            PropertyEdit::Rotation(_) => "rotation",
            PropertyEdit::X(_) => "x",
            PropertyEdit::Y(_) => "y",
            PropertyEdit::Direction(_) => "direction",
            PropertyEdit::Steps(_) => "steps",
        }
    }

    /// The numeric payload, for edits that carry one.
    pub fn number(&self) -> Option<f64> {
        match self {
            PropertyEdit::Thickness(v)
            | PropertyEdit::Width(v)
            | PropertyEdit::Rotation(v)
            | PropertyEdit::X(v)
            | PropertyEdit::Y(v) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_dispatch() {
        let mut element = Element::Door(Door::new(Point::new(1.0, 1.0), 10.0, DoorSwing::OutLeft));
        assert_eq!(element.kind(), ElementKind::Door);
        assert!(!element.id().is_assigned());

        element.normalize();
        element.translate(2.0, -1.0);
        match &element {
            Element::Door(d) => {
                assert_eq!(d.width_ft, 6.0);
                assert_eq!(d.position, Point::new(3.0, 0.0));
            }
            other => panic!("unexpected {:?}", other),
        }

        element.set_id(ElementId(9));
        assert_eq!(element.element_ref().to_string(), "door #9");
    }

    #[test]
    fn test_validity() {
        let wall = Element::Wall(Wall::new(Point::new(1.0, 1.0), Point::new(1.0, 1.0), 0.5));
        assert!(!wall.is_valid());

        let room = Element::Room(Room::new(
            "Room 1",
            RoomType::Bedroom,
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
        ));
        assert!(!room.is_valid());
    }
}
