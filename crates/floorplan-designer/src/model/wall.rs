use floorplan_core::constants::{MAX_WALL_THICKNESS, MIN_WALL_THICKNESS};

use super::{ElementId, Point, Property};
use crate::geometry;

/// A straight wall segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub id: ElementId,
    pub start: Point,
    pub end: Point,
    pub thickness_ft: f64,
}

impl Wall {
    pub fn new(start: Point, end: Point, thickness_ft: f64) -> Self {
        Self {
            id: ElementId::UNASSIGNED,
            start,
            end,
            thickness_ft,
        }
    }

    pub fn clamp_thickness(thickness_ft: f64) -> f64 {
        thickness_ft.clamp(MIN_WALL_THICKNESS, MAX_WALL_THICKNESS)
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x_ft + self.end.x_ft) / 2.0,
            (self.start.y_ft + self.end.y_ft) / 2.0,
        )
    }

    pub fn distance_to(&self, p: Point) -> f64 {
        geometry::distance_to_segment(p, self.start, self.end)
    }

    pub fn nearest_point(&self, p: Point) -> Point {
        geometry::nearest_point_on_segment(p, self.start, self.end)
    }

    /// Direction angle in radians.
    pub fn angle(&self) -> f64 {
        (self.end.y_ft - self.start.y_ft).atan2(self.end.x_ft - self.start.x_ft)
    }

    /// Corner points of the wall drawn as a thick quad.
    pub fn outline(&self) -> [Point; 4] {
        let angle = self.angle();
        let half = self.thickness_ft / 2.0;
        let (nx, ny) = (-angle.sin() * half, angle.cos() * half);
        [
            self.start.offset(nx, ny),
            self.end.offset(nx, ny),
            self.end.offset(-nx, -ny),
            self.start.offset(-nx, -ny),
        ]
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.start = self.start.offset(dx, dy);
        self.end = self.end.offset(dx, dy);
    }

    pub fn properties(&self) -> Vec<Property> {
        vec![
            Property::number("length", self.length()),
            Property::number("thickness", self.thickness_ft),
            Property::number("start_x", self.start.x_ft),
            Property::number("start_y", self.start.y_ft),
            Property::number("end_x", self.end.x_ft),
            Property::number("end_y", self.end.y_ft),
        ]
    }
}
