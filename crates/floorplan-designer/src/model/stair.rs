use super::{ElementId, Point, Property};

/// Staircase footprint. Stored and drawn, never edited geometrically.
#[derive(Debug, Clone, PartialEq)]
pub struct Stair {
    pub id: ElementId,
    pub footprint: Vec<Point>,
    pub direction: String,
    pub steps: u32,
}

impl Stair {
    pub fn new(footprint: Vec<Point>, direction: impl Into<String>, steps: u32) -> Self {
        Self {
            id: ElementId::UNASSIGNED,
            footprint,
            direction: direction.into(),
            steps,
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.footprint {
            *p = p.offset(dx, dy);
        }
    }

    pub fn properties(&self) -> Vec<Property> {
        vec![
            Property::text("direction", self.direction.clone()),
            Property::number("steps", self.steps as f64),
        ]
    }
}
