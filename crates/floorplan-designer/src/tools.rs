//! Tool state machine data.
//!
//! Holds the active tool and every transient buffer a gesture needs
//! (polygon points, pending wall start, drag, rubber-band box). Transient
//! state never reaches the scene until a commit; switching tools drops it.

use std::fmt;

use crate::geometry::Bounds;
use crate::model::{ElementId, ElementRef, FixtureType, Point};
use crate::scene::CornerHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Room,
    Wall,
    Door,
    Window,
    Fixture,
}

impl ToolKind {
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Select => "select",
            ToolKind::Room => "room",
            ToolKind::Wall => "wall",
            ToolKind::Door => "door",
            ToolKind::Window => "window",
            ToolKind::Fixture => "fixture",
        }
    }

    /// Keyboard shortcut, case-insensitive.
    pub fn from_shortcut(c: char) -> Option<ToolKind> {
        match c.to_ascii_lowercase() {
            'v' => Some(ToolKind::Select),
            'r' => Some(ToolKind::Room),
            'w' => Some(ToolKind::Wall),
            'd' => Some(ToolKind::Door),
            'n' => Some(ToolKind::Window),
            'f' => Some(ToolKind::Fixture),
            _ => None,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// In-progress pointer drag in the select tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// Translating an element by incremental deltas.
    Move {
        target: ElementRef,
        last: Point,
        moved: bool,
    },
    /// Dragging a corner of a rectangular room.
    Resize {
        room: ElementId,
        handle: CornerHandle,
        moved: bool,
    },
    /// Dragging one vertex of a polygon room.
    Vertex {
        room: ElementId,
        index: usize,
        moved: bool,
    },
}

impl DragState {
    pub fn moved(&self) -> bool {
        match self {
            DragState::Move { moved, .. }
            | DragState::Resize { moved, .. }
            | DragState::Vertex { moved, .. } => *moved,
        }
    }

    pub(crate) fn mark_moved(&mut self) {
        match self {
            DragState::Move { moved, .. }
            | DragState::Resize { moved, .. }
            | DragState::Vertex { moved, .. } => *moved = true,
        }
    }
}

/// Rubber-band selection rectangle in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionBox {
    pub start: Point,
    pub end: Point,
}

impl SelectionBox {
    pub fn new(start: Point) -> Self {
        Self { start, end: start }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_corners(self.start, self.end)
    }

    /// True when the box spans more than `min_span` on either axis.
    pub fn exceeds(&self, min_span: f64) -> bool {
        (self.end.x_ft - self.start.x_ft).abs() > min_span
            || (self.end.y_ft - self.start.y_ft).abs() > min_span
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToolState {
    active: ToolKind,
    drawing_points: Vec<Point>,
    pending_wall_start: Option<Point>,
    cursor: Option<Point>,
    drag: Option<DragState>,
    selection_box: Option<SelectionBox>,
    fixture_type: FixtureType,
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ToolKind {
        self.active
    }

    /// Switch tools, discarding transient state. Returns false when the
    /// tool was already active (transient state is still cleared).
    pub fn set_active(&mut self, tool: ToolKind) -> bool {
        self.clear_transient();
        let changed = self.active != tool;
        self.active = tool;
        changed
    }

    pub fn clear_transient(&mut self) {
        self.drawing_points.clear();
        self.pending_wall_start = None;
        self.drag = None;
        self.selection_box = None;
    }

    pub fn drawing_points(&self) -> &[Point] {
        &self.drawing_points
    }

    /// Append a polygon point; consecutive duplicates are collapsed.
    pub fn push_point(&mut self, p: Point) -> bool {
        if self.drawing_points.last() == Some(&p) {
            return false;
        }
        self.drawing_points.push(p);
        true
    }

    pub(crate) fn take_points(&mut self) -> Vec<Point> {
        std::mem::take(&mut self.drawing_points)
    }

    pub fn pending_wall_start(&self) -> Option<Point> {
        self.pending_wall_start
    }

    pub(crate) fn set_pending_wall_start(&mut self, p: Option<Point>) {
        self.pending_wall_start = p;
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub(crate) fn set_cursor(&mut self, p: Point) {
        self.cursor = Some(p);
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub(crate) fn drag_mut(&mut self) -> Option<&mut DragState> {
        self.drag.as_mut()
    }

    pub(crate) fn set_drag(&mut self, drag: Option<DragState>) {
        self.drag = drag;
    }

    pub fn selection_box(&self) -> Option<&SelectionBox> {
        self.selection_box.as_ref()
    }

    pub(crate) fn selection_box_mut(&mut self) -> Option<&mut SelectionBox> {
        self.selection_box.as_mut()
    }

    pub(crate) fn set_selection_box(&mut self, b: Option<SelectionBox>) {
        self.selection_box = b;
    }

    pub fn fixture_type(&self) -> FixtureType {
        self.fixture_type
    }

    /// Palette choice for the fixture tool.
    pub fn set_fixture_type(&mut self, t: FixtureType) {
        self.fixture_type = t;
    }

    /// True while a gesture is in progress.
    pub fn is_busy(&self) -> bool {
        !self.drawing_points.is_empty()
            || self.pending_wall_start.is_some()
            || self.drag.is_some()
            || self.selection_box.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts() {
        assert_eq!(ToolKind::from_shortcut('N'), Some(ToolKind::Window));
        assert_eq!(ToolKind::from_shortcut('f'), Some(ToolKind::Fixture));
        assert_eq!(ToolKind::from_shortcut('x'), None);
    }

    #[test]
    fn test_switch_clears_transient() {
        let mut tools = ToolState::new();
        tools.set_active(ToolKind::Room);
        tools.push_point(Point::new(0.0, 0.0));
        tools.set_pending_wall_start(Some(Point::new(1.0, 1.0)));
        assert!(tools.is_busy());

        assert!(tools.set_active(ToolKind::Wall));
        assert!(tools.drawing_points().is_empty());
        assert!(tools.pending_wall_start().is_none());
        assert!(!tools.is_busy());
    }

    #[test]
    fn test_duplicate_points_collapse() {
        let mut tools = ToolState::new();
        let p = Point::new(2.0, 3.0);
        assert!(tools.push_point(p));
        assert!(!tools.push_point(p));
        assert!(tools.push_point(Point::new(4.0, 3.0)));
        assert!(tools.push_point(p));
        assert_eq!(tools.drawing_points().len(), 3);
    }

    #[test]
    fn test_selection_box_span() {
        let mut b = SelectionBox::new(Point::new(0.0, 0.0));
        b.end = Point::new(1.0, 0.5);
        assert!(!b.exceeds(1.0));
        b.end = Point::new(1.01, 0.0);
        assert!(b.exceeds(1.0));
        assert_eq!(b.bounds().width(), 1.01);
    }
}
