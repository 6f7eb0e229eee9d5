//! Scene model.
//!
//! The scene is the single source of truth for elements and plot metadata.
//! Collections are insertion ordered; later elements are drawn on top and
//! win hit tests within their kind.

use floorplan_core::error::SceneError;
use floorplan_core::event_bus::ElementCounts;
use floorplan_settings::EditingSettings;

use crate::geometry::{self, Bounds};
use crate::model::{
    Door, Element, ElementId, ElementKind, ElementRef, Fixture, MapInfo, PlotSummary, Point,
    Property, PropertyEdit, Room, Stair, Wall, Window,
};

/// Distances below which a pointer hits an element, in feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTolerances {
    pub wall: f64,
    pub opening: f64,
    pub fixture: f64,
}

impl Default for HitTolerances {
    fn default() -> Self {
        Self::from(&EditingSettings::default())
    }
}

impl From<&EditingSettings> for HitTolerances {
    fn from(s: &EditingSettings) -> Self {
        Self {
            wall: s.wall_hit_tolerance_ft,
            opening: s.opening_hit_tolerance_ft,
            fixture: s.fixture_hit_tolerance_ft,
        }
    }
}

/// Corner handles of a rectangular room. Screen y grows downward, so "top"
/// is the smaller world y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerHandle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl CornerHandle {
    pub const ALL: [CornerHandle; 4] = [
        CornerHandle::TopLeft,
        CornerHandle::TopRight,
        CornerHandle::BottomLeft,
        CornerHandle::BottomRight,
    ];

    /// Position of this handle on `bounds`.
    pub fn position(&self, bounds: &Bounds) -> Point {
        match self {
            CornerHandle::TopLeft => Point::new(bounds.min_x, bounds.min_y),
            CornerHandle::TopRight => Point::new(bounds.max_x, bounds.min_y),
            CornerHandle::BottomLeft => Point::new(bounds.min_x, bounds.max_y),
            CornerHandle::BottomRight => Point::new(bounds.max_x, bounds.max_y),
        }
    }
}

/// Summary figures for the plan.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneStats {
    pub counts: ElementCounts,
    pub built_up_area: f64,
    pub plot_area: f64,
    /// Built-up area as a percentage of the plot area.
    pub coverage_percent: f64,
}

/// Deep copy of the scene contents, used by the history.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneSnapshot {
    rooms: Vec<Room>,
    walls: Vec<Wall>,
    doors: Vec<Door>,
    windows: Vec<Window>,
    fixtures: Vec<Fixture>,
    stairs: Vec<Stair>,
    plot: PlotSummary,
    map_info: MapInfo,
}

impl SceneSnapshot {
    pub fn element_count(&self) -> usize {
        self.rooms.len()
            + self.walls.len()
            + self.doors.len()
            + self.windows.len()
            + self.fixtures.len()
            + self.stairs.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    rooms: Vec<Room>,
    walls: Vec<Wall>,
    doors: Vec<Door>,
    windows: Vec<Window>,
    fixtures: Vec<Fixture>,
    stairs: Vec<Stair>,
    pub plot: PlotSummary,
    pub map_info: MapInfo,
    next_id: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(PlotSummary::default(), MapInfo::default())
    }
}

impl Scene {
    pub fn new(plot: PlotSummary, map_info: MapInfo) -> Self {
        Self {
            rooms: Vec::new(),
            walls: Vec::new(),
            doors: Vec::new(),
            windows: Vec::new(),
            fixtures: Vec::new(),
            stairs: Vec::new(),
            plot,
            map_info,
            next_id: 1,
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn stairs(&self) -> &[Stair] {
        &self.stairs
    }

    pub fn room(&self, id: ElementId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn wall(&self, id: ElementId) -> Option<&Wall> {
        self.walls.iter().find(|w| w.id == id)
    }

    pub fn door(&self, id: ElementId) -> Option<&Door> {
        self.doors.iter().find(|d| d.id == id)
    }

    pub fn window(&self, id: ElementId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn fixture(&self, id: ElementId) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.id == id)
    }

    pub fn stair(&self, id: ElementId) -> Option<&Stair> {
        self.stairs.iter().find(|s| s.id == id)
    }

    /// Owned copy of the referenced element.
    pub fn element(&self, r: ElementRef) -> Option<Element> {
        match r.kind {
            ElementKind::Room => self.room(r.id).cloned().map(Element::Room),
            ElementKind::Wall => self.wall(r.id).cloned().map(Element::Wall),
            ElementKind::Door => self.door(r.id).cloned().map(Element::Door),
            ElementKind::Window => self.window(r.id).cloned().map(Element::Window),
            ElementKind::Fixture => self.fixture(r.id).cloned().map(Element::Fixture),
            ElementKind::Stair => self.stair(r.id).cloned().map(Element::Stair),
        }
    }

    pub fn contains(&self, r: ElementRef) -> bool {
        match r.kind {
            ElementKind::Room => self.room(r.id).is_some(),
            ElementKind::Wall => self.wall(r.id).is_some(),
            ElementKind::Door => self.door(r.id).is_some(),
            ElementKind::Window => self.window(r.id).is_some(),
            ElementKind::Fixture => self.fixture(r.id).is_some(),
            ElementKind::Stair => self.stair(r.id).is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts().total() == 0
    }

    pub fn counts(&self) -> ElementCounts {
        ElementCounts {
            rooms: self.rooms.len(),
            walls: self.walls.len(),
            doors: self.doors.len(),
            windows: self.windows.len(),
            stairs: self.stairs.len(),
            fixtures: self.fixtures.len(),
        }
    }

    fn allocate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Validate, normalize and append an element.
    ///
    /// Returns the element's id, or `None` when the element fails its
    /// structural constraints (nothing is inserted in that case).
    pub fn add_element(&mut self, mut element: Element) -> Option<ElementId> {
        if !element.is_valid() {
            tracing::debug!("Rejected invalid {}", element.kind());
            return None;
        }
        element.normalize();

        let id = if element.id().is_assigned() && !self.contains(element.element_ref()) {
            self.next_id = self.next_id.max(element.id().0 + 1);
            element.id()
        } else {
            self.allocate_id()
        };
        element.set_id(id);

        match element {
            Element::Room(e) => self.rooms.push(e),
            Element::Wall(e) => self.walls.push(e),
            Element::Door(e) => self.doors.push(e),
            Element::Window(e) => self.windows.push(e),
            Element::Fixture(e) => self.fixtures.push(e),
            Element::Stair(e) => self.stairs.push(e),
        }
        Some(id)
    }

    /// Remove by identity. Returns the removed element, `None` on a miss.
    pub fn remove_element(&mut self, r: ElementRef) -> Option<Element> {
        fn take<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> Option<T> {
            items.iter().position(matches).map(|i| items.remove(i))
        }

        match r.kind {
            ElementKind::Room => take(&mut self.rooms, |e| e.id == r.id).map(Element::Room),
            ElementKind::Wall => take(&mut self.walls, |e| e.id == r.id).map(Element::Wall),
            ElementKind::Door => take(&mut self.doors, |e| e.id == r.id).map(Element::Door),
            ElementKind::Window => take(&mut self.windows, |e| e.id == r.id).map(Element::Window),
            ElementKind::Fixture => {
                take(&mut self.fixtures, |e| e.id == r.id).map(Element::Fixture)
            }
            ElementKind::Stair => take(&mut self.stairs, |e| e.id == r.id).map(Element::Stair),
        }
    }

    /// Remove every element, keeping plot and map metadata.
    pub fn clear(&mut self) {
        self.rooms.clear();
        self.walls.clear();
        self.doors.clear();
        self.windows.clear();
        self.fixtures.clear();
        self.stairs.clear();
    }

    /// Topmost element under `p`.
    ///
    /// Kinds are tried in a fixed order (fixtures, doors, windows, walls,
    /// rooms); within a kind the most recently added element wins.
    pub fn hit_test(&self, p: Point, tol: &HitTolerances) -> Option<ElementRef> {
        let fixture = self
            .fixtures
            .iter()
            .rev()
            .find(|f| f.position.distance_to(&p) < tol.fixture)
            .map(|f| ElementRef::new(ElementKind::Fixture, f.id));
        if fixture.is_some() {
            return fixture;
        }

        let door = self
            .doors
            .iter()
            .rev()
            .find(|d| d.position.distance_to(&p) < tol.opening)
            .map(|d| ElementRef::new(ElementKind::Door, d.id));
        if door.is_some() {
            return door;
        }

        let window = self
            .windows
            .iter()
            .rev()
            .find(|w| w.position.distance_to(&p) < tol.opening)
            .map(|w| ElementRef::new(ElementKind::Window, w.id));
        if window.is_some() {
            return window;
        }

        let wall = self
            .walls
            .iter()
            .rev()
            .find(|w| w.distance_to(p) < tol.wall)
            .map(|w| ElementRef::new(ElementKind::Wall, w.id));
        if wall.is_some() {
            return wall;
        }

        self.rooms
            .iter()
            .rev()
            .find(|r| r.contains(p))
            .map(|r| ElementRef::new(ElementKind::Room, r.id))
    }

    /// Wall closest to `p`, if that distance is strictly below `tolerance`.
    pub fn nearest_wall(&self, p: Point, tolerance: f64) -> Option<&Wall> {
        let mut best: Option<&Wall> = None;
        let mut best_dist = tolerance;
        for wall in &self.walls {
            let d = wall.distance_to(p);
            if d < best_dist {
                best_dist = d;
                best = Some(wall);
            }
        }
        best
    }

    /// First element whose anchor (or, for rooms, any vertex) lies in `bounds`.
    /// Order: fixtures, doors, windows, rooms.
    pub fn select_in_box(&self, bounds: &Bounds) -> Option<ElementRef> {
        if let Some(f) = self.fixtures.iter().find(|f| bounds.contains(f.position)) {
            return Some(ElementRef::new(ElementKind::Fixture, f.id));
        }
        if let Some(d) = self.doors.iter().find(|d| bounds.contains(d.position)) {
            return Some(ElementRef::new(ElementKind::Door, d.id));
        }
        if let Some(w) = self.windows.iter().find(|w| bounds.contains(w.position)) {
            return Some(ElementRef::new(ElementKind::Window, w.id));
        }
        self.rooms
            .iter()
            .find(|r| r.polygon.iter().any(|v| bounds.contains(*v)))
            .map(|r| ElementRef::new(ElementKind::Room, r.id))
    }

    pub fn move_room(&mut self, id: ElementId, dx: f64, dy: f64) -> bool {
        match self.rooms.iter_mut().find(|r| r.id == id) {
            Some(room) => {
                room.translate(dx, dy);
                true
            }
            None => false,
        }
    }

    /// Translate any element by a delta. Returns false when it does not exist.
    pub fn translate_element(&mut self, r: ElementRef, dx: f64, dy: f64) -> bool {
        match r.kind {
            ElementKind::Room => self.move_room(r.id, dx, dy),
            ElementKind::Wall => match self.walls.iter_mut().find(|e| e.id == r.id) {
                Some(wall) => {
                    wall.translate(dx, dy);
                    true
                }
                None => false,
            },
            ElementKind::Door => match self.doors.iter_mut().find(|e| e.id == r.id) {
                Some(door) => {
                    door.position = door.position.offset(dx, dy);
                    true
                }
                None => false,
            },
            ElementKind::Window => match self.windows.iter_mut().find(|e| e.id == r.id) {
                Some(window) => {
                    window.position = window.position.offset(dx, dy);
                    true
                }
                None => false,
            },
            ElementKind::Fixture => match self.fixtures.iter_mut().find(|e| e.id == r.id) {
                Some(fixture) => {
                    fixture.position = fixture.position.offset(dx, dy);
                    true
                }
                None => false,
            },
            ElementKind::Stair => match self.stairs.iter_mut().find(|e| e.id == r.id) {
                Some(stair) => {
                    stair.translate(dx, dy);
                    true
                }
                None => false,
            },
        }
    }

    /// Index of the room vertex within `tolerance` of `p` (closest wins).
    pub fn vertex_at(&self, room_id: ElementId, p: Point, tolerance: f64) -> Option<usize> {
        let room = self.room(room_id)?;
        room.polygon
            .iter()
            .enumerate()
            .map(|(i, v)| (i, v.distance_to(&p)))
            .filter(|(_, d)| *d < tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Free-form vertex drag.
    pub fn move_vertex(&mut self, room_id: ElementId, index: usize, p: Point) -> bool {
        match self
            .rooms
            .iter_mut()
            .find(|r| r.id == room_id)
            .and_then(|r| r.polygon.get_mut(index))
        {
            Some(v) => {
                *v = p;
                true
            }
            None => false,
        }
    }

    /// Corner handle of a rectangular room under `p`.
    pub fn corner_handle_at(
        &self,
        room_id: ElementId,
        p: Point,
        tolerance: f64,
    ) -> Option<CornerHandle> {
        let room = self.room(room_id).filter(|r| r.is_rectangle())?;
        let bounds = room.bounds();
        CornerHandle::ALL.into_iter().find(|h| {
            let c = h.position(&bounds);
            (c.x_ft - p.x_ft).abs() < tolerance && (c.y_ft - p.y_ft).abs() < tolerance
        })
    }

    /// Move one corner of a rectangular room to (`x`, `y`), anchoring the
    /// opposite corner.
    ///
    /// The resize is rejected, leaving the room untouched, when the room is
    /// not an axis-aligned rectangle or when the new width or height would
    /// fall below `min_size`.
    pub fn resize_from_handle(
        &mut self,
        room_id: ElementId,
        handle: CornerHandle,
        x: f64,
        y: f64,
        min_size: f64,
    ) -> bool {
        let Some(room) = self.rooms.iter_mut().find(|r| r.id == room_id) else {
            return false;
        };
        if !room.is_rectangle() {
            return false;
        }
        let old = room.bounds();
        let new = match handle {
            CornerHandle::TopLeft => Bounds::new(x, y, old.max_x, old.max_y),
            CornerHandle::TopRight => Bounds::new(old.min_x, y, x, old.max_y),
            CornerHandle::BottomLeft => Bounds::new(x, old.min_y, old.max_x, y),
            CornerHandle::BottomRight => Bounds::new(old.min_x, old.min_y, x, y),
        };
        if new.width() < min_size || new.height() < min_size {
            return false;
        }

        // keep vertex order: each vertex follows the edge it was on
        for v in &mut room.polygon {
            v.x_ft = if v.x_ft == old.min_x { new.min_x } else { new.max_x };
            v.y_ft = if v.y_ft == old.min_y { new.min_y } else { new.max_y };
        }
        true
    }

    /// Project every door and window onto its nearest wall within
    /// `tolerance`. Returns how many moved.
    pub fn resnap_openings(&mut self, tolerance: f64) -> usize {
        let snap = |walls: &[Wall], p: Point| -> Option<Point> {
            let mut best: Option<(f64, Point)> = None;
            for wall in walls {
                let d = wall.distance_to(p);
                if d < tolerance && best.is_none_or(|(bd, _)| d < bd) {
                    best = Some((d, wall.nearest_point(p)));
                }
            }
            best.map(|(_, q)| q).filter(|q| *q != p)
        };

        let mut moved = 0;
        for door in &mut self.doors {
            if let Some(q) = snap(&self.walls, door.position) {
                door.position = q;
                moved += 1;
            }
        }
        for window in &mut self.windows {
            if let Some(q) = snap(&self.walls, window.position) {
                window.position = q;
                moved += 1;
            }
        }
        moved
    }

    /// Apply a typed property edit.
    pub fn apply_property(&mut self, r: ElementRef, edit: PropertyEdit) -> Result<(), SceneError> {
        let mismatch = || SceneError::PropertyMismatch {
            kind: r.kind.to_string(),
            property: edit.name().to_string(),
        };
        let unknown = || SceneError::UnknownElement {
            kind: r.kind.to_string(),
            id: r.id.0,
        };
        if edit.number().is_some_and(|v| !v.is_finite()) {
            return Err(SceneError::NonFinite {
                property: edit.name().to_string(),
            });
        }

        match r.kind {
            ElementKind::Room => {
                let room = self.rooms.iter_mut().find(|e| e.id == r.id).ok_or_else(unknown)?;
                match &edit {
                    PropertyEdit::Name(name) => room.name = name.clone(),
                    PropertyEdit::RoomType(t) => room.room_type = *t,
                    _ => return Err(mismatch()),
                }
            }
            ElementKind::Wall => {
                let wall = self.walls.iter_mut().find(|e| e.id == r.id).ok_or_else(unknown)?;
                match &edit {
                    PropertyEdit::Thickness(t) => wall.thickness_ft = Wall::clamp_thickness(*t),
                    _ => return Err(mismatch()),
                }
            }
            ElementKind::Door => {
                let door = self.doors.iter_mut().find(|e| e.id == r.id).ok_or_else(unknown)?;
                match &edit {
                    PropertyEdit::Width(w) => door.width_ft = Door::clamp_width(*w),
                    PropertyEdit::Swing(s) => door.swing = *s,
                    PropertyEdit::X(x) => door.position.x_ft = *x,
                    PropertyEdit::Y(y) => door.position.y_ft = *y,
                    _ => return Err(mismatch()),
                }
            }
            ElementKind::Window => {
                let window = self
                    .windows
                    .iter_mut()
                    .find(|e| e.id == r.id)
                    .ok_or_else(unknown)?;
                match &edit {
                    PropertyEdit::Width(w) => window.width_ft = Window::clamp_width(*w),
                    PropertyEdit::X(x) => window.position.x_ft = *x,
                    PropertyEdit::Y(y) => window.position.y_ft = *y,
                    _ => return Err(mismatch()),
                }
            }
            ElementKind::Fixture => {
                let fixture = self
                    .fixtures
                    .iter_mut()
                    .find(|e| e.id == r.id)
                    .ok_or_else(unknown)?;
                match &edit {
                    PropertyEdit::FixtureType(t) => fixture.fixture_type = *t,
                    PropertyEdit::Rotation(deg) => {
                        fixture.rotation_deg = Fixture::normalize_rotation(*deg)
                    }
                    PropertyEdit::X(x) => fixture.position.x_ft = *x,
                    PropertyEdit::Y(y) => fixture.position.y_ft = *y,
                    _ => return Err(mismatch()),
                }
            }
            ElementKind::Stair => {
                let stair = self.stairs.iter_mut().find(|e| e.id == r.id).ok_or_else(unknown)?;
                match &edit {
                    PropertyEdit::Direction(d) => stair.direction = d.clone(),
                    PropertyEdit::Steps(n) => stair.steps = *n,
                    _ => return Err(mismatch()),
                }
            }
        }
        Ok(())
    }

    /// Name/value pairs for the properties panel.
    pub fn properties(&self, r: ElementRef) -> Option<Vec<Property>> {
        match r.kind {
            ElementKind::Room => self.room(r.id).map(Room::properties),
            ElementKind::Wall => self.wall(r.id).map(Wall::properties),
            ElementKind::Door => self.door(r.id).map(Door::properties),
            ElementKind::Window => self.window(r.id).map(Window::properties),
            ElementKind::Fixture => self.fixture(r.id).map(Fixture::properties),
            ElementKind::Stair => self.stair(r.id).map(Stair::properties),
        }
    }

    pub fn built_up_area(&self) -> f64 {
        self.rooms.iter().map(Room::area).sum()
    }

    pub fn stats(&self) -> SceneStats {
        let built_up_area = self.built_up_area();
        let plot_area = self.plot.area();
        let coverage_percent = if plot_area > 0.0 {
            built_up_area / plot_area * 100.0
        } else {
            0.0
        };
        SceneStats {
            counts: self.counts(),
            built_up_area,
            plot_area,
            coverage_percent,
        }
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            rooms: self.rooms.clone(),
            walls: self.walls.clone(),
            doors: self.doors.clone(),
            windows: self.windows.clone(),
            fixtures: self.fixtures.clone(),
            stairs: self.stairs.clone(),
            plot: self.plot.clone(),
            map_info: self.map_info.clone(),
        }
    }

    /// Replace the contents with a snapshot. The id counter keeps running
    /// so ids stay unique across undo/redo.
    pub fn restore(&mut self, snapshot: &SceneSnapshot) {
        self.rooms = snapshot.rooms.clone();
        self.walls = snapshot.walls.clone();
        self.doors = snapshot.doors.clone();
        self.windows = snapshot.windows.clone();
        self.fixtures = snapshot.fixtures.clone();
        self.stairs = snapshot.stairs.clone();
        self.plot = snapshot.plot.clone();
        self.map_info = snapshot.map_info.clone();

        let max_id = self
            .rooms
            .iter()
            .map(|e| e.id)
            .chain(self.walls.iter().map(|e| e.id))
            .chain(self.doors.iter().map(|e| e.id))
            .chain(self.windows.iter().map(|e| e.id))
            .chain(self.fixtures.iter().map(|e| e.id))
            .chain(self.stairs.iter().map(|e| e.id))
            .max()
            .unwrap_or_default();
        self.next_id = self.next_id.max(max_id.0 + 1);
    }

    /// Element under `p` among rooms only (used for labels and previews).
    pub fn room_at(&self, p: Point) -> Option<&Room> {
        self.rooms.iter().rev().find(|r| geometry::point_in_polygon(p, &r.polygon))
    }
}
