//! Input queue and tool dispatch.
//!
//! Events are queued by the host and drained in order. Every handler works
//! in world feet; screen coordinates are converted once on entry.

use floorplan_core::constants::{WHEEL_PAN_FACTOR, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};
use floorplan_core::event_bus::EditorEvent;

use super::EditorSession;
use crate::input::{InputEvent, Key, Modifiers};
use crate::model::{
    Door, DoorSwing, Element, ElementKind, ElementRef, Fixture, Point, Room, RoomType, Wall,
    Window,
};
use crate::tools::{DragState, SelectionBox, ToolKind};

impl EditorSession {
    /// Queue an event for the next [`EditorSession::process_events`].
    pub fn queue(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    pub fn queued_events(&self) -> usize {
        self.queue.len()
    }

    /// Drain the queue in delivery order. Returns how many events ran.
    pub fn process_events(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.queue.pop_front() {
            self.dispatch(event);
            handled += 1;
        }
        handled
    }

    /// Handle one event synchronously.
    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y, modifiers } => self.pointer_down(x, y, modifiers),
            InputEvent::PointerMove { x, y, .. } => self.pointer_move(x, y),
            InputEvent::PointerUp { .. } => self.pointer_up(),
            InputEvent::DoubleClick { .. } => {
                if self.tools.active() == ToolKind::Room {
                    self.finish_room();
                }
            }
            InputEvent::Key { key, modifiers } => self.key_down(key, modifiers),
            InputEvent::Wheel {
                dx,
                dy,
                x,
                y,
                modifiers,
            } => self.wheel(dx, dy, x, y, modifiers),
            InputEvent::Resize { width, height } => self.resize_canvas(width, height),
        }
    }

    fn pointer_down(&mut self, sx: f64, sy: f64, _modifiers: Modifiers) {
        let p = self.viewport.screen_to_world(sx, sy);
        match self.tools.active() {
            ToolKind::Select => self.select_down(p),
            ToolKind::Room => {
                self.tools.push_point(p);
            }
            ToolKind::Wall => self.wall_click(p),
            ToolKind::Door => self.place_opening(p, ElementKind::Door),
            ToolKind::Window => self.place_opening(p, ElementKind::Window),
            ToolKind::Fixture => self.place_fixture(p),
        }
    }

    fn select_down(&mut self, p: Point) {
        let handle_tol = self.config.editing.vertex_handle_tolerance_ft;

        if let Some(ElementRef {
            kind: ElementKind::Room,
            id,
        }) = self.selection
        {
            if let Some(handle) = self.scene.corner_handle_at(id, p, handle_tol) {
                self.tools.set_drag(Some(DragState::Resize {
                    room: id,
                    handle,
                    moved: false,
                }));
                return;
            }
            let is_rectangle = self.scene.room(id).is_some_and(Room::is_rectangle);
            if !is_rectangle {
                if let Some(index) = self.scene.vertex_at(id, p, handle_tol) {
                    self.tools.set_drag(Some(DragState::Vertex {
                        room: id,
                        index,
                        moved: false,
                    }));
                    return;
                }
            }
        }

        match self.scene.hit_test(p, &self.tolerances) {
            Some(target) => {
                self.select(Some(target));
                self.tools.set_drag(Some(DragState::Move {
                    target,
                    last: p,
                    moved: false,
                }));
            }
            None => {
                self.select(None);
                self.tools.set_selection_box(Some(SelectionBox::new(p)));
            }
        }
    }

    fn pointer_move(&mut self, sx: f64, sy: f64) {
        let p = self.viewport.screen_to_world(sx, sy);
        self.tools.set_cursor(p);

        let min_size = self.config.editing.min_room_size_ft;
        if let Some(drag) = self.tools.drag().copied() {
            let changed = match drag {
                DragState::Move { target, last, .. } => {
                    let (dx, dy) = (p.x_ft - last.x_ft, p.y_ft - last.y_ft);
                    let moved = (dx != 0.0 || dy != 0.0)
                        && self.scene.translate_element(target, dx, dy);
                    if let Some(DragState::Move { last, .. }) = self.tools.drag_mut() {
                        *last = p;
                    }
                    moved
                }
                DragState::Resize { room, handle, .. } => {
                    self.scene
                        .resize_from_handle(room, handle, p.x_ft, p.y_ft, min_size)
                }
                DragState::Vertex { room, index, .. } => self.scene.move_vertex(room, index, p),
            };
            if changed {
                if let Some(drag) = self.tools.drag_mut() {
                    drag.mark_moved();
                }
            }
            return;
        }

        if let Some(selection_box) = self.tools.selection_box_mut() {
            selection_box.end = p;
        }
    }

    fn pointer_up(&mut self) {
        if let Some(drag) = self.tools.drag().copied() {
            self.tools.set_drag(None);
            if drag.moved() {
                let label = match drag {
                    DragState::Move { target, .. } => format!("Move {}", target.kind),
                    DragState::Resize { .. } => "Resize room".to_string(),
                    DragState::Vertex { .. } => "Move vertex".to_string(),
                };
                self.commit(&label);
            }
            return;
        }

        if let Some(selection_box) = self.tools.selection_box().copied() {
            self.tools.set_selection_box(None);
            if !selection_box.exceeds(self.config.editing.selection_box_min_span_ft) {
                return;
            }
            if let Some(found) = self.scene.select_in_box(&selection_box.bounds()) {
                self.select(Some(found));
                self.notify(EditorEvent::info(format!("Selected {}", found.kind)));
            }
        }
    }

    /// Commit the in-progress room polygon. Fewer than three points keeps
    /// the buffer and does nothing.
    pub fn finish_room(&mut self) -> bool {
        if self.tools.drawing_points().len() < 3 {
            return false;
        }
        let polygon = self.tools.take_points();
        let name = format!("Room {}", self.scene.rooms().len() + 1);
        let room = Room::new(name.clone(), RoomType::Bedroom, polygon);

        match self.add_element(Element::Room(room)) {
            Some(id) => {
                self.select(Some(ElementRef::new(ElementKind::Room, id)));
                self.notify(EditorEvent::success(format!("Room \"{}\" created", name)));
                true
            }
            None => false,
        }
    }

    fn wall_click(&mut self, p: Point) {
        let Some(start) = self.tools.pending_wall_start() else {
            self.tools.set_pending_wall_start(Some(p));
            return;
        };

        let editing = &self.config.editing;
        if start.distance_to(&p) < editing.min_wall_length_ft {
            tracing::debug!("Wall shorter than {} ft ignored", editing.min_wall_length_ft);
            return;
        }

        let plot = &self.scene.plot;
        let outer = plot.is_near_boundary(start, editing.plot_boundary_tolerance_ft)
            || plot.is_near_boundary(p, editing.plot_boundary_tolerance_ft);
        let thickness = if outer {
            editing.outer_wall_thickness_ft
        } else {
            editing.inner_wall_thickness_ft
        };

        if self.add_element(Element::Wall(Wall::new(start, p, thickness))).is_some() {
            self.tools.set_pending_wall_start(Some(p));
            self.notify(EditorEvent::success("Wall created"));
        }
    }

    fn place_opening(&mut self, p: Point, kind: ElementKind) {
        let Some(wall) = self
            .scene
            .nearest_wall(p, self.config.editing.wall_snap_tolerance_ft)
        else {
            tracing::debug!("No wall near ({:.2}, {:.2}) for {}", p.x_ft, p.y_ft, kind);
            return;
        };
        let position = wall.nearest_point(p);
        let width = self.config.editing.default_opening_width_ft;

        let element = match kind {
            ElementKind::Door => Element::Door(Door::new(position, width, DoorSwing::InRight)),
            _ => Element::Window(Window::new(position, width)),
        };
        if let Some(id) = self.add_element(element) {
            self.select(Some(ElementRef::new(kind, id)));
            let label = if kind == ElementKind::Door {
                "Door added"
            } else {
                "Window added"
            };
            self.notify(EditorEvent::success(label));
        }
    }

    fn place_fixture(&mut self, p: Point) {
        let fixture_type = self.tools.fixture_type();
        let fixture = Fixture::new(p, fixture_type, 0.0);
        if let Some(id) = self.add_element(Element::Fixture(fixture)) {
            self.select(Some(ElementRef::new(ElementKind::Fixture, id)));
            self.notify(EditorEvent::success(format!(
                "{} added",
                fixture_type.as_str().replace('_', " ")
            )));
        }
    }

    fn key_down(&mut self, key: Key, modifiers: Modifiers) {
        match key {
            Key::Char(c) if modifiers.command() => match c.to_ascii_lowercase() {
                'z' if modifiers.shift => self.keyboard_redo(),
                'z' => self.keyboard_undo(),
                'y' => self.keyboard_redo(),
                _ => {}
            },
            Key::Char(c) if c.eq_ignore_ascii_case(&'f') && modifiers.shift => {
                self.fit_to_plot();
            }
            Key::Char('+') | Key::Char('=') => self.zoom_in(),
            Key::Char('-') | Key::Char('_') => self.zoom_out(),
            Key::Char(c) => match ToolKind::from_shortcut(c) {
                Some(tool) => self.set_tool(tool),
                None => tracing::trace!("Unbound key {:?}", c),
            },
            Key::Delete | Key::Backspace => {
                self.request_delete_selected();
            }
            Key::Escape => match self.tools.active() {
                ToolKind::Room | ToolKind::Wall => self.tools.clear_transient(),
                _ => {
                    self.cancel_drag();
                    self.select(None);
                }
            },
            Key::Enter => {
                if self.tools.active() == ToolKind::Room {
                    self.finish_room();
                }
            }
        }
    }

    /// Abandon a drag or rubber band. A drag that already moved something
    /// is rolled back to the last committed state.
    fn cancel_drag(&mut self) {
        self.tools.set_selection_box(None);
        let Some(drag) = self.tools.drag().copied() else {
            return;
        };
        self.tools.set_drag(None);
        if drag.moved() {
            if let Some(snapshot) = self.history.current().cloned() {
                self.scene.restore(&snapshot);
            }
            tracing::debug!("Drag cancelled");
        }
    }

    fn keyboard_undo(&mut self) {
        if self.undo() {
            self.notify(EditorEvent::info("Undo"));
        }
    }

    fn keyboard_redo(&mut self) {
        if self.redo() {
            self.notify(EditorEvent::info("Redo"));
        }
    }

    fn wheel(&mut self, dx: f64, dy: f64, x: f64, y: f64, modifiers: Modifiers) {
        if modifiers.command() {
            let factor = if dy > 0.0 { WHEEL_ZOOM_OUT } else { WHEEL_ZOOM_IN };
            self.zoom_at(x, y, factor);
        } else if modifiers.shift {
            let step = if dy > 0.0 { -1.0 } else { 1.0 };
            self.set_scale(self.viewport.scale() + step);
            self.notify(EditorEvent::info(format!(
                "Scale: {} px/ft",
                self.viewport.scale()
            )));
        } else {
            self.pan(-dx * WHEEL_PAN_FACTOR, -dy * WHEEL_PAN_FACTOR);
        }
    }
}
