//! Frame painter.
//!
//! Draw order, back to front: grid, setbacks, plot boundary, walls, rooms,
//! doors, windows, fixtures, stairs, tool previews, selection box.

use std::f64::consts::FRAC_PI_2;

use floorplan_core::constants::{AXIS_LABEL_SPACING_FT, FIXTURE_ICON_SIZE, GRID_SPACING_FT};
use floorplan_core::units::{format_area_in, format_length, MeasurementSystem};
use floorplan_settings::DisplaySettings;

use super::{Color, DrawingSurface, StrokeStyle, TextStyle};
use crate::model::{Door, ElementKind, ElementRef, Fixture, Point, Room, Stair, Wall, Window};
use crate::scene::Scene;
use crate::tools::{ToolKind, ToolState};
use crate::viewport::Viewport;

const BACKGROUND: Color = Color::WHITE;
const GRID: Color = Color::rgb(0xe8, 0xe8, 0xe8);
const AXIS_LABEL: Color = Color::rgb(0x99, 0x99, 0x99);
const HIGHLIGHT: Color = Color::rgb(0xe7, 0x4c, 0x3c);
const INK: Color = Color::rgb(0x2c, 0x3e, 0x50);
const ROOM_OUTLINE: Color = Color::rgb(0x34, 0x49, 0x5e);
const MUTED: Color = Color::rgb(0x7f, 0x8c, 0x8d);
const DOOR: Color = Color::rgb(0x8e, 0x44, 0xad);
const ACCENT: Color = Color::rgb(0x34, 0x98, 0xdb);
const WALL_FILL: Color = Color::rgba(44, 62, 80, 0.8);
const WALL_FILL_SELECTED: Color = Color::rgba(231, 76, 60, 0.3);
const SELECTION_FILL: Color = Color::rgba(52, 152, 219, 0.1);

const PREVIEW_DASH: [f64; 2] = [5.0, 5.0];
const SETBACK_DASH: [f64; 2] = [8.0, 4.0];

/// Everything a frame depends on.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub scene: &'a Scene,
    pub viewport: &'a Viewport,
    pub selection: Option<ElementRef>,
    /// Tool buffers for previews; `None` renders the committed scene only.
    pub tools: Option<&'a ToolState>,
    pub show_grid: bool,
    pub show_setbacks: bool,
    /// Units for length and area labels.
    pub units: MeasurementSystem,
}

impl<'a> RenderContext<'a> {
    pub fn new(scene: &'a Scene, viewport: &'a Viewport) -> Self {
        Self {
            scene,
            viewport,
            selection: None,
            tools: None,
            show_grid: true,
            show_setbacks: true,
            units: MeasurementSystem::Imperial,
        }
    }

    pub fn with_selection(mut self, selection: Option<ElementRef>) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_tools(mut self, tools: &'a ToolState) -> Self {
        self.tools = Some(tools);
        self
    }

    pub fn with_display(mut self, display: &DisplaySettings) -> Self {
        self.show_grid = display.show_grid;
        self.show_setbacks = display.show_setbacks;
        self.units = display.measurement_system;
        self
    }

    fn is_selected(&self, kind: ElementKind, id: crate::model::ElementId) -> bool {
        self.selection == Some(ElementRef::new(kind, id))
    }

    fn screen(&self, p: Point) -> (f64, f64) {
        self.viewport.world_to_screen(p.x_ft, p.y_ft)
    }
}

/// Paint one full frame onto `surface`.
pub fn render_scene(surface: &mut dyn DrawingSurface, ctx: &RenderContext<'_>) {
    surface.clear(BACKGROUND);

    if ctx.show_grid {
        draw_grid(surface, ctx);
    }
    if ctx.show_setbacks {
        draw_setbacks(surface, ctx);
    }
    draw_plot_boundary(surface, ctx);

    for wall in ctx.scene.walls() {
        draw_wall(surface, ctx, wall);
    }
    for room in ctx.scene.rooms() {
        draw_room(surface, ctx, room);
    }
    for door in ctx.scene.doors() {
        draw_door(surface, ctx, door);
    }
    for window in ctx.scene.windows() {
        draw_window(surface, ctx, window);
    }
    for fixture in ctx.scene.fixtures() {
        draw_fixture(surface, ctx, fixture);
    }
    for stair in ctx.scene.stairs() {
        draw_stair(surface, ctx, stair);
    }

    if let Some(tools) = ctx.tools {
        draw_previews(surface, ctx, tools);
    }
}

fn draw_grid(surface: &mut dyn DrawingSurface, ctx: &RenderContext<'_>) {
    let (width, height) = surface.size();
    let spacing = ctx.viewport.length_to_screen(GRID_SPACING_FT);
    if spacing <= 0.0 || !spacing.is_finite() {
        return;
    }
    let style = StrokeStyle::solid(GRID, 1.0);

    let mut x = ctx.viewport.offset_x().rem_euclid(spacing);
    while x < width {
        surface.stroke_path(&[(x, 0.0), (x, height)], false, &style);
        x += spacing;
    }
    let mut y = ctx.viewport.offset_y().rem_euclid(spacing);
    while y < height {
        surface.stroke_path(&[(0.0, y), (width, y)], false, &style);
        y += spacing;
    }

    let label = TextStyle::new(AXIS_LABEL, 10.0);
    let plot = &ctx.scene.plot;
    let top_left = ctx.viewport.screen_to_world(0.0, 0.0);
    let bottom_right = ctx.viewport.screen_to_world(width, height);
    for i in axis_ticks(plot.plot_length_ft, top_left.x_ft, bottom_right.x_ft) {
        let (sx, _) = ctx.viewport.world_to_screen(i, 0.0);
        surface.text(&format!("{}'", i), sx + 2.0, ctx.viewport.offset_y() - 5.0, &label);
    }
    for i in axis_ticks(plot.plot_width_ft, top_left.y_ft, bottom_right.y_ft) {
        let (_, sy) = ctx.viewport.world_to_screen(0.0, i);
        surface.text(&format!("{}'", i), ctx.viewport.offset_x() - 25.0, sy + 3.0, &label);
    }
}

/// Label positions in `[0, limit]` that fall inside the visible `[from, to]`.
fn axis_ticks(limit: f64, from: f64, to: f64) -> impl Iterator<Item = f64> {
    let first = (from.max(0.0) / AXIS_LABEL_SPACING_FT).ceil() as i64;
    let last = (to.min(limit) / AXIS_LABEL_SPACING_FT).floor() as i64;
    (first..=last).map(|k| k as f64 * AXIS_LABEL_SPACING_FT)
}

fn draw_setbacks(surface: &mut dyn DrawingSurface, ctx: &RenderContext<'_>) {
    let b = ctx.scene.plot.buildable_bounds();
    let (x1, y1) = ctx.viewport.world_to_screen(b.min_x, b.min_y);
    let (x2, y2) = ctx.viewport.world_to_screen(b.max_x, b.max_y);
    surface.stroke_rect(
        x1,
        y1,
        x2 - x1,
        y2 - y1,
        &StrokeStyle::dashed(HIGHLIGHT, 2.0, &SETBACK_DASH),
    );
    surface.text(
        "Buildable Area",
        x1 + 10.0,
        y1 + 15.0,
        &TextStyle::new(HIGHLIGHT, 11.0),
    );
}

fn draw_plot_boundary(surface: &mut dyn DrawingSurface, ctx: &RenderContext<'_>) {
    let plot = &ctx.scene.plot;
    let (x1, y1) = ctx.viewport.world_to_screen(0.0, 0.0);
    let (x2, y2) = ctx
        .viewport
        .world_to_screen(plot.plot_length_ft, plot.plot_width_ft);
    surface.stroke_rect(x1, y1, x2 - x1, y2 - y1, &StrokeStyle::solid(INK, 3.0));
    surface.text(
        &format!("Plot: {} × {} ft", plot.plot_length_ft, plot.plot_width_ft),
        x1 + 10.0,
        y1 + 25.0,
        &TextStyle::new(INK, 13.0).bold(),
    );
}

fn draw_wall(surface: &mut dyn DrawingSurface, ctx: &RenderContext<'_>, wall: &Wall) {
    let selected = ctx.is_selected(ElementKind::Wall, wall.id);
    let outline: Vec<(f64, f64)> = wall.outline().iter().map(|p| ctx.screen(*p)).collect();

    let (fill, stroke) = if selected {
        (WALL_FILL_SELECTED, StrokeStyle::solid(HIGHLIGHT, 2.0))
    } else {
        (WALL_FILL, StrokeStyle::solid(INK, 1.0))
    };
    surface.fill_polygon(&outline, fill);
    surface.stroke_path(&outline, true, &stroke);

    if selected {
        let (sx, sy) = ctx.screen(wall.start);
        let (ex, ey) = ctx.screen(wall.end);
        surface.fill_circle(sx, sy, 6.0, HIGHLIGHT);
        surface.fill_circle(ex, ey, 6.0, HIGHLIGHT);

        let (mx, my) = ctx.screen(wall.midpoint());
        surface.text(
            &format_length(wall.length(), ctx.units),
            mx,
            my,
            &TextStyle::new(HIGHLIGHT, 11.0).bold().centered(),
        );
    }
}

fn draw_room(surface: &mut dyn DrawingSurface, ctx: &RenderContext<'_>, room: &Room) {
    if room.polygon.len() < 3 {
        return;
    }
    let selected = ctx.is_selected(ElementKind::Room, room.id);
    let points: Vec<(f64, f64)> = room.polygon.iter().map(|p| ctx.screen(*p)).collect();

    let fill = Color::from_hex(room.room_type.fill_color()).unwrap_or(Color::WHITE);
    surface.fill_polygon(&points, fill);
    let stroke = if selected {
        StrokeStyle::solid(HIGHLIGHT, 3.0)
    } else {
        StrokeStyle::solid(ROOM_OUTLINE, 1.5)
    };
    surface.stroke_path(&points, true, &stroke);

    let (cx, cy) = ctx.screen(room.label_anchor());
    let name_style = if selected {
        TextStyle::new(INK, 13.0).bold().centered()
    } else {
        TextStyle::new(INK, 12.0).centered()
    };
    surface.text(&room.name, cx, cy - 8.0, &name_style);
    surface.text(
        &format_area_in(room.area(), ctx.units),
        cx,
        cy + 8.0,
        &TextStyle::new(MUTED, 10.0).centered(),
    );

    if selected {
        for (x, y) in &points {
            surface.fill_circle(*x, *y, 5.0, HIGHLIGHT);
        }
    }
}

fn draw_door(surface: &mut dyn DrawingSurface, ctx: &RenderContext<'_>, door: &Door) {
    let selected = ctx.is_selected(ElementKind::Door, door.id);
    let (x, y) = ctx.screen(door.position);
    let radius = ctx.viewport.length_to_screen(door.width_ft);
    let start = door.swing.arc_start_angle();
    let end = start + FRAC_PI_2;

    let style = if selected {
        StrokeStyle::solid(HIGHLIGHT, 2.0)
    } else {
        StrokeStyle::solid(DOOR, 1.5)
    };
    surface.arc(x, y, radius, start, end, &style);
    surface.stroke_path(
        &[(x, y), (x + radius * end.cos(), y + radius * end.sin())],
        false,
        &style,
    );

    if selected {
        surface.fill_circle(x, y, 5.0, HIGHLIGHT);
    }
}

fn draw_window(surface: &mut dyn DrawingSurface, ctx: &RenderContext<'_>, window: &Window) {
    let selected = ctx.is_selected(ElementKind::Window, window.id);
    let (x, y) = ctx.screen(window.position);
    let half = ctx.viewport.length_to_screen(window.width_ft) / 2.0;

    let style = if selected {
        StrokeStyle::solid(HIGHLIGHT, 3.0)
    } else {
        StrokeStyle::solid(ACCENT, 2.0)
    };
    surface.stroke_path(&[(x - half, y - 3.0), (x + half, y - 3.0)], false, &style);
    surface.stroke_path(&[(x - half, y + 3.0), (x + half, y + 3.0)], false, &style);

    if selected {
        surface.fill_circle(x, y, 5.0, HIGHLIGHT);
    }
}

fn draw_fixture(surface: &mut dyn DrawingSurface, ctx: &RenderContext<'_>, fixture: &Fixture) {
    let (x, y) = ctx.screen(fixture.position);
    let size = ctx.viewport.length_to_screen(FIXTURE_ICON_SIZE);

    surface.save();
    surface.translate(x, y);
    surface.rotate(fixture.rotation_deg.to_radians());
    surface.text(
        fixture.fixture_type.glyph(),
        0.0,
        0.0,
        &TextStyle::new(INK, size).centered(),
    );
    surface.restore();

    if ctx.is_selected(ElementKind::Fixture, fixture.id) {
        surface.arc(
            x,
            y,
            size * 0.8,
            0.0,
            std::f64::consts::TAU,
            &StrokeStyle::solid(HIGHLIGHT, 2.0),
        );
    }
}

fn draw_stair(surface: &mut dyn DrawingSurface, ctx: &RenderContext<'_>, stair: &Stair) {
    if stair.footprint.len() < 3 {
        return;
    }
    let selected = ctx.is_selected(ElementKind::Stair, stair.id);
    let points: Vec<(f64, f64)> = stair.footprint.iter().map(|p| ctx.screen(*p)).collect();
    let style = if selected {
        StrokeStyle::solid(HIGHLIGHT, 2.0)
    } else {
        StrokeStyle::solid(MUTED, 1.5)
    };
    surface.stroke_path(&points, true, &style);

    let (cx, cy) = ctx.screen(crate::geometry::polygon_bounds(&stair.footprint).center());
    surface.text(
        &format!("{} steps {}", stair.steps, stair.direction),
        cx,
        cy,
        &TextStyle::new(MUTED, 10.0).centered(),
    );
}

fn draw_previews(surface: &mut dyn DrawingSurface, ctx: &RenderContext<'_>, tools: &ToolState) {
    let preview = StrokeStyle::dashed(ACCENT, 2.0, &PREVIEW_DASH);

    match tools.active() {
        ToolKind::Wall => {
            if let (Some(start), Some(cursor)) = (tools.pending_wall_start(), tools.cursor()) {
                let (sx, sy) = ctx.screen(start);
                let (cx, cy) = ctx.screen(cursor);
                surface.stroke_path(&[(sx, sy), (cx, cy)], false, &preview);
                surface.fill_circle(sx, sy, 6.0, HIGHLIGHT);
                surface.text(
                    &format_length(start.distance_to(&cursor), ctx.units),
                    (sx + cx) / 2.0,
                    (sy + cy) / 2.0 - 10.0,
                    &TextStyle::new(INK, 11.0).centered(),
                );
            }
        }
        ToolKind::Room => {
            let points = tools.drawing_points();
            if points.is_empty() {
                return;
            }
            let mut path: Vec<(f64, f64)> = points.iter().map(|p| ctx.screen(*p)).collect();
            if let Some(cursor) = tools.cursor() {
                path.push(ctx.screen(cursor));
            }
            surface.stroke_path(&path, false, &preview);

            for (i, p) in points.iter().enumerate() {
                let (x, y) = ctx.screen(*p);
                let color = if i == 0 { HIGHLIGHT } else { ACCENT };
                surface.fill_circle(x, y, 6.0, color);
            }
            if points.len() >= 2 {
                if let Some(last) = points.last() {
                    let (x, y) = ctx.screen(*last);
                    surface.text(
                        "Double-click or press Enter to finish",
                        x,
                        y - 20.0,
                        &TextStyle::new(INK, 11.0).centered(),
                    );
                }
            }
        }
        _ => {}
    }

    if let Some(selection_box) = tools.selection_box() {
        let b = selection_box.bounds();
        let (x1, y1) = ctx.viewport.world_to_screen(b.min_x, b.min_y);
        let (x2, y2) = ctx.viewport.world_to_screen(b.max_x, b.max_y);
        surface.fill_rect(x1, y1, x2 - x1, y2 - y1, SELECTION_FILL);
        surface.stroke_rect(
            x1,
            y1,
            x2 - x1,
            y2 - y1,
            &StrokeStyle::dashed(ACCENT, 2.0, &PREVIEW_DASH),
        );
    }
}
