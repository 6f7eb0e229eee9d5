//! Default values of the editing model.
//!
//! All lengths are in feet unless the name says otherwise.

/// Default drawing scale in pixels per foot.
pub const DEFAULT_SCALE_PX_PER_FT: f64 = 10.0;
/// Smallest scale reachable with Shift+wheel.
pub const MIN_SCALE_PX_PER_FT: f64 = 5.0;
/// Largest scale reachable with Shift+wheel.
pub const MAX_SCALE_PX_PER_FT: f64 = 30.0;

/// Default screen offset of the world origin in pixels.
pub const DEFAULT_OFFSET_PX: f64 = 60.0;

/// Zoom multiplier bounds.
pub const MIN_ZOOM: f64 = 0.3;
pub const MAX_ZOOM: f64 = 5.0;
/// Multiplier applied by keyboard zoom in/out.
pub const ZOOM_STEP: f64 = 1.2;
/// Multipliers applied by Ctrl+wheel.
pub const WHEEL_ZOOM_OUT: f64 = 0.9;
pub const WHEEL_ZOOM_IN: f64 = 1.1;
/// Fraction of the wheel delta turned into a pan.
pub const WHEEL_PAN_FACTOR: f64 = 0.5;

/// Padding around the plot when fitting it to the canvas, in pixels.
pub const FIT_PADDING_PX: f64 = 80.0;
/// Fit never zooms beyond this.
pub const FIT_MAX_ZOOM: f64 = 2.0;

/// Number of snapshots kept by the history.
pub const HISTORY_CAPACITY: usize = 50;
/// Events an editor session keeps in its bus log.
pub const SESSION_EVENT_LOG: usize = 500;

/// Hit-test tolerances.
pub const WALL_HIT_TOLERANCE: f64 = 0.5;
pub const OPENING_HIT_TOLERANCE: f64 = 0.5;
pub const FIXTURE_HIT_TOLERANCE: f64 = 1.0;
pub const VERTEX_HANDLE_TOLERANCE: f64 = 0.5;

/// Doors and windows snap to walls closer than this.
pub const WALL_SNAP_TOLERANCE: f64 = 0.5;

/// Walls shorter than this are not committed.
pub const MIN_WALL_LENGTH: f64 = 0.5;
/// Endpoints closer than this to a plot edge make an outer wall.
pub const PLOT_BOUNDARY_TOLERANCE: f64 = 1.0;
pub const OUTER_WALL_THICKNESS: f64 = 0.75;
pub const INNER_WALL_THICKNESS: f64 = 0.5;
pub const MIN_WALL_THICKNESS: f64 = 0.25;
pub const MAX_WALL_THICKNESS: f64 = 2.0;

pub const DEFAULT_OPENING_WIDTH: f64 = 3.0;
pub const MIN_DOOR_WIDTH: f64 = 2.0;
pub const MAX_DOOR_WIDTH: f64 = 6.0;
pub const MIN_WINDOW_WIDTH: f64 = 1.5;
pub const MAX_WINDOW_WIDTH: f64 = 6.0;

/// Rectangle rooms cannot be resized below this in either axis.
pub const MIN_ROOM_SIZE: f64 = 1.0;
/// A rubber-band box smaller than this on both axes counts as a click.
pub const SELECTION_BOX_MIN_SPAN: f64 = 1.0;

/// Size of the fixture glyph in feet.
pub const FIXTURE_ICON_SIZE: f64 = 1.5;
/// Grid line spacing and axis label spacing in feet.
pub const GRID_SPACING_FT: f64 = 1.0;
pub const AXIS_LABEL_SPACING_FT: f64 = 5.0;

/// Default plot summary.
pub const DEFAULT_PLOT_LENGTH_FT: f64 = 50.0;
pub const DEFAULT_PLOT_WIDTH_FT: f64 = 30.0;
pub const DEFAULT_SETBACK_FRONT_FT: f64 = 5.0;
pub const DEFAULT_SETBACK_REAR_FT: f64 = 3.0;
pub const DEFAULT_SETBACK_SIDE_FT: f64 = 3.0;
/// Largest plot side accepted from a document.
pub const MAX_PLOT_DIMENSION_FT: f64 = 10_000.0;

/// Default map information.
pub const DEFAULT_MAP_TITLE: &str = "Floor Plan";
pub const DEFAULT_MAP_AUTHOR: &str = "Architect";
pub const DEFAULT_MAP_SCALE: &str = "1:100";
pub const DEFAULT_NORTH_DIRECTION: &str = "Top of map";
