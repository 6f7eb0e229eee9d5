//! # Floorplan Designer
//!
//! Geometry and interaction engine for a 2D residential floor-plan editor.
//! Rooms, walls, doors, windows, fixtures and stairs are laid out on a
//! rectangular plot in world feet and edited through a tool state machine
//! driven by host-agnostic input events.
//!
//! ## Core Components
//!
//! - **Geometry**: polygon area, containment, bounds, segment projection
//! - **Scene**: element collections, hit testing, resize and property edits
//! - **Viewport**: pan/zoom/scale and screen ↔ world conversion
//! - **Tools**: select, room, wall, door, window and fixture gestures
//! - **History**: snapshot undo/redo
//! - **Renderer**: drawing-surface trait with recording and raster backends
//! - **Serialization**: JSON plan documents
//!
//! ## Architecture
//!
//! ```text
//! EditorSession
//!   ├── Scene (elements, plot, map info)
//!   ├── Viewport (camera)
//!   ├── ToolState (transient gesture buffers)
//!   ├── HistoryManager (snapshots)
//!   └── EventBus (notifications, selection, confirmations)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use floorplan_designer::{EditorSession, InputEvent, ToolKind};
//!
//! let mut session = EditorSession::default();
//! session.set_tool(ToolKind::Wall);
//! session.queue(InputEvent::down(60.0, 60.0));
//! session.queue(InputEvent::down(160.0, 60.0));
//! session.process_events();
//! assert_eq!(session.scene().walls().len(), 1);
//! ```

pub mod geometry;
pub mod history;
pub mod input;
pub mod model;
pub mod renderer;
pub mod scene;
pub mod serialization;
pub mod session;
pub mod tools;
pub mod viewport;

pub use geometry::Bounds;
pub use history::{HistoryEntry, HistoryManager};
pub use input::{InputEvent, Key, Modifiers};
pub use model::{
    Door, DoorSwing, Element, ElementId, ElementKind, ElementRef, Fixture, FixtureType, MapInfo,
    PlotSummary, Point, Property, PropertyEdit, PropertyValue, Room, RoomType, Stair, Wall, Window,
};
pub use renderer::{
    render_scene, Color, DrawCommand, DrawingSurface, PixmapSurface, RecordingSurface,
    RenderContext, StrokeStyle, TextAlign, TextStyle,
};
pub use scene::{CornerHandle, HitTolerances, Scene, SceneSnapshot, SceneStats};
pub use serialization::FloorPlanDocument;
pub use session::{EditorSession, PendingConfirmation};
pub use tools::{DragState, SelectionBox, ToolKind, ToolState};
pub use viewport::Viewport;
