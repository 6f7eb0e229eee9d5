//! # Floorplan
//!
//! Geometry and interaction engine for a 2D architectural floor-plan editor.
//!
//! ## Architecture
//!
//! The editor is organized as a workspace with multiple crates:
//!
//! 1. **floorplan-core** - Error types, event bus, units and default constants
//! 2. **floorplan-settings** - Editor configuration (JSON/TOML)
//! 3. **floorplan-designer** - Scene model, geometry, tools, history, rendering, plan files
//! 4. **floorplan** - Library facade and a headless preview binary
//!
//! ## Features
//!
//! - **Elements**: rooms, walls, doors, windows, fixtures and stairs in world feet
//! - **Tools**: select/move/resize, polygon rooms, chained walls, wall-snapped openings
//! - **History**: snapshot undo/redo of every committed action
//! - **Rendering**: backend-agnostic drawing surface with a tiny-skia raster backend
//! - **Files**: JSON plan documents with validation on import

pub use floorplan_core::{
    drain as drain_events, format_area, format_feet, EditorEvent, Error, EventBus, EventListener,
    ImportError, NotificationLevel, Result, SceneError,
};
pub use floorplan_designer as designer;
pub use floorplan_designer::{
    EditorSession, Element, ElementKind, ElementRef, FloorPlanDocument, InputEvent, Key,
    Modifiers, PixmapSurface, Point, RecordingSurface, Scene, ToolKind, Viewport,
};
pub use floorplan_settings::EditorConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
