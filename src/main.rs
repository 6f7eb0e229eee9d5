//! Headless driver: load a plan, report it, render a PNG preview and
//! write the normalized plan back out.
//!
//! Usage: `floorplan [PLAN.json] [PREVIEW.png] [OUT.json]`

use std::path::PathBuf;

use anyhow::Context;

use floorplan::designer::PixmapSurface;
use floorplan::{
    drain_events, format_area, init_logging, EditorConfig, EditorEvent, EditorSession,
    EventListener, NotificationLevel, BUILD_DATE, VERSION,
};

/// Forward the session's notifications to the log.
fn report(events: &mut EventListener) {
    for event in drain_events(events) {
        match event {
            EditorEvent::Notification { level, message } => match level {
                NotificationLevel::Error => tracing::error!("{}", message),
                NotificationLevel::Warning => tracing::warn!("{}", message),
                _ => tracing::info!("{}", message),
            },
            other => tracing::debug!("{}", other.description()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("floorplan {} (built {})", VERSION, BUILD_DATE);

    let config = match EditorConfig::default_path() {
        Ok(path) => EditorConfig::load_or_default(&path),
        Err(e) => {
            tracing::warn!("No config directory: {}", e);
            EditorConfig::default()
        }
    };

    let mut args = std::env::args().skip(1);
    let plan = args.next().map(PathBuf::from);
    let preview = args.next().map(PathBuf::from);
    let output = args.next().map(PathBuf::from);

    let mut session = EditorSession::new(config);
    let mut events = session.event_bus().listen();
    if let Some(path) = &plan {
        let loaded = session.load(path);
        report(&mut events);
        loaded?;
    }
    session.fit_to_plot();

    let stats = session.stats();
    tracing::info!(
        "{} elements, built-up {} of {} ({:.1}% coverage)",
        stats.counts.total(),
        format_area(stats.built_up_area),
        format_area(stats.plot_area),
        stats.coverage_percent
    );

    if let Some(path) = preview {
        let viewport = session.viewport();
        let (width, height) = (viewport.canvas_width(), viewport.canvas_height());
        let mut surface = PixmapSurface::new(width.round() as u32, height.round() as u32)
            .context("Failed to allocate preview")?;
        session.render(&mut surface);
        surface.save_png(&path)?;
        tracing::info!("Preview written to {}", path.display());
    }

    if let Some(path) = output {
        let saved = session.save(&path);
        report(&mut events);
        saved?;
    }

    Ok(())
}
