use floorplan_designer::model::{Element, Room, RoomType};
use floorplan_designer::renderer::{
    render_scene, DrawCommand, PixmapSurface, RecordingSurface, RenderContext,
};
use floorplan_designer::scene::Scene;
use floorplan_designer::viewport::Viewport;
use floorplan_designer::{EditorSession, InputEvent, Modifiers, Point, ToolKind};
use tempfile::TempDir;

// Default view: 60 px offset, 10 px/ft.
fn px(ft: f64) -> f64 {
    60.0 + ft * 10.0
}

fn scene_with_room() -> Scene {
    let mut scene = Scene::default();
    scene
        .add_element(Element::Room(Room::new(
            "Study",
            RoomType::Bedroom,
            vec![
                Point::new(10.0, 10.0),
                Point::new(20.0, 10.0),
                Point::new(20.0, 20.0),
                Point::new(10.0, 20.0),
            ],
        )))
        .expect("room");
    scene
}

#[test]
fn test_recording_frame_starts_with_clear() {
    let scene = scene_with_room();
    let viewport = Viewport::new(1200.0, 800.0);
    let mut surface = RecordingSurface::new(1200.0, 800.0);
    render_scene(&mut surface, &RenderContext::new(&scene, &viewport));

    assert!(matches!(surface.commands()[0], DrawCommand::Clear(_)));
    assert!(surface.has_text("Study"));
    assert!(surface.has_text("100 sqft"));
}

#[test]
fn test_room_preview_shows_hint() {
    let mut session = EditorSession::default();
    session.set_tool(ToolKind::Room);
    session.dispatch(InputEvent::down(px(0.0), px(0.0)));
    session.dispatch(InputEvent::down(px(10.0), px(0.0)));
    session.dispatch(InputEvent::moved(px(10.0), px(8.0)));

    let mut surface = RecordingSurface::new(1200.0, 800.0);
    session.render(&mut surface);
    assert!(surface.has_text("Double-click or press Enter to finish"));

    let preview = surface.commands().iter().any(|c| {
        matches!(c, DrawCommand::StrokePath { points, closed: false, style }
            if points.len() == 3 && !style.dash.is_empty())
    });
    assert!(preview);
}

#[test]
fn test_wall_preview_shows_length() {
    let mut session = EditorSession::default();
    session.set_tool(ToolKind::Wall);
    session.dispatch(InputEvent::down(px(0.0), px(0.0)));
    session.dispatch(InputEvent::moved(px(6.0), px(0.0)));

    let mut surface = RecordingSurface::new(1200.0, 800.0);
    session.render(&mut surface);
    assert!(surface.has_text("6.0 ft"));
}

#[test]
fn test_selection_box_drawn_while_dragging() {
    let mut session = EditorSession::default();
    session.dispatch(InputEvent::down(px(30.0), px(20.0)));
    session.dispatch(InputEvent::PointerMove {
        x: px(35.0),
        y: px(25.0),
        modifiers: Modifiers::NONE,
    });

    let mut surface = RecordingSurface::new(1200.0, 800.0);
    session.render(&mut surface);
    let outline = surface.commands().iter().any(|c| {
        matches!(c, DrawCommand::StrokeRect { w, h, .. } if (*w - 50.0).abs() < 1e-9 && (*h - 50.0).abs() < 1e-9)
    });
    assert!(outline);
}

#[test]
fn test_pixmap_render_fills_room() {
    let scene = scene_with_room();
    let viewport = Viewport::new(400.0, 400.0);
    let mut surface = PixmapSurface::new(400, 400).expect("pixmap");
    render_scene(&mut surface, &RenderContext::new(&scene, &viewport));

    // inside the room, between grid lines
    let inside = surface.pixel(215, 215).expect("pixel");
    assert_ne!(inside, [255, 255, 255, 255]);
    // outside the plot
    let outside = surface.pixel(5, 395).expect("pixel");
    assert_eq!(outside, [255, 255, 255, 255]);
}

#[test]
fn test_png_output() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("frame.png");

    let session = EditorSession::default();
    let mut surface = PixmapSurface::new(320, 240).expect("pixmap");
    session.render(&mut surface);

    let bytes = surface.encode_png().expect("encode");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    surface.save_png(&path).expect("save");
    assert!(path.exists());
}
