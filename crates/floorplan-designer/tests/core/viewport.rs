use floorplan_designer::viewport::Viewport;
use proptest::prelude::*;

#[test]
fn test_viewport_creation() {
    let vp = Viewport::new(1200.0, 800.0);
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.scale(), 10.0);
    assert_eq!(vp.offset_x(), 60.0);
    assert_eq!(vp.offset_y(), 60.0);
}

#[test]
fn test_screen_to_world_origin() {
    let vp = Viewport::new(1200.0, 800.0);
    let p = vp.screen_to_world(60.0, 60.0);
    assert_eq!((p.x_ft, p.y_ft), (0.0, 0.0));
    let p = vp.screen_to_world(160.0, 110.0);
    assert_eq!((p.x_ft, p.y_ft), (10.0, 5.0));
}

#[test]
fn test_zoom_limits() {
    let mut vp = Viewport::new(1200.0, 800.0);
    for _ in 0..40 {
        vp.zoom_in();
    }
    assert_eq!(vp.zoom(), 5.0);
    for _ in 0..40 {
        vp.zoom_out();
    }
    assert_eq!(vp.zoom(), 0.3);
}

#[test]
fn test_zoom_at_keeps_point_fixed() {
    let mut vp = Viewport::new(1200.0, 800.0);
    let before = vp.screen_to_world(400.0, 300.0);
    assert!(vp.zoom_at(400.0, 300.0, 1.1));
    let after = vp.screen_to_world(400.0, 300.0);
    assert!((before.x_ft - after.x_ft).abs() < 1e-9);
    assert!((before.y_ft - after.y_ft).abs() < 1e-9);
}

#[test]
fn test_scale_is_clamped() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_scale(100.0);
    assert_eq!(vp.scale(), 30.0);
    vp.set_scale(1.0);
    assert_eq!(vp.scale(), 5.0);
}

#[test]
fn test_fit_plot() {
    let mut vp = Viewport::new(1200.0, 800.0);
    assert!(vp.fit_to_bounds(50.0, 30.0, 1200.0, 800.0, 80.0, 2.0));
    // min(1040 / 500, 640 / 300) = 2.08, capped at 2
    assert_eq!(vp.zoom(), 2.0);
    assert_eq!(vp.offset_x(), 80.0);
    assert_eq!(vp.offset_y(), 80.0);
}

#[test]
fn test_fit_ignores_empty_content() {
    let mut vp = Viewport::new(1200.0, 800.0);
    assert!(!vp.fit_to_bounds(0.0, 30.0, 1200.0, 800.0, 80.0, 2.0));
    assert!(!vp.fit_to_bounds(50.0, 30.0, 100.0, 100.0, 80.0, 2.0));
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.offset_x(), 60.0);
}

proptest! {
    #[test]
    fn screen_world_roundtrip(
        x in -500.0..500.0f64,
        y in -500.0..500.0f64,
        ox in -2000.0..2000.0f64,
        oy in -2000.0..2000.0f64,
        zoom in 0.3..5.0f64,
        scale in 5.0..30.0f64,
    ) {
        let mut vp = Viewport::new(1200.0, 800.0);
        vp.set_offset(ox, oy);
        vp.set_zoom(zoom);
        vp.set_scale(scale);

        let (sx, sy) = vp.world_to_screen(x, y);
        let p = vp.screen_to_world(sx, sy);
        prop_assert!((p.x_ft - x).abs() < 1e-9);
        prop_assert!((p.y_ft - y).abs() < 1e-9);
    }
}
