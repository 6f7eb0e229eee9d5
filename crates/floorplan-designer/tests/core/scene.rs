use floorplan_designer::model::{
    Door, DoorSwing, Element, ElementKind, ElementRef, Fixture, FixtureType, PropertyEdit, Room,
    RoomType, Wall, Window,
};
use floorplan_designer::scene::{CornerHandle, HitTolerances, Scene};
use floorplan_designer::Point;

fn rect(x: f64, y: f64, w: f64, h: f64) -> Vec<Point> {
    vec![
        Point::new(x, y),
        Point::new(x + w, y),
        Point::new(x + w, y + h),
        Point::new(x, y + h),
    ]
}

fn room(scene: &mut Scene, name: &str, polygon: Vec<Point>) -> ElementRef {
    let id = scene
        .add_element(Element::Room(Room::new(name, RoomType::Bedroom, polygon)))
        .expect("valid room");
    ElementRef::new(ElementKind::Room, id)
}

#[test]
fn test_ids_are_unique_and_ordered() {
    let mut scene = Scene::default();
    let a = room(&mut scene, "A", rect(0.0, 0.0, 4.0, 4.0));
    let b = room(&mut scene, "B", rect(5.0, 0.0, 4.0, 4.0));
    assert_ne!(a.id, b.id);
    assert_eq!(scene.rooms()[0].name, "A");
    assert_eq!(scene.rooms()[1].name, "B");
}

#[test]
fn test_invalid_elements_are_rejected() {
    let mut scene = Scene::default();
    let two_points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
    assert!(scene
        .add_element(Element::Room(Room::new("x", RoomType::Other, two_points)))
        .is_none());
    let p = Point::new(3.0, 3.0);
    assert!(scene.add_element(Element::Wall(Wall::new(p, p, 0.5))).is_none());
    assert!(scene.is_empty());
}

#[test]
fn test_hit_test_priority() {
    let mut scene = Scene::default();
    room(&mut scene, "Hall", rect(0.0, 0.0, 20.0, 20.0));
    scene
        .add_element(Element::Wall(Wall::new(
            Point::new(0.0, 10.0),
            Point::new(20.0, 10.0),
            0.5,
        )))
        .expect("wall");
    let door = scene
        .add_element(Element::Door(Door::new(Point::new(5.0, 10.0), 3.0, DoorSwing::InRight)))
        .expect("door");
    let fixture = scene
        .add_element(Element::Fixture(Fixture::new(
            Point::new(5.2, 10.0),
            FixtureType::Sink,
            0.0,
        )))
        .expect("fixture");

    let tol = HitTolerances::default();
    // fixture beats the door it overlaps
    assert_eq!(
        scene.hit_test(Point::new(5.1, 10.0), &tol),
        Some(ElementRef::new(ElementKind::Fixture, fixture))
    );
    scene.remove_element(ElementRef::new(ElementKind::Fixture, fixture));
    assert_eq!(
        scene.hit_test(Point::new(5.1, 10.0), &tol),
        Some(ElementRef::new(ElementKind::Door, door))
    );
    assert_eq!(
        scene.hit_test(Point::new(15.0, 10.2), &tol).map(|r| r.kind),
        Some(ElementKind::Wall)
    );
    assert_eq!(
        scene.hit_test(Point::new(15.0, 15.0), &tol).map(|r| r.kind),
        Some(ElementKind::Room)
    );
    assert_eq!(scene.hit_test(Point::new(40.0, 40.0), &tol), None);
}

#[test]
fn test_overlapping_rooms_latest_wins() {
    let mut scene = Scene::default();
    room(&mut scene, "Under", rect(0.0, 0.0, 10.0, 10.0));
    let over = room(&mut scene, "Over", rect(5.0, 5.0, 10.0, 10.0));
    assert_eq!(
        scene.hit_test(Point::new(7.0, 7.0), &HitTolerances::default()),
        Some(over)
    );
}

#[test]
fn test_nearest_wall_strict_tolerance() {
    let mut scene = Scene::default();
    scene
        .add_element(Element::Wall(Wall::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            0.75,
        )))
        .expect("wall");
    assert!(scene.nearest_wall(Point::new(5.0, 0.4), 0.5).is_some());
    assert!(scene.nearest_wall(Point::new(5.0, 0.5), 0.5).is_none());
}

#[test]
fn test_resize_top_left() {
    let mut scene = Scene::default();
    let r = room(&mut scene, "R", rect(0.0, 0.0, 10.0, 8.0));
    assert!(scene.resize_from_handle(r.id, CornerHandle::TopLeft, 2.0, 1.0, 1.0));
    let bounds = scene.rooms()[0].bounds();
    assert_eq!((bounds.min_x, bounds.min_y), (2.0, 1.0));
    assert_eq!((bounds.max_x, bounds.max_y), (10.0, 8.0));
    assert_eq!(scene.rooms()[0].area(), 56.0);
}

#[test]
fn test_resize_below_minimum_is_rejected() {
    let mut scene = Scene::default();
    let r = room(&mut scene, "R", rect(0.0, 0.0, 10.0, 8.0));
    assert!(!scene.resize_from_handle(r.id, CornerHandle::TopLeft, 9.5, 0.0, 1.0));
    assert_eq!(scene.rooms()[0].polygon, rect(0.0, 0.0, 10.0, 8.0));
}

#[test]
fn test_resize_requires_rectangle() {
    let mut scene = Scene::default();
    let triangle = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)];
    let r = room(&mut scene, "T", triangle);
    assert!(!scene.resize_from_handle(r.id, CornerHandle::BottomRight, 20.0, 20.0, 1.0));
    assert!(scene.corner_handle_at(r.id, Point::new(0.0, 0.0), 0.5).is_none());
}

#[test]
fn test_corner_handle_lookup() {
    let mut scene = Scene::default();
    let r = room(&mut scene, "R", rect(0.0, 0.0, 10.0, 8.0));
    assert_eq!(
        scene.corner_handle_at(r.id, Point::new(9.8, 7.9), 0.5),
        Some(CornerHandle::BottomRight)
    );
    assert_eq!(scene.corner_handle_at(r.id, Point::new(5.0, 4.0), 0.5), None);
}

#[test]
fn test_move_vertex() {
    let mut scene = Scene::default();
    let r = room(&mut scene, "R", rect(0.0, 0.0, 10.0, 8.0));
    let index = scene.vertex_at(r.id, Point::new(10.1, 0.1), 0.5).expect("vertex");
    assert_eq!(index, 1);
    assert!(scene.move_vertex(r.id, index, Point::new(12.0, -1.0)));
    assert_eq!(scene.rooms()[0].polygon[1], Point::new(12.0, -1.0));
}

#[test]
fn test_property_edits_clamp() {
    let mut scene = Scene::default();
    let id = scene
        .add_element(Element::Window(Window::new(Point::new(1.0, 1.0), 3.0)))
        .expect("window");
    let r = ElementRef::new(ElementKind::Window, id);
    scene.apply_property(r, PropertyEdit::Width(20.0)).expect("width");
    assert_eq!(scene.windows()[0].width_ft, 6.0);

    assert!(scene
        .apply_property(r, PropertyEdit::Name("nope".into()))
        .is_err());
}

#[test]
fn test_fixture_rotation_normalized() {
    let mut scene = Scene::default();
    let id = scene
        .add_element(Element::Fixture(Fixture::new(
            Point::new(1.0, 1.0),
            FixtureType::Toilet,
            0.0,
        )))
        .expect("fixture");
    let r = ElementRef::new(ElementKind::Fixture, id);
    scene.apply_property(r, PropertyEdit::Rotation(-90.0)).expect("rotation");
    assert_eq!(scene.fixtures()[0].rotation_deg, 270.0);
}

#[test]
fn test_stats_coverage() {
    let mut scene = Scene::default();
    room(&mut scene, "R", rect(0.0, 0.0, 10.0, 15.0));
    let stats = scene.stats();
    assert_eq!(stats.built_up_area, 150.0);
    assert_eq!(stats.plot_area, 1500.0);
    assert_eq!(stats.coverage_percent, 10.0);
    assert_eq!(stats.counts.rooms, 1);
}

#[test]
fn test_restore_keeps_ids_unique() {
    let mut scene = Scene::default();
    let snapshot = scene.snapshot();
    let a = room(&mut scene, "A", rect(0.0, 0.0, 4.0, 4.0));
    scene.restore(&snapshot);
    assert!(scene.is_empty());
    let b = room(&mut scene, "B", rect(0.0, 0.0, 4.0, 4.0));
    assert_ne!(a.id, b.id);
}
