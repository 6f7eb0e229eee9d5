use floorplan_designer::history::HistoryManager;
use floorplan_designer::model::{Element, Room, RoomType};
use floorplan_designer::scene::Scene;
use floorplan_designer::Point;

fn square(size: f64) -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(size, 0.0),
        Point::new(size, size),
        Point::new(0.0, size),
    ]
}

fn add_room(scene: &mut Scene, name: &str) {
    scene
        .add_element(Element::Room(Room::new(name, RoomType::Other, square(4.0))))
        .expect("valid room");
}

#[test]
fn test_empty_history() {
    let mut history = HistoryManager::new(50);
    assert!(history.is_empty());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(history.undo().is_none());
    assert!(history.redo().is_none());
}

#[test]
fn test_undo_redo_walks_snapshots() {
    let mut scene = Scene::default();
    let mut history = HistoryManager::new(50);
    history.record("Initial", scene.snapshot());
    add_room(&mut scene, "A");
    history.record("Add room", scene.snapshot());
    add_room(&mut scene, "B");
    history.record("Add room", scene.snapshot());

    assert_eq!(history.undo_label(), Some("Add room"));
    let snapshot = history.undo().cloned().expect("undo");
    scene.restore(&snapshot);
    assert_eq!(scene.rooms().len(), 1);

    let snapshot = history.undo().cloned().expect("undo");
    scene.restore(&snapshot);
    assert!(scene.is_empty());
    assert!(!history.can_undo());

    let snapshot = history.redo().cloned().expect("redo");
    scene.restore(&snapshot);
    assert_eq!(scene.rooms()[0].name, "A");
}

#[test]
fn test_record_after_undo_drops_redo_branch() {
    let scene = Scene::default();
    let mut history = HistoryManager::new(50);
    history.record("Initial", scene.snapshot());
    history.record("One", scene.snapshot());
    history.record("Two", scene.snapshot());

    history.undo();
    assert!(history.can_redo());
    history.record("Three", scene.snapshot());
    assert!(!history.can_redo());
    assert_eq!(history.len(), 3);
    assert_eq!(history.undo_label(), Some("Three"));
}

#[test]
fn test_capacity_evicts_oldest() {
    let scene = Scene::default();
    let mut history = HistoryManager::new(3);
    for i in 0..10 {
        history.record(format!("Step {}", i), scene.snapshot());
    }
    assert_eq!(history.len(), 3);
    assert_eq!(history.index(), 2);

    assert!(history.undo().is_some());
    assert!(history.undo().is_some());
    assert!(history.undo().is_none());
}
