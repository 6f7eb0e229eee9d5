use floorplan_core::error::ImportError;
use floorplan_designer::model::{
    Door, DoorSwing, Element, Fixture, FixtureType, Room, RoomType, Stair, Wall, Window,
};
use floorplan_designer::scene::Scene;
use floorplan_designer::serialization::{self, FloorPlanDocument};
use floorplan_designer::{EditorSession, Point};
use tempfile::TempDir;

const SAMPLE_PLAN: &str = r#"{
    "map_info": {
        "title": "Cottage",
        "author": "J. Doe",
        "date": "2024-03-01",
        "scale": "1:50",
        "north_direction": "Top of map"
    },
    "plot_summary": {
        "plot_length_ft": 40,
        "plot_width_ft": 25,
        "setback_front_ft": 5,
        "setback_rear_ft": 3,
        "setback_side_left_ft": 3,
        "setback_side_right_ft": 3
    },
    "rooms": [
        {"name": "Kitchen", "type": "kitchen", "polygon": [
            {"x_ft": 3, "y_ft": 5}, {"x_ft": 15, "y_ft": 5},
            {"x_ft": 15, "y_ft": 15}, {"x_ft": 3, "y_ft": 15}
        ]}
    ],
    "walls": [
        {"start": {"x_ft": 3, "y_ft": 5}, "end": {"x_ft": 15, "y_ft": 5}, "thickness_ft": 0.75}
    ],
    "doors": [
        {"position": {"x_ft": 9, "y_ft": 5}, "width_ft": 3, "swing": "in-left"}
    ],
    "windows": [],
    "stairs": [
        {"footprint": [
            {"x_ft": 20, "y_ft": 5}, {"x_ft": 24, "y_ft": 5},
            {"x_ft": 24, "y_ft": 15}, {"x_ft": 20, "y_ft": 15}
        ], "direction": "up", "steps": 14}
    ],
    "fixtures": [
        {"position": {"x_ft": 5, "y_ft": 7}, "type": "kitchen_sink", "rotation": 90}
    ]
}"#;

fn rect(x: f64, y: f64, w: f64, h: f64) -> Vec<Point> {
    vec![
        Point::new(x, y),
        Point::new(x + w, y),
        Point::new(x + w, y + h),
        Point::new(x, y + h),
    ]
}

fn populated_scene() -> Scene {
    let mut scene = Scene::default();
    let elements = vec![
        Element::Room(Room::new("Living", RoomType::LivingRoom, rect(3.0, 5.0, 20.0, 12.0))),
        Element::Room(Room::new("Bath", RoomType::Bathroom, rect(23.0, 5.0, 6.0, 8.0))),
        Element::Wall(Wall::new(Point::new(3.0, 5.0), Point::new(23.0, 5.0), 0.75)),
        Element::Wall(Wall::new(Point::new(23.0, 5.0), Point::new(23.0, 17.0), 0.5)),
        Element::Door(Door::new(Point::new(10.0, 5.0), 3.0, DoorSwing::OutRight)),
        Element::Window(Window::new(Point::new(16.0, 5.0), 4.0)),
        Element::Stair(Stair::new(rect(30.0, 5.0, 4.0, 10.0), "up", 12)),
        Element::Fixture(Fixture::new(Point::new(25.0, 7.0), FixtureType::Toilet, 180.0)),
    ];
    for element in elements {
        scene.add_element(element).expect("valid element");
    }
    scene
}

#[test]
fn test_sample_plan_imports() {
    let document = serialization::parse_document(SAMPLE_PLAN).expect("parse");
    let mut scene = Scene::default();
    let counts = serialization::import_into(&mut scene, &document).expect("import");

    assert_eq!(counts.rooms, 1);
    assert_eq!(counts.walls, 1);
    assert_eq!(counts.doors, 1);
    assert_eq!(counts.windows, 0);
    assert_eq!(counts.stairs, 1);
    assert_eq!(counts.fixtures, 1);

    assert_eq!(scene.map_info.title, "Cottage");
    assert_eq!(scene.plot.plot_length_ft, 40.0);
    assert_eq!(scene.rooms()[0].room_type, RoomType::Kitchen);
    assert_eq!(scene.rooms()[0].area(), 120.0);
    assert_eq!(scene.doors()[0].swing, DoorSwing::InLeft);
    assert_eq!(scene.fixtures()[0].fixture_type, FixtureType::KitchenSink);
    assert_eq!(scene.stairs()[0].steps, 14);
}

#[test]
fn test_export_import_preserves_counts() {
    let scene = populated_scene();
    let json = serialization::to_json_string(&scene).expect("export");

    let document = serialization::parse_document(&json).expect("parse");
    let mut restored = Scene::default();
    let counts = serialization::import_into(&mut restored, &document).expect("import");

    assert_eq!(counts, scene.counts());
    assert_eq!(restored.rooms()[1].name, "Bath");
    assert_eq!(restored.walls()[0].thickness_ft, 0.75);
    assert_eq!(restored.windows()[0].width_ft, 4.0);
    assert_eq!(restored.fixtures()[0].rotation_deg, 180.0);
    assert_eq!(restored.stats().built_up_area, scene.stats().built_up_area);
}

#[test]
fn test_save_and_load_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("plan.json");

    let scene = populated_scene();
    serialization::save_to_file(&scene, &path).expect("save");
    let document = serialization::load_from_file(&path).expect("load");

    assert_eq!(document.rooms.len(), 2);
    assert_eq!(document.walls.len(), 2);
    assert_eq!(document.stairs[0].direction, "up");
}

#[test]
fn test_load_missing_file_fails() {
    let dir = TempDir::new().expect("temp dir");
    let err = serialization::load_from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read plan file"));
}

#[test]
fn test_invalid_json_is_malformed() {
    let err = serialization::parse_document("{ not json").unwrap_err();
    assert!(matches!(err, ImportError::Malformed { .. }));
}

#[test]
fn test_short_polygon_rejected_whole() {
    let json = r#"{"rooms": [
        {"name": "Ok", "type": "bedroom", "polygon": [{"x_ft":0,"y_ft":0},{"x_ft":4,"y_ft":0},{"x_ft":4,"y_ft":4}]},
        {"name": "Bad", "type": "bedroom", "polygon": [{"x_ft":0,"y_ft":0},{"x_ft":4,"y_ft":0}]}
    ]}"#;
    let document = serialization::parse_document(json).expect("parse");
    let mut scene = populated_scene();
    let before = scene.counts();

    let err = serialization::import_into(&mut scene, &document).unwrap_err();
    assert!(matches!(err, ImportError::InvalidValue { index: 1, .. }));
    assert_eq!(scene.counts(), before);
}

#[test]
fn test_unnamed_rooms_get_numbered() {
    let json = r#"{"rooms": [
        {"polygon": [{"x_ft":0,"y_ft":0},{"x_ft":4,"y_ft":0},{"x_ft":4,"y_ft":4}]}
    ]}"#;
    let document: FloorPlanDocument = serialization::parse_document(json).expect("parse");
    let mut scene = Scene::default();
    serialization::import_into(&mut scene, &document).expect("import");
    assert_eq!(scene.rooms()[0].name, "Room 1");
    assert_eq!(scene.rooms()[0].room_type, RoomType::Other);
}

#[test]
fn test_session_load_replaces_plan() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("sample.json");
    std::fs::write(&path, SAMPLE_PLAN).expect("write");

    let mut session = EditorSession::default();
    let counts = session.load(&path).expect("load");
    assert_eq!(counts.total(), 5);
    assert_eq!(session.scene().plot.plot_width_ft, 25.0);
    assert!(session.selection().is_none());

    // the import is one undoable step
    assert!(session.undo());
    assert!(session.scene().is_empty());
}

#[test]
fn test_session_save_writes_document() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("out.json");

    let mut session = EditorSession::default();
    session.import_json(SAMPLE_PLAN).expect("import");
    session.save(&path).expect("save");

    let text = std::fs::read_to_string(&path).expect("read");
    let value: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(value["rooms"][0]["name"], "Kitchen");
    assert_eq!(value["map_info"]["title"], "Cottage");
}

#[test]
fn test_absurd_plot_rejected() {
    for plot in [
        r#"{"plot_length_ft": 1e9, "plot_width_ft": 30}"#,
        r#"{"plot_length_ft": 0, "plot_width_ft": 30}"#,
        r#"{"plot_length_ft": 40, "plot_width_ft": 30, "setback_front_ft": -2}"#,
    ] {
        let json = format!(r#"{{"plot_summary": {}, "rooms": []}}"#, plot);
        let document = serialization::parse_document(&json).expect("parse");
        let mut scene = populated_scene();
        let before = scene.counts();

        let err = serialization::import_into(&mut scene, &document).unwrap_err();
        assert!(matches!(err, ImportError::InvalidValue { ref element, .. } if element == "plot_summary"));
        assert_eq!(scene.counts(), before);
        assert_eq!(scene.plot.plot_length_ft, 50.0);
    }
}
