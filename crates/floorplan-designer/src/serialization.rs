//! Plan document (JSON) import and export.
//!
//! The document is the interchange format: metadata blocks plus one array
//! per element kind. Ids are never written; import assigns fresh ones.
//! Export rounds coordinates and thickness to two decimals and widths to
//! one.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use floorplan_core::error::ImportError;
use floorplan_core::event_bus::ElementCounts;
use floorplan_core::round_to;

use crate::model::{
    Door, DoorSwing, Element, Fixture, FixtureType, MapInfo, PlotSummary, Point, Room, RoomType,
    Stair, Wall, Window,
};
use crate::scene::Scene;

/// Top-level plan document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FloorPlanDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_info: Option<MapInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_summary: Option<PlotSummary>,
    #[serde(default)]
    pub rooms: Vec<RoomRecord>,
    #[serde(default)]
    pub walls: Vec<WallRecord>,
    #[serde(default)]
    pub doors: Vec<DoorRecord>,
    #[serde(default)]
    pub windows: Vec<WindowRecord>,
    #[serde(default)]
    pub stairs: Vec<StairRecord>,
    #[serde(default)]
    pub fixtures: Vec<FixtureRecord>,
}

fn other_room() -> RoomType {
    RoomType::Other
}

fn other_fixture() -> FixtureType {
    FixtureType::Other
}

fn default_opening_width() -> f64 {
    floorplan_core::constants::DEFAULT_OPENING_WIDTH
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default = "other_room")]
    pub room_type: RoomType,
    #[serde(default)]
    pub polygon: Option<Vec<Point>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallRecord {
    #[serde(default)]
    pub start: Option<Point>,
    #[serde(default)]
    pub end: Option<Point>,
    #[serde(default)]
    pub thickness_ft: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorRecord {
    #[serde(default)]
    pub position: Option<Point>,
    #[serde(default = "default_opening_width")]
    pub width_ft: f64,
    #[serde(default)]
    pub swing: DoorSwing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    #[serde(default)]
    pub position: Option<Point>,
    #[serde(default = "default_opening_width")]
    pub width_ft: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StairRecord {
    #[serde(default)]
    pub footprint: Option<Vec<Point>>,
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub steps: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureRecord {
    #[serde(default)]
    pub position: Option<Point>,
    #[serde(rename = "type", default = "other_fixture")]
    pub fixture_type: FixtureType,
    #[serde(default)]
    pub rotation: f64,
}

fn rounded(p: Point) -> Point {
    Point::new(round_to(p.x_ft, 2), round_to(p.y_ft, 2))
}

fn missing(element: &str, field: &str) -> ImportError {
    ImportError::MissingField {
        element: element.to_string(),
        field: field.to_string(),
    }
}

fn invalid(element: &str, index: usize, reason: impl Into<String>) -> ImportError {
    ImportError::InvalidValue {
        element: element.to_string(),
        index,
        reason: reason.into(),
    }
}

fn finite_point(element: &str, index: usize, p: Point) -> Result<Point, ImportError> {
    if p.x_ft.is_finite() && p.y_ft.is_finite() {
        Ok(p)
    } else {
        Err(invalid(element, index, "non-finite coordinate"))
    }
}

/// Build a document from the scene, rounding for output.
pub fn export(scene: &Scene) -> FloorPlanDocument {
    FloorPlanDocument {
        map_info: Some(scene.map_info.clone()),
        plot_summary: Some(scene.plot.clone()),
        rooms: scene
            .rooms()
            .iter()
            .map(|r| RoomRecord {
                name: Some(r.name.clone()),
                room_type: r.room_type,
                polygon: Some(r.polygon.iter().copied().map(rounded).collect()),
            })
            .collect(),
        walls: scene
            .walls()
            .iter()
            .map(|w| WallRecord {
                start: Some(rounded(w.start)),
                end: Some(rounded(w.end)),
                thickness_ft: Some(round_to(w.thickness_ft, 2)),
            })
            .collect(),
        doors: scene
            .doors()
            .iter()
            .map(|d| DoorRecord {
                position: Some(rounded(d.position)),
                width_ft: round_to(d.width_ft, 1),
                swing: d.swing,
            })
            .collect(),
        windows: scene
            .windows()
            .iter()
            .map(|w| WindowRecord {
                position: Some(rounded(w.position)),
                width_ft: round_to(w.width_ft, 1),
            })
            .collect(),
        stairs: scene
            .stairs()
            .iter()
            .map(|s| StairRecord {
                footprint: Some(s.footprint.iter().copied().map(rounded).collect()),
                direction: s.direction.clone(),
                steps: s.steps,
            })
            .collect(),
        fixtures: scene
            .fixtures()
            .iter()
            .map(|f| FixtureRecord {
                position: Some(rounded(f.position)),
                fixture_type: f.fixture_type,
                rotation: f.rotation_deg,
            })
            .collect(),
    }
}

impl FloorPlanDocument {
    /// Turn every record into an element, failing on the first bad record.
    pub fn to_elements(&self) -> Result<Vec<Element>, ImportError> {
        let mut elements = Vec::new();

        for (i, r) in self.rooms.iter().enumerate() {
            let polygon = r.polygon.clone().ok_or_else(|| missing("room", "polygon"))?;
            if polygon.len() < 3 {
                return Err(invalid("room", i, "polygon needs at least 3 points"));
            }
            for p in &polygon {
                finite_point("room", i, *p)?;
            }
            let name = r.name.clone().unwrap_or_else(|| format!("Room {}", i + 1));
            elements.push(Element::Room(Room::new(name, r.room_type, polygon)));
        }

        for (i, w) in self.walls.iter().enumerate() {
            let start = finite_point("wall", i, w.start.ok_or_else(|| missing("wall", "start"))?)?;
            let end = finite_point("wall", i, w.end.ok_or_else(|| missing("wall", "end"))?)?;
            let thickness = w
                .thickness_ft
                .unwrap_or(floorplan_core::constants::INNER_WALL_THICKNESS);
            let wall = Wall::new(start, end, thickness);
            if wall.is_degenerate() {
                return Err(invalid("wall", i, "start and end coincide"));
            }
            elements.push(Element::Wall(wall));
        }

        for (i, d) in self.doors.iter().enumerate() {
            let position =
                finite_point("door", i, d.position.ok_or_else(|| missing("door", "position"))?)?;
            if !d.width_ft.is_finite() {
                return Err(invalid("door", i, "width is not a number"));
            }
            elements.push(Element::Door(Door::new(position, d.width_ft, d.swing)));
        }

        for (i, w) in self.windows.iter().enumerate() {
            let position = finite_point(
                "window",
                i,
                w.position.ok_or_else(|| missing("window", "position"))?,
            )?;
            if !w.width_ft.is_finite() {
                return Err(invalid("window", i, "width is not a number"));
            }
            elements.push(Element::Window(Window::new(position, w.width_ft)));
        }

        for (i, s) in self.stairs.iter().enumerate() {
            let footprint = s
                .footprint
                .clone()
                .ok_or_else(|| missing("stair", "footprint"))?;
            if footprint.len() < 3 {
                return Err(invalid("stair", i, "footprint needs at least 3 points"));
            }
            elements.push(Element::Stair(Stair::new(
                footprint,
                s.direction.clone(),
                s.steps,
            )));
        }

        for (i, f) in self.fixtures.iter().enumerate() {
            let position = finite_point(
                "fixture",
                i,
                f.position.ok_or_else(|| missing("fixture", "position"))?,
            )?;
            if !f.rotation.is_finite() {
                return Err(invalid("fixture", i, "rotation is not a number"));
            }
            elements.push(Element::Fixture(Fixture::new(
                position,
                f.fixture_type,
                f.rotation,
            )));
        }

        Ok(elements)
    }
}

/// Replace the scene contents with the document.
///
/// Everything is validated before the scene is touched; on error the scene
/// is left exactly as it was. Metadata blocks missing from the document
/// keep their current values.
pub fn import_into(scene: &mut Scene, document: &FloorPlanDocument) -> Result<ElementCounts, ImportError> {
    if let Some(reason) = document.plot_summary.as_ref().and_then(PlotSummary::check) {
        return Err(ImportError::InvalidValue {
            element: "plot_summary".to_string(),
            index: 0,
            reason,
        });
    }
    let elements = document.to_elements()?;

    scene.clear();
    if let Some(map_info) = &document.map_info {
        scene.map_info = map_info.clone();
    }
    if let Some(plot) = &document.plot_summary {
        scene.plot = plot.clone();
    }
    for element in elements {
        if scene.add_element(element).is_none() {
            tracing::warn!("Dropped an element that failed validation during import");
        }
    }

    let counts = scene.counts();
    tracing::info!("Imported plan with {} elements", counts.total());
    Ok(counts)
}

pub fn parse_document(json: &str) -> Result<FloorPlanDocument, ImportError> {
    Ok(serde_json::from_str(json)?)
}

pub fn to_json_string(scene: &Scene) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&export(scene))
}

/// Save the scene as a plan document.
pub fn save_to_file(scene: &Scene, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = to_json_string(scene).context("Failed to serialize plan")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write plan file {}", path.display()))?;
    tracing::info!("Saved plan to {}", path.display());
    Ok(())
}

/// Read and parse a plan document.
pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<FloorPlanDocument> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file {}", path.display()))?;
    let document = parse_document(&json)
        .with_context(|| format!("Failed to parse plan file {}", path.display()))?;
    Ok(document)
}
