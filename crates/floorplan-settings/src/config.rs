//! Configuration and settings management for the floor-plan editor
//!
//! Provides configuration file handling, defaults and validation.
//! Supports JSON and TOML file formats stored in the platform config
//! directory.
//!
//! Configuration is organized into logical sections:
//! - View settings (scale, offsets, zoom limits, fit behaviour)
//! - Editing settings (tolerances, wall thickness rules, history size)
//! - Plot and map defaults for new plans
//! - Display preferences

pub use floorplan_core::units::MeasurementSystem;
use floorplan_core::constants::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Camera defaults and limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Initial pixels per foot
    pub scale_px_per_ft: f64,
    /// Lower bound for Shift+wheel scale changes
    pub min_scale_px_per_ft: f64,
    /// Upper bound for Shift+wheel scale changes
    pub max_scale_px_per_ft: f64,
    /// Initial screen offset of the world origin
    pub offset_x_px: f64,
    pub offset_y_px: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Keyboard zoom multiplier
    pub zoom_step: f64,
    /// Padding kept around the plot by fit-to-view
    pub fit_padding_px: f64,
    /// Fit-to-view never zooms past this
    pub fit_max_zoom: f64,
    /// Canvas size used until the host reports one
    pub canvas_width_px: f64,
    pub canvas_height_px: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            scale_px_per_ft: DEFAULT_SCALE_PX_PER_FT,
            min_scale_px_per_ft: MIN_SCALE_PX_PER_FT,
            max_scale_px_per_ft: MAX_SCALE_PX_PER_FT,
            offset_x_px: DEFAULT_OFFSET_PX,
            offset_y_px: DEFAULT_OFFSET_PX,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
            fit_padding_px: FIT_PADDING_PX,
            fit_max_zoom: FIT_MAX_ZOOM,
            canvas_width_px: 1200.0,
            canvas_height_px: 800.0,
        }
    }
}

/// Tolerances and rules used while editing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditingSettings {
    /// Number of undo snapshots kept
    pub history_capacity: usize,
    pub wall_hit_tolerance_ft: f64,
    pub opening_hit_tolerance_ft: f64,
    pub fixture_hit_tolerance_ft: f64,
    pub vertex_handle_tolerance_ft: f64,
    /// Doors and windows only place on walls closer than this
    pub wall_snap_tolerance_ft: f64,
    pub min_wall_length_ft: f64,
    /// Distance to a plot edge that makes a wall an outer wall
    pub plot_boundary_tolerance_ft: f64,
    pub outer_wall_thickness_ft: f64,
    pub inner_wall_thickness_ft: f64,
    /// Width given to newly placed doors and windows
    pub default_opening_width_ft: f64,
    pub min_room_size_ft: f64,
    pub selection_box_min_span_ft: f64,
    /// Ask the host before deleting the selection
    pub confirm_deletes: bool,
}

impl Default for EditingSettings {
    fn default() -> Self {
        Self {
            history_capacity: HISTORY_CAPACITY,
            wall_hit_tolerance_ft: WALL_HIT_TOLERANCE,
            opening_hit_tolerance_ft: OPENING_HIT_TOLERANCE,
            fixture_hit_tolerance_ft: FIXTURE_HIT_TOLERANCE,
            vertex_handle_tolerance_ft: VERTEX_HANDLE_TOLERANCE,
            wall_snap_tolerance_ft: WALL_SNAP_TOLERANCE,
            min_wall_length_ft: MIN_WALL_LENGTH,
            plot_boundary_tolerance_ft: PLOT_BOUNDARY_TOLERANCE,
            outer_wall_thickness_ft: OUTER_WALL_THICKNESS,
            inner_wall_thickness_ft: INNER_WALL_THICKNESS,
            default_opening_width_ft: DEFAULT_OPENING_WIDTH,
            min_room_size_ft: MIN_ROOM_SIZE,
            selection_box_min_span_ft: SELECTION_BOX_MIN_SPAN,
            confirm_deletes: true,
        }
    }
}

/// Plot summary given to a new plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotDefaults {
    pub plot_length_ft: f64,
    pub plot_width_ft: f64,
    pub setback_front_ft: f64,
    pub setback_rear_ft: f64,
    pub setback_side_left_ft: f64,
    pub setback_side_right_ft: f64,
}

impl Default for PlotDefaults {
    fn default() -> Self {
        Self {
            plot_length_ft: DEFAULT_PLOT_LENGTH_FT,
            plot_width_ft: DEFAULT_PLOT_WIDTH_FT,
            setback_front_ft: DEFAULT_SETBACK_FRONT_FT,
            setback_rear_ft: DEFAULT_SETBACK_REAR_FT,
            setback_side_left_ft: DEFAULT_SETBACK_SIDE_FT,
            setback_side_right_ft: DEFAULT_SETBACK_SIDE_FT,
        }
    }
}

/// Map information given to a new plan (the date is always today)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapDefaults {
    pub title: String,
    pub author: String,
    pub scale: String,
    pub north_direction: String,
}

impl Default for MapDefaults {
    fn default() -> Self {
        Self {
            title: DEFAULT_MAP_TITLE.to_string(),
            author: DEFAULT_MAP_AUTHOR.to_string(),
            scale: DEFAULT_MAP_SCALE.to_string(),
            north_direction: DEFAULT_NORTH_DIRECTION.to_string(),
        }
    }
}

/// Display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Units used by labels
    pub measurement_system: MeasurementSystem,
    pub show_grid: bool,
    pub show_setbacks: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            measurement_system: MeasurementSystem::Imperial,
            show_grid: true,
            show_setbacks: true,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub view: ViewSettings,
    pub editing: EditingSettings,
    pub plot: PlotDefaults,
    pub map: MapDefaults,
    pub display: DisplaySettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)
                .map_err(|e| SettingsError::LoadError(format!("Invalid JSON config: {}", e)))?,
            Format::Toml => toml::from_str(&content)
                .map_err(|e| SettingsError::LoadError(format!("Invalid TOML config: {}", e)))?,
        };

        config.validate()?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(e.to_string()))?,
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| SettingsError::SaveError(e.to_string()))?
            }
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Platform config directory for the editor
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("floorplan"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Default config file location
    pub fn default_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or unusable
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let view = &self.view;
        if view.scale_px_per_ft <= 0.0 {
            return Err(ConfigError::out_of_range(
                "view.scale_px_per_ft",
                view.scale_px_per_ft,
            ));
        }
        if view.min_scale_px_per_ft <= 0.0 || view.min_scale_px_per_ft > view.max_scale_px_per_ft
        {
            return Err(ConfigError::out_of_range(
                "view.min_scale_px_per_ft",
                view.min_scale_px_per_ft,
            ));
        }
        if view.min_zoom <= 0.0 || view.min_zoom > view.max_zoom {
            return Err(ConfigError::out_of_range("view.min_zoom", view.min_zoom));
        }
        if view.zoom_step <= 1.0 {
            return Err(ConfigError::out_of_range("view.zoom_step", view.zoom_step));
        }
        if view.fit_max_zoom <= 0.0 {
            return Err(ConfigError::out_of_range(
                "view.fit_max_zoom",
                view.fit_max_zoom,
            ));
        }

        let editing = &self.editing;
        if editing.history_capacity == 0 {
            return Err(ConfigError::out_of_range(
                "editing.history_capacity",
                editing.history_capacity,
            ));
        }
        let tolerances = [
            ("editing.wall_hit_tolerance_ft", editing.wall_hit_tolerance_ft),
            ("editing.opening_hit_tolerance_ft", editing.opening_hit_tolerance_ft),
            ("editing.fixture_hit_tolerance_ft", editing.fixture_hit_tolerance_ft),
            ("editing.vertex_handle_tolerance_ft", editing.vertex_handle_tolerance_ft),
            ("editing.wall_snap_tolerance_ft", editing.wall_snap_tolerance_ft),
            ("editing.min_wall_length_ft", editing.min_wall_length_ft),
            ("editing.plot_boundary_tolerance_ft", editing.plot_boundary_tolerance_ft),
            ("editing.min_room_size_ft", editing.min_room_size_ft),
            ("editing.selection_box_min_span_ft", editing.selection_box_min_span_ft),
        ];
        if let Some((key, value)) = tolerances.iter().find(|(_, v)| *v < 0.0) {
            return Err(ConfigError::out_of_range(key, value));
        }
        for (key, value) in [
            ("editing.outer_wall_thickness_ft", editing.outer_wall_thickness_ft),
            ("editing.inner_wall_thickness_ft", editing.inner_wall_thickness_ft),
        ] {
            if !(MIN_WALL_THICKNESS..=MAX_WALL_THICKNESS).contains(&value) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }
        if editing.default_opening_width_ft < MIN_WINDOW_WIDTH
            || editing.default_opening_width_ft > MAX_DOOR_WIDTH
        {
            return Err(ConfigError::out_of_range(
                "editing.default_opening_width_ft",
                editing.default_opening_width_ft,
            ));
        }

        if self.plot.plot_length_ft <= 0.0 || self.plot.plot_width_ft <= 0.0 {
            return Err(ConfigError::out_of_range(
                "plot.plot_length_ft",
                format!("{} x {}", self.plot.plot_length_ft, self.plot.plot_width_ft),
            ));
        }

        Ok(())
    }
}
