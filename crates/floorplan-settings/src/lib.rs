//! Floorplan Settings Crate
//!
//! Handles editor configuration: camera defaults, editing tolerances,
//! plot/map defaults and display preferences, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{
    DisplaySettings, EditingSettings, EditorConfig, MapDefaults, PlotDefaults, ViewSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
