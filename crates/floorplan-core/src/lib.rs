//! # Floorplan Core
//!
//! Core types and utilities shared by the floor-plan editor crates.
//! Provides the error taxonomy, the editor event bus, unit formatting
//! helpers and the default constants of the editing model.

pub mod constants;
pub mod error;
pub mod event_bus;
pub mod units;

pub use error::{Error, ImportError, Result, SceneError};

// Re-export event bus for convenience
pub use event_bus::{
    drain, EditorEvent, EventBus, EventBusConfig, EventCategory, EventFilter, EventListener,
    NotificationLevel, SubscriptionId,
};

pub use units::{format_area, format_feet, format_percentage, round_to, MeasurementSystem};
