//! # Event Bus Module
//!
//! Decoupled communication between the editor core and its host.
//!
//! ## Overview
//!
//! The editor never calls into UI chrome directly. Instead it publishes
//! [`EditorEvent`]s that a host subscribes to:
//! - Notifications (toasts) with a severity level
//! - Selection changes (the properties panel re-reads the selection)
//! - Tool, history and view changes
//! - Confirmation requests for destructive actions
//!
//! Each editor session owns its bus, so several sessions can coexist.
//! Hosts without callbacks can poll a [`EventBus::listen`] receiver and
//! empty it with [`drain`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use floorplan_core::event_bus::{EditorEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Notification]),
//!     |event| println!("{}", event.description()),
//! );
//!
//! bus.publish(EditorEvent::info("Room added"));
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
