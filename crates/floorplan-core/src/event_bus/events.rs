//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so hosts can log or replay them.

use serde::{Deserialize, Serialize};

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
    /// Neutral information.
    Info,
    /// Something the user should double-check.
    Warning,
}

impl std::fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationLevel::Success => write!(f, "success"),
            NotificationLevel::Error => write!(f, "error"),
            NotificationLevel::Info => write!(f, "info"),
            NotificationLevel::Warning => write!(f, "warning"),
        }
    }
}

/// Element currently selected, as seen from outside the designer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionInfo {
    /// Element kind name (`room`, `wall`, ...).
    pub kind: String,
    /// Element id.
    pub id: u64,
}

/// Per-kind element counts carried by document events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCounts {
    pub rooms: usize,
    pub walls: usize,
    pub doors: usize,
    pub windows: usize,
    pub stairs: usize,
    pub fixtures: usize,
}

impl ElementCounts {
    /// Total number of elements
    pub fn total(&self) -> usize {
        self.rooms + self.walls + self.doors + self.windows + self.stairs + self.fixtures
    }
}

/// Root event enum for all editor events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EditorEvent {
    /// Fire-and-forget message for the user.
    Notification {
        /// Severity.
        level: NotificationLevel,
        /// Message text.
        message: String,
    },
    /// The selection changed (None = cleared).
    SelectionChanged {
        /// New selection.
        selection: Option<SelectionInfo>,
    },
    /// The active tool changed.
    ToolChanged {
        /// Tool name.
        tool: String,
    },
    /// Undo/redo availability after a history change.
    HistoryChanged {
        /// Whether undo is possible.
        can_undo: bool,
        /// Whether redo is possible.
        can_redo: bool,
    },
    /// Zoom or scale changed.
    ViewChanged {
        /// Zoom multiplier.
        zoom: f64,
        /// Pixels per foot.
        scale: f64,
    },
    /// A destructive action is waiting for the host to confirm or decline.
    ConfirmationRequested {
        /// Question shown to the user.
        message: String,
    },
    /// A plan document replaced the scene.
    DocumentImported {
        /// Element counts of the new scene.
        counts: ElementCounts,
    },
    /// The scene was exported.
    DocumentExported {
        /// Element counts of the exported scene.
        counts: ElementCounts,
    },
}

impl EditorEvent {
    /// Shorthand for a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::notification(NotificationLevel::Success, message)
    }

    /// Shorthand for an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::notification(NotificationLevel::Error, message)
    }

    /// Shorthand for an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::notification(NotificationLevel::Info, message)
    }

    /// Shorthand for a warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self::notification(NotificationLevel::Warning, message)
    }

    fn notification(level: NotificationLevel, message: impl Into<String>) -> Self {
        EditorEvent::Notification {
            level,
            message: message.into(),
        }
    }

    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            EditorEvent::Notification { .. } => EventCategory::Notification,
            EditorEvent::SelectionChanged { .. } => EventCategory::Selection,
            EditorEvent::ToolChanged { .. } => EventCategory::Tool,
            EditorEvent::HistoryChanged { .. } => EventCategory::History,
            EditorEvent::ViewChanged { .. } => EventCategory::View,
            EditorEvent::ConfirmationRequested { .. } => EventCategory::Confirmation,
            EditorEvent::DocumentImported { .. } | EditorEvent::DocumentExported { .. } => {
                EventCategory::Document
            }
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            EditorEvent::Notification { level, message } => format!("[{}] {}", level, message),
            EditorEvent::SelectionChanged { selection: Some(s) } => {
                format!("Selected {} #{}", s.kind, s.id)
            }
            EditorEvent::SelectionChanged { selection: None } => "Selection cleared".to_string(),
            EditorEvent::ToolChanged { tool } => format!("Tool: {}", tool),
            EditorEvent::HistoryChanged { can_undo, can_redo } => {
                format!("History: undo={} redo={}", can_undo, can_redo)
            }
            EditorEvent::ViewChanged { zoom, scale } => {
                format!("View: zoom {:.2}, {:.1} px/ft", zoom, scale)
            }
            EditorEvent::ConfirmationRequested { message } => format!("Confirm: {}", message),
            EditorEvent::DocumentImported { counts } => {
                format!("Imported {} elements", counts.total())
            }
            EditorEvent::DocumentExported { counts } => {
                format!("Exported {} elements", counts.total())
            }
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// User-facing notifications.
    Notification,
    /// Selection changes.
    Selection,
    /// Tool switches.
    Tool,
    /// Undo/redo state.
    History,
    /// Camera changes.
    View,
    /// Confirmation requests.
    Confirmation,
    /// Import/export.
    Document,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Notification => write!(f, "Notification"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Tool => write!(f, "Tool"),
            EventCategory::History => write!(f, "History"),
            EventCategory::View => write!(f, "View"),
            EventCategory::Confirmation => write!(f, "Confirmation"),
            EventCategory::Document => write!(f, "Document"),
        }
    }
}
