//! Editor session: the owning root of one open plan.
//!
//! This module is split into submodules:
//! - `elements`: add, delete, property edits
//! - `history`: undo/redo and snapshot commits
//! - `input`: event queue and the tool state machine dispatch
//! - `viewport`: zoom, pan, fit
//! - `file_io`: JSON import/export and file helpers
//!
//! Sessions are plain owned values; several can coexist in one process.

mod elements;
mod file_io;
mod history;
mod input;
mod viewport;

use std::collections::VecDeque;

use floorplan_core::constants::SESSION_EVENT_LOG;
use floorplan_core::event_bus::{EditorEvent, EventBus, EventBusConfig, SelectionInfo};
use floorplan_settings::EditorConfig;

use crate::history::HistoryManager;
use crate::input::InputEvent;
use crate::model::{ElementRef, FixtureType, MapInfo, PlotSummary};
use crate::renderer::{render_scene, DrawingSurface, RenderContext};
use crate::scene::{HitTolerances, Scene, SceneStats};
use crate::tools::{ToolKind, ToolState};
use crate::viewport::Viewport;

/// Destructive action waiting for the host's answer.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingConfirmation {
    pub message: String,
    action: PendingAction,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PendingAction {
    Delete(ElementRef),
}

pub struct EditorSession {
    config: EditorConfig,
    scene: Scene,
    selection: Option<ElementRef>,
    viewport: Viewport,
    tools: ToolState,
    history: HistoryManager,
    bus: EventBus,
    queue: VecDeque<InputEvent>,
    pending: Option<PendingConfirmation>,
    tolerances: HitTolerances,
}

impl EditorSession {
    /// Creates a session with an empty scene. The empty scene is recorded
    /// as the first history entry.
    pub fn new(config: EditorConfig) -> Self {
        let scene = Scene::new(
            PlotSummary::from(&config.plot),
            MapInfo::from(&config.map),
        );
        let mut history = HistoryManager::new(config.editing.history_capacity);
        history.record("Initial", scene.snapshot());

        let bus = EventBus::with_config(EventBusConfig {
            log_capacity: SESSION_EVENT_LOG,
            ..Default::default()
        });

        Self {
            viewport: Viewport::from_settings(&config.view),
            tolerances: HitTolerances::from(&config.editing),
            scene,
            selection: None,
            tools: ToolState::new(),
            history,
            bus,
            queue: VecDeque::new(),
            pending: None,
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selection(&self) -> Option<ElementRef> {
        self.selection
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn pending_confirmation(&self) -> Option<&PendingConfirmation> {
        self.pending.as_ref()
    }

    pub fn stats(&self) -> SceneStats {
        self.scene.stats()
    }

    pub fn active_tool(&self) -> ToolKind {
        self.tools.active()
    }

    /// Switch tools, dropping any in-progress gesture.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.tools.set_active(tool) {
            tracing::debug!("Tool switched to {}", tool);
            self.publish(EditorEvent::ToolChanged {
                tool: tool.name().to_string(),
            });
        }
    }

    /// Fixture palette choice used by the fixture tool.
    pub fn set_fixture_type(&mut self, fixture_type: FixtureType) {
        self.tools.set_fixture_type(fixture_type);
    }

    /// Change the selection, announcing it when it differs.
    pub fn select(&mut self, selection: Option<ElementRef>) {
        let selection = selection.filter(|r| self.scene.contains(*r));
        if self.selection == selection {
            return;
        }
        self.selection = selection;
        self.publish(EditorEvent::SelectionChanged {
            selection: selection.map(|r| SelectionInfo {
                kind: r.kind.name().to_string(),
                id: r.id.0,
            }),
        });
    }

    pub fn clear_selection(&mut self) {
        self.select(None);
    }

    /// Carry out the parked destructive action. Returns false when nothing
    /// was pending.
    pub fn confirm(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        match pending.action {
            PendingAction::Delete(target) => {
                self.delete_now(target);
            }
        }
        true
    }

    /// Drop the parked action without touching the scene.
    pub fn decline(&mut self) -> bool {
        let declined = self.pending.take().is_some();
        if declined {
            tracing::debug!("Confirmation declined");
        }
        declined
    }

    fn request_confirmation(&mut self, message: String, action: PendingAction) {
        self.publish(EditorEvent::ConfirmationRequested {
            message: message.clone(),
        });
        self.pending = Some(PendingConfirmation { message, action });
    }

    /// Paint the current frame, including tool previews.
    pub fn render(&self, surface: &mut dyn DrawingSurface) {
        let ctx = RenderContext::new(&self.scene, &self.viewport)
            .with_selection(self.selection)
            .with_tools(&self.tools)
            .with_display(&self.config.display);
        render_scene(surface, &ctx);
    }

    pub(crate) fn publish(&self, event: EditorEvent) {
        self.bus.publish(event);
    }

    pub(crate) fn notify(&self, event: EditorEvent) {
        if let EditorEvent::Notification { level, message } = &event {
            tracing::debug!("[{}] {}", level, message);
        }
        self.publish(event);
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

/// "door" -> "Door"
pub(crate) fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_initial_snapshot() {
        let session = EditorSession::default();
        assert_eq!(session.history().len(), 1);
        assert!(!session.history().can_undo());
        assert!(session.scene().is_empty());
        assert_eq!(session.active_tool(), ToolKind::Select);
    }

    #[test]
    fn test_capitalized() {
        assert_eq!(capitalized("window"), "Window");
        assert_eq!(capitalized(""), "");
    }

    #[test]
    fn test_listener_sees_session_events() {
        let mut session = EditorSession::default();
        let mut listener = session.event_bus().listen();
        session.set_tool(ToolKind::Wall);
        session.import_json("{ broken").ok();

        let events = floorplan_core::event_bus::drain(&mut listener);
        assert!(matches!(&events[0], EditorEvent::ToolChanged { tool } if tool == "wall"));
        assert!(events.iter().any(|e| matches!(
            e,
            EditorEvent::Notification { level: floorplan_core::NotificationLevel::Error, .. }
        )));
    }

    #[test]
    fn test_decline_without_pending() {
        let mut session = EditorSession::default();
        assert!(!session.decline());
        assert!(!session.confirm());
    }
}
