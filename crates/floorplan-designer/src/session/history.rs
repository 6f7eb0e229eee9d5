//! Undo/redo for the session.

use floorplan_core::event_bus::EditorEvent;

use super::EditorSession;

impl EditorSession {
    /// Record the current scene as one history step.
    pub(crate) fn commit(&mut self, label: &str) {
        self.history.record(label, self.scene.snapshot());
        tracing::debug!("Committed '{}' ({} entries)", label, self.history.len());
        self.publish_history_state();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back one action. Returns false at the start of history.
    pub fn undo(&mut self) -> bool {
        let label = self.history.undo_label().map(str::to_string);
        let Some(snapshot) = self.history.undo().cloned() else {
            return false;
        };
        self.scene.restore(&snapshot);
        self.after_restore();
        tracing::info!("Undo {}", label.unwrap_or_default());
        true
    }

    /// Re-apply one undone action. Returns false at the end of history.
    pub fn redo(&mut self) -> bool {
        let label = self.history.redo_label().map(str::to_string);
        let Some(snapshot) = self.history.redo().cloned() else {
            return false;
        };
        self.scene.restore(&snapshot);
        self.after_restore();
        tracing::info!("Redo {}", label.unwrap_or_default());
        true
    }

    fn after_restore(&mut self) {
        self.tools.set_drag(None);
        self.tools.set_selection_box(None);
        self.pending = None;
        self.select(None);
        self.publish_history_state();
    }

    fn publish_history_state(&self) {
        self.publish(EditorEvent::HistoryChanged {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        });
    }
}
