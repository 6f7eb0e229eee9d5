//! Plan import/export for the session.

use std::path::Path;

use anyhow::Context;

use floorplan_core::error::ImportError;
use floorplan_core::event_bus::{EditorEvent, ElementCounts};

use super::EditorSession;
use crate::serialization::{self, FloorPlanDocument};

impl EditorSession {
    /// Replace the plan with a parsed document.
    ///
    /// On error the scene is untouched and an error notification is
    /// published. On success the selection is cleared, the view is fitted
    /// to the plot and the import is one undoable step.
    pub fn import_document(&mut self, document: &FloorPlanDocument) -> Result<ElementCounts, ImportError> {
        let counts = match serialization::import_into(&mut self.scene, document) {
            Ok(counts) => counts,
            Err(e) => {
                tracing::warn!("Import failed: {}", e);
                self.notify(EditorEvent::error(format!("Error loading file: {}", e)));
                return Err(e);
            }
        };

        self.tools.clear_transient();
        self.pending = None;
        self.select(None);
        self.fit_to_plot();
        self.commit("Import plan");

        self.publish(EditorEvent::DocumentImported { counts });
        self.notify(EditorEvent::success("Floor plan loaded successfully!"));
        Ok(counts)
    }

    pub fn import_json(&mut self, json: &str) -> Result<ElementCounts, ImportError> {
        match serialization::parse_document(json) {
            Ok(document) => self.import_document(&document),
            Err(e) => {
                tracing::warn!("Import failed: {}", e);
                self.notify(EditorEvent::error(format!("Error loading file: {}", e)));
                Err(e)
            }
        }
    }

    pub fn export_document(&self) -> FloorPlanDocument {
        let document = serialization::export(&self.scene);
        self.publish(EditorEvent::DocumentExported {
            counts: self.scene.counts(),
        });
        document
    }

    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.export_document())
    }

    /// Write the plan to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        serialization::save_to_file(&self.scene, path)?;
        self.publish(EditorEvent::DocumentExported {
            counts: self.scene.counts(),
        });
        Ok(())
    }

    /// Load a plan from a JSON file, replacing the current one.
    pub fn load(&mut self, path: impl AsRef<Path>) -> anyhow::Result<ElementCounts> {
        let path = path.as_ref();
        let document = serialization::load_from_file(path)?;
        let counts = self
            .import_document(&document)
            .with_context(|| format!("Failed to import {}", path.display()))?;
        Ok(counts)
    }
}
