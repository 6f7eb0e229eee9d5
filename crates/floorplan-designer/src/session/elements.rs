//! Element creation, deletion and property edits.

use floorplan_core::error::SceneError;
use floorplan_core::event_bus::EditorEvent;

use super::{capitalized, EditorSession, PendingAction};
use crate::model::{Element, ElementId, ElementRef, MapInfo, PlotSummary, Property, PropertyEdit};

impl EditorSession {
    /// Validate and insert an element as one undoable action.
    pub fn add_element(&mut self, element: Element) -> Option<ElementId> {
        let kind = element.kind();
        let id = self.scene.add_element(element)?;
        self.commit(&format!("Add {}", kind));
        Some(id)
    }

    /// Remove an element immediately, without asking.
    pub fn remove_element(&mut self, target: ElementRef) -> Option<Element> {
        let removed = self.scene.remove_element(target)?;
        if self.selection == Some(target) {
            self.select(None);
        }
        self.commit(&format!("Delete {}", target.kind));
        Some(removed)
    }

    /// Ask to delete the current selection.
    ///
    /// With confirmations enabled this only parks the request; the host
    /// answers through [`EditorSession::confirm`] or
    /// [`EditorSession::decline`]. Returns false with nothing selected.
    pub fn request_delete_selected(&mut self) -> bool {
        let Some(target) = self.selection else {
            return false;
        };
        if self.config.editing.confirm_deletes {
            self.request_confirmation(
                format!("Delete selected {}?", target.kind),
                PendingAction::Delete(target),
            );
        } else {
            self.delete_now(target);
        }
        true
    }

    pub(super) fn delete_now(&mut self, target: ElementRef) {
        if self.remove_element(target).is_some() {
            self.notify(EditorEvent::success(format!(
                "{} deleted",
                capitalized(target.kind.name())
            )));
        }
    }

    pub fn properties(&self, target: ElementRef) -> Option<Vec<Property>> {
        self.scene.properties(target)
    }

    /// Apply a property edit from the properties panel as one action.
    pub fn update_property(&mut self, target: ElementRef, edit: PropertyEdit) -> Result<(), SceneError> {
        let name = edit.name();
        self.scene.apply_property(target, edit)?;
        self.commit(&format!("Edit {} {}", target.kind, name));
        Ok(())
    }

    /// Re-project doors and windows onto their nearest walls.
    pub fn resnap_openings(&mut self) -> usize {
        let moved = self
            .scene
            .resnap_openings(self.config.editing.wall_snap_tolerance_ft);
        if moved > 0 {
            self.commit("Re-snap openings");
        }
        moved
    }

    pub fn set_plot(&mut self, plot: PlotSummary) {
        if self.scene.plot != plot {
            self.scene.plot = plot;
            self.commit("Edit plot");
        }
    }

    pub fn set_map_info(&mut self, map_info: MapInfo) {
        if self.scene.map_info != map_info {
            self.scene.map_info = map_info;
            self.commit("Edit map info");
        }
    }
}

#[cfg(test)]
mod tests {
    use floorplan_core::error::SceneError;
    use floorplan_core::event_bus::EditorEvent;

    use crate::model::{Door, DoorSwing, Element, ElementKind, ElementRef, Point, PropertyEdit};
    use crate::session::EditorSession;

    fn session_with_door() -> (EditorSession, ElementRef) {
        let mut session = EditorSession::default();
        let id = session
            .add_element(Element::Door(Door::new(
                Point::new(2.0, 0.0),
                3.0,
                DoorSwing::InRight,
            )))
            .unwrap();
        let r = ElementRef::new(ElementKind::Door, id);
        session.select(Some(r));
        (session, r)
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (mut session, r) = session_with_door();
        assert!(session.request_delete_selected());
        assert_eq!(
            session.pending_confirmation().map(|p| p.message.as_str()),
            Some("Delete selected door?")
        );
        assert_eq!(session.scene().doors().len(), 1);

        let history_len = session.history().len();
        assert!(session.decline());
        assert_eq!(session.scene().doors().len(), 1);
        assert_eq!(session.history().len(), history_len);
        assert_eq!(session.selection(), Some(r));

        session.request_delete_selected();
        assert!(session.confirm());
        assert!(session.scene().doors().is_empty());
        assert!(session.selection().is_none());
        assert!(session.event_bus().history(None).iter().any(|e| matches!(
            e,
            EditorEvent::Notification { message, .. } if message == "Door deleted"
        )));
    }

    #[test]
    fn test_property_edit_is_one_step() {
        let (mut session, r) = session_with_door();
        let before = session.history().len();
        session.update_property(r, PropertyEdit::Width(10.0)).unwrap();
        assert_eq!(session.history().len(), before + 1);
        assert_eq!(session.scene().door(r.id).unwrap().width_ft, 6.0);

        assert!(session.update_property(r, PropertyEdit::Steps(3)).is_err());
        assert_eq!(session.history().len(), before + 1);
    }

    #[test]
    fn test_non_finite_edits_are_rejected() {
        let (mut session, r) = session_with_door();
        let before = session.history().len();

        for edit in [
            PropertyEdit::X(f64::NAN),
            PropertyEdit::Y(f64::INFINITY),
            PropertyEdit::Width(f64::NAN),
        ] {
            assert!(matches!(
                session.update_property(r, edit),
                Err(SceneError::NonFinite { .. })
            ));
        }
        assert_eq!(session.history().len(), before);
        assert_eq!(session.scene().door(r.id).unwrap().position, Point::new(2.0, 0.0));

        let json = session.export_json().unwrap();
        let mut restored = EditorSession::default();
        assert_eq!(restored.import_json(&json).unwrap().doors, 1);
    }
}
