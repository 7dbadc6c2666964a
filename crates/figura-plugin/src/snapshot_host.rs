//! In-memory host backed by a selection snapshot.

use crate::host::Host;
use crate::messages::OutboundMessage;
use figura_core::scene::{NodeId, SceneGraph};
use figura_core::snapshot::SelectionSnapshot;
use figura_core::types::FontName;
use figura_core::{HostError, SnapshotError};

/// A [`Host`] over a fixed scene that records everything the session does.
#[derive(Debug, Clone, Default)]
pub struct SnapshotHost {
    scene: SceneGraph,
    selection: Vec<NodeId>,
    posted: Vec<OutboundMessage>,
    loaded_fonts: Vec<FontName>,
    font_failure: Option<String>,
    closed: bool,
}

impl SnapshotHost {
    pub fn new(scene: SceneGraph, selection: Vec<NodeId>) -> Self {
        Self {
            scene,
            selection,
            ..Self::default()
        }
    }

    pub fn from_snapshot(snapshot: SelectionSnapshot) -> Result<Self, SnapshotError> {
        let (scene, selection) = snapshot.into_scene()?;
        Ok(Self::new(scene, selection))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Self::from_snapshot(SelectionSnapshot::from_json(json)?)
    }

    pub fn set_selection(&mut self, selection: Vec<NodeId>) {
        self.selection = selection;
    }

    /// Make every subsequent font load fail with `reason`.
    pub fn fail_font_loading(&mut self, reason: impl Into<String>) {
        self.font_failure = Some(reason.into());
    }

    /// Messages posted so far, oldest first.
    pub fn posted(&self) -> &[OutboundMessage] {
        &self.posted
    }

    pub fn take_posted(&mut self) -> Vec<OutboundMessage> {
        std::mem::take(&mut self.posted)
    }

    /// Every font requested so far, in request order.
    pub fn loaded_fonts(&self) -> &[FontName] {
        &self.loaded_fonts
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Host for SnapshotHost {
    fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    fn selection(&self) -> &[NodeId] {
        &self.selection
    }

    async fn load_fonts(&mut self, fonts: &[FontName]) -> Result<(), HostError> {
        if let Some(reason) = &self.font_failure {
            if let Some(font) = fonts.first() {
                return Err(HostError::FontLoad {
                    family: font.family.clone(),
                    reason: reason.clone(),
                });
            }
        }
        self.loaded_fonts.extend_from_slice(fonts);
        Ok(())
    }

    fn post_message(&mut self, message: OutboundMessage) {
        self.posted.push(message);
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_resolves_selection() {
        let host = SnapshotHost::from_json(
            r#"{ "nodes": [{ "id": "1:1", "name": "Card", "type": "COMPONENT" }], "selection": ["1:1"] }"#,
        )
        .unwrap();
        assert_eq!(host.selection().len(), 1);
        assert_eq!(host.scene().node(host.selection()[0]).unwrap().name, "Card");
    }

    #[test]
    fn test_from_json_rejects_unknown_selection() {
        let err = SnapshotHost::from_json(r#"{ "nodes": [], "selection": ["9:9"] }"#).unwrap_err();
        assert!(matches!(err, SnapshotError::UnknownSelection(_)));
    }

    #[test]
    fn test_font_failure_only_when_fonts_requested() {
        let mut host = SnapshotHost::default();
        host.fail_font_loading("offline");

        assert!(pollster::block_on(host.load_fonts(&[])).is_ok());
        let err = pollster::block_on(host.load_fonts(&[FontName::new("Inter", "Bold")])).unwrap_err();
        assert_eq!(
            err,
            HostError::FontLoad {
                family: "Inter".to_string(),
                reason: "offline".to_string(),
            }
        );
        assert!(host.loaded_fonts().is_empty());
    }
}
