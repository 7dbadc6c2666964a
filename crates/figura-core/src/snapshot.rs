//! JSON snapshots of a host selection.
//!
//! A snapshot is the nested node tree the host serializes for us, using the
//! host plugin API's field names. Decoding it builds a [`SceneGraph`] and
//! resolves the selected node ids.

use crate::errors::SnapshotError;
use crate::scene::{ComponentInfo, ComponentProperty, NodeId, NodeKind, SceneGraph, SceneNode, TextInfo};
use crate::types::{Effect, FontName, LineHeight, Mixable, Padding, Paint, Size};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Host node type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Component,
    Instance,
    ComponentSet,
    Text,
    Frame,
    Group,
    Rectangle,
    Ellipse,
    Vector,
    #[serde(other)]
    Other,
}

/// One serialized host node and its subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSnapshot {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fills: Option<Mixable<Vec<Paint>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<Paint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<Mixable<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<Mixable<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<Effect>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub component_properties: IndexMap<String, ComponentProperty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Mixable<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<Mixable<u16>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<Mixable<FontName>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<Mixable<LineHeight>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    fn padding(&self) -> Padding {
        Padding {
            left: self.padding_left,
            right: self.padding_right,
            top: self.padding_top,
            bottom: self.padding_bottom,
        }
    }

    fn component_info(&self) -> ComponentInfo {
        ComponentInfo {
            description: self.description.clone(),
            properties: self.component_properties.clone(),
            padding: self.padding(),
        }
    }

    fn kind(&self) -> NodeKind {
        match self.node_type {
            NodeType::Component => NodeKind::Component(self.component_info()),
            NodeType::Instance => NodeKind::Instance(self.component_info()),
            NodeType::ComponentSet => NodeKind::ComponentSet(self.component_info()),
            NodeType::Text => NodeKind::Text(TextInfo {
                font_size: self.font_size.clone(),
                font_weight: self.font_weight,
                font_name: self.font_name.clone(),
                line_height: self.line_height,
            }),
            NodeType::Frame => NodeKind::Frame(self.padding()),
            NodeType::Group
            | NodeType::Rectangle
            | NodeType::Ellipse
            | NodeType::Vector
            | NodeType::Other => NodeKind::Shape,
        }
    }

    fn to_scene_node(&self) -> SceneNode {
        let size = match (self.width, self.height) {
            (Some(width), Some(height)) => Some(Size::new(width, height)),
            _ => None,
        };
        SceneNode {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind(),
            size,
            fills: self.fills.clone(),
            strokes: self.strokes.clone(),
            stroke_weight: self.stroke_weight,
            corner_radius: self.corner_radius,
            effects: self.effects.clone(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Serialized selection: root subtrees plus the ids of the selected nodes.
///
/// Variants and variant-based state styles are read from the selected
/// node's siblings, so a selected variant must be serialized under its
/// parent `COMPONENT_SET` root together with every sibling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSnapshot {
    #[serde(default)]
    pub nodes: Vec<NodeSnapshot>,
    #[serde(default)]
    pub selection: Vec<String>,
}

impl SelectionSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the scene graph and resolve the selected ids, in selection order.
    pub fn into_scene(self) -> Result<(SceneGraph, Vec<NodeId>), SnapshotError> {
        let mut graph = SceneGraph::new();
        let mut seen = HashSet::new();
        for root in &self.nodes {
            insert_subtree(&mut graph, None, root, &mut seen)?;
        }

        let selection = self
            .selection
            .iter()
            .map(|host_id| {
                graph
                    .find_by_host_id(host_id)
                    .ok_or_else(|| SnapshotError::UnknownSelection(host_id.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((graph, selection))
    }
}

fn insert_subtree(
    graph: &mut SceneGraph,
    parent: Option<NodeId>,
    snapshot: &NodeSnapshot,
    seen: &mut HashSet<String>,
) -> Result<(), SnapshotError> {
    if !seen.insert(snapshot.id.clone()) {
        return Err(SnapshotError::DuplicateId(snapshot.id.clone()));
    }
    let id = graph.insert(parent, snapshot.to_scene_node());
    for child in &snapshot.children {
        insert_subtree(graph, Some(id), child, seen)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANT_SET: &str = r#"{
        "nodes": [{
            "id": "10:1",
            "name": "Button",
            "type": "COMPONENT_SET",
            "children": [
                {
                    "id": "10:2",
                    "name": "State=Default",
                    "type": "COMPONENT",
                    "description": "Resting",
                    "width": 120.4,
                    "height": 40,
                    "paddingLeft": 16,
                    "paddingRight": 16,
                    "fills": [{ "type": "SOLID", "color": { "r": 0, "g": 0.4, "b": 1 } }],
                    "componentProperties": {
                        "Label#1:0": { "type": "TEXT", "value": "Submit" }
                    },
                    "children": [{
                        "id": "10:3",
                        "name": "Label",
                        "type": "TEXT",
                        "fontSize": 14,
                        "fontWeight": 600,
                        "fontName": { "family": "Inter", "style": "Semi Bold" },
                        "lineHeight": "mixed",
                        "fills": "mixed"
                    }]
                },
                { "id": "10:4", "name": "State=Hover", "type": "COMPONENT" }
            ]
        }],
        "selection": ["10:2"]
    }"#;

    #[test]
    fn test_decode_variant_set() {
        let (graph, selection) = SelectionSnapshot::from_json(VARIANT_SET)
            .unwrap()
            .into_scene()
            .unwrap();

        assert_eq!(graph.len(), 4);
        assert_eq!(selection.len(), 1);

        let selected = graph.node(selection[0]).unwrap();
        assert_eq!(selected.name, "State=Default");
        assert_eq!(selected.description(), Some("Resting"));
        assert_eq!(selected.size, Some(Size::new(120.4, 40.0)));
        assert_eq!(selected.kind.padding().and_then(|p| p.left), Some(16.0));
        assert_eq!(selected.kind.padding().and_then(|p| p.top), None);
        assert!(graph.variant_group(selection[0]).is_some());

        let label = graph
            .children(selection[0])
            .map(|(_, node)| node)
            .next()
            .unwrap();
        match &label.kind {
            NodeKind::Text(text) => {
                assert_eq!(text.font_size, Some(Mixable::Uniform(14.0)));
                assert_eq!(text.font_weight, Some(Mixable::Uniform(600)));
                assert_eq!(text.line_height, Some(Mixable::Mixed));
            }
            other => panic!("expected text node, got {other:?}"),
        }
        assert_eq!(label.fills, Some(Mixable::Mixed));
    }

    #[test]
    fn test_unknown_selection_is_rejected() {
        let snapshot = SelectionSnapshot {
            nodes: Vec::new(),
            selection: vec!["9:9".to_string()],
        };
        assert!(matches!(
            snapshot.into_scene(),
            Err(SnapshotError::UnknownSelection(id)) if id == "9:9"
        ));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"{
            "nodes": [
                { "id": "1:1", "name": "A", "type": "FRAME" },
                { "id": "1:1", "name": "B", "type": "RECTANGLE" }
            ],
            "selection": []
        }"#;
        let result = SelectionSnapshot::from_json(json).unwrap().into_scene();
        assert!(matches!(result, Err(SnapshotError::DuplicateId(id)) if id == "1:1"));
    }

    #[test]
    fn test_unknown_node_type_is_a_shape() {
        let json = r#"{ "nodes": [{ "id": "1", "name": "Star", "type": "STAR" }], "selection": ["1"] }"#;
        let (graph, selection) = SelectionSnapshot::from_json(json).unwrap().into_scene().unwrap();
        assert_eq!(graph.node(selection[0]).unwrap().kind, NodeKind::Shape);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            SelectionSnapshot::from_json("{"),
            Err(SnapshotError::Json(_))
        ));
    }
}
