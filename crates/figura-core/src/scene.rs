//! Scene graph of host nodes.
//!
//! The graph is an arena: nodes are addressed by [`NodeId`] and link to
//! their parent and children by index. What a node can report depends on
//! its [`NodeKind`], so capability checks are pattern matches rather than
//! runtime property probing.

use crate::errors::SceneError;
use crate::types::{Effect, FontName, LineHeight, Mixable, Padding, Paint, Size};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Index of a node in a [`SceneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Kind of a host node, carrying the data only that kind exposes.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A main component.
    Component(ComponentInfo),
    /// An instance of a component.
    Instance(ComponentInfo),
    /// A variant group; its children are the variants.
    ComponentSet(ComponentInfo),
    /// A text leaf.
    Text(TextInfo),
    /// A generic container.
    Frame(Padding),
    /// Any other visual.
    Shape,
}

impl NodeKind {
    /// The host's type tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Component(_) => "COMPONENT",
            Self::Instance(_) => "INSTANCE",
            Self::ComponentSet(_) => "COMPONENT_SET",
            Self::Text(_) => "TEXT",
            Self::Frame(_) => "FRAME",
            Self::Shape => "SHAPE",
        }
    }

    /// Component metadata for component, instance and component set kinds.
    pub fn component_info(&self) -> Option<&ComponentInfo> {
        match self {
            Self::Component(info) | Self::Instance(info) | Self::ComponentSet(info) => Some(info),
            Self::Text(_) | Self::Frame(_) | Self::Shape => None,
        }
    }

    /// Padding for kinds that lay out children.
    pub fn padding(&self) -> Option<&Padding> {
        match self {
            Self::Component(info) | Self::Instance(info) | Self::ComponentSet(info) => {
                Some(&info.padding)
            }
            Self::Frame(padding) => Some(padding),
            Self::Text(_) | Self::Shape => None,
        }
    }

    pub fn is_component(&self) -> bool {
        matches!(self, Self::Component(_))
    }

    pub fn is_component_set(&self) -> bool {
        matches!(self, Self::ComponentSet(_))
    }
}

/// Data carried by component-like nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentInfo {
    pub description: Option<String>,
    pub properties: IndexMap<String, ComponentProperty>,
    pub padding: Padding,
}

/// Kind of a declared component property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentPropertyKind {
    Boolean,
    Text,
    InstanceSwap,
    Variant,
    #[serde(other)]
    Other,
}

/// A declared, configurable component property and its current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentProperty {
    #[serde(rename = "type")]
    pub kind: ComponentPropertyKind,
    pub value: serde_json::Value,
}

impl ComponentProperty {
    pub fn new(kind: ComponentPropertyKind, value: impl Into<serde_json::Value>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Text metrics of a text node. Each may be absent or mixed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInfo {
    pub font_size: Option<Mixable<f64>>,
    pub font_weight: Option<Mixable<u16>>,
    pub font_name: Option<Mixable<FontName>>,
    pub line_height: Option<Mixable<LineHeight>>,
}

/// A node in the scene graph.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub size: Option<Size>,
    pub fills: Option<Mixable<Vec<Paint>>>,
    pub strokes: Option<Vec<Paint>>,
    pub stroke_weight: Option<Mixable<f64>>,
    pub corner_radius: Option<Mixable<f64>>,
    pub effects: Option<Vec<Effect>>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl SceneNode {
    /// Create a node with no visual properties.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            size: None,
            fills: None,
            strokes: None,
            stroke_weight: None,
            corner_radius: None,
            effects: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    pub fn with_fills(mut self, fills: Vec<Paint>) -> Self {
        self.fills = Some(Mixable::Uniform(fills));
        self
    }

    pub fn with_strokes(mut self, strokes: Vec<Paint>, weight: f64) -> Self {
        self.strokes = Some(strokes);
        self.stroke_weight = Some(Mixable::Uniform(weight));
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = Some(Mixable::Uniform(radius));
        self
    }

    pub fn with_effects(mut self, effects: Vec<Effect>) -> Self {
        self.effects = Some(effects);
        self
    }

    /// Description of component-like nodes.
    pub fn description(&self) -> Option<&str> {
        self.kind
            .component_info()
            .and_then(|info| info.description.as_deref())
    }
}

/// Arena of host nodes.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node under `parent` (or as a root) and return its id.
    ///
    /// Any parent/children links already set on `node` are replaced.
    pub fn insert(&mut self, parent: Option<NodeId>, mut node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = parent;
        node.children.clear();
        self.nodes.push(node);
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(p.0)) {
            parent.children.push(id);
        }
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    /// Look up a node, failing for ids from another graph.
    pub fn node(&self, id: NodeId) -> Result<&SceneNode, SceneError> {
        self.get(id).ok_or(SceneError::UnknownNode(id))
    }

    pub fn parent(&self, id: NodeId) -> Option<&SceneNode> {
        self.get(id)?.parent.and_then(|p| self.get(p))
    }

    /// Children of `id` in host order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &SceneNode)> + '_ {
        let children = self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[]);
        children
            .iter()
            .filter_map(move |&child| self.get(child).map(|node| (child, node)))
    }

    /// The component set `id` belongs to, if it is a plain component
    /// directly inside one.
    pub fn variant_group(&self, id: NodeId) -> Option<NodeId> {
        let node = self.get(id)?;
        if !node.kind.is_component() {
            return None;
        }
        let parent = node.parent?;
        self.get(parent)
            .filter(|p| p.kind.is_component_set())
            .map(|_| parent)
    }

    /// Depth-first iterator over `id` and its descendants.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let stack = if self.get(id).is_some() { vec![id] } else { Vec::new() };
        Descendants { graph: self, stack }
    }

    pub fn find_by_host_id(&self, host_id: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.id == host_id).map(NodeId)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Pre-order traversal produced by [`SceneGraph::descendants`].
pub struct Descendants<'a> {
    graph: &'a SceneGraph,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, &'a SceneNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.graph.get(id)?;
        self.stack.extend(node.children.iter().rev());
        Some((id, node))
    }
}
