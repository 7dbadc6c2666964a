//! Variant enumeration for components inside a variant group.

use figura_core::model::Variant;
use figura_core::scene::{NodeId, SceneGraph, SceneNode};

/// Component siblings of `id` in host order, including `id` itself.
///
/// Empty unless `id` is a plain component directly inside a component set.
pub fn variant_siblings(graph: &SceneGraph, id: NodeId) -> Vec<(NodeId, &SceneNode)> {
    match graph.variant_group(id) {
        Some(group) => graph
            .children(group)
            .filter(|(_, node)| node.kind.is_component())
            .collect(),
        None => Vec::new(),
    }
}

/// Collect the variants of the group `id` belongs to.
pub fn collect_variants(graph: &SceneGraph, id: NodeId) -> Vec<Variant> {
    variant_siblings(graph, id)
        .into_iter()
        .map(|(_, node)| Variant {
            id: node.id.clone(),
            name: node.name.clone(),
            description: node.description().unwrap_or_default().to_string(),
        })
        .collect()
}
