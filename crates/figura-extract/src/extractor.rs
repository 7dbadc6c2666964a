//! Extraction orchestration: selection validation and assembly of the
//! component description.

use crate::classify::classify;
use crate::options::ExtractOptions;
use crate::properties::build_properties;
use crate::states::resolve_states;
use crate::style::extract_style;
use crate::variants::{collect_variants, variant_siblings};
use figura_core::model::ComponentDescription;
use figura_core::scene::{NodeId, NodeKind, SceneGraph};
use figura_core::types::FontName;
use figura_core::{ExtractError, Result};
use indexmap::IndexSet;

/// Extracts component descriptions from a scene graph.
///
/// Holds no per-request state; one extractor serves any number of requests.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Create an extractor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Check that the selection is exactly one component or instance.
    pub fn validate(&self, graph: &SceneGraph, selection: &[NodeId]) -> Result<NodeId> {
        let id = match selection {
            [] => return Err(ExtractError::EmptySelection),
            [id] => *id,
            _ => {
                return Err(ExtractError::MultipleSelection {
                    count: selection.len(),
                })
            }
        };

        let node = graph.node(id)?;
        match node.kind {
            NodeKind::Component(_) | NodeKind::Instance(_) => Ok(id),
            _ => Err(ExtractError::UnsupportedNodeKind {
                kind: node.kind.tag(),
            }),
        }
    }

    /// Fonts used by text in `id` and its variant siblings, deduplicated in
    /// traversal order. These must be resolved by the host before styles
    /// are read.
    pub fn required_fonts(&self, graph: &SceneGraph, id: NodeId) -> Vec<FontName> {
        let mut roots = vec![id];
        roots.extend(
            variant_siblings(graph, id)
                .into_iter()
                .map(|(sibling, _)| sibling)
                .filter(|sibling| *sibling != id),
        );

        let fonts: IndexSet<FontName> = roots
            .into_iter()
            .flat_map(|root| graph.descendants(root))
            .filter_map(|(_, node)| match &node.kind {
                NodeKind::Text(text) => text
                    .font_name
                    .as_ref()
                    .and_then(|font| font.concrete())
                    .cloned(),
                _ => None,
            })
            .collect();

        fonts.into_iter().collect()
    }

    /// Assemble the description of a validated node.
    pub fn extract(&self, graph: &SceneGraph, id: NodeId) -> Result<ComponentDescription> {
        let node = graph.node(id)?;
        let category = classify(&node.name);
        tracing::debug!(node = %node.id, name = %node.name, %category, "extracting component");

        let variants = collect_variants(graph, id);
        let styles = extract_style(node);
        let states = resolve_states(graph, id, &styles, self.options.hover_darken_factor)?;
        let properties = build_properties(node, category, &self.options);

        Ok(ComponentDescription {
            id: node.id.clone(),
            name: node.name.clone(),
            description: node.description().unwrap_or_default().to_string(),
            category,
            styles,
            states,
            variants,
            properties,
        })
    }

    /// Validate the selection and extract the selected node.
    pub fn extract_selection(
        &self,
        graph: &SceneGraph,
        selection: &[NodeId],
    ) -> Result<ComponentDescription> {
        let id = self.validate(graph, selection)?;
        self.extract(graph, id)
    }
}
