//! Interaction state styles.
//!
//! States come from sibling variants named after them ("Hover",
//! "State=Pressed", ...). When no hover variant exists, a hover background
//! is synthesized by darkening the base background. No other state gets a
//! synthesized fallback.

use crate::normalize::{darken, TRANSPARENT};
use crate::style::extract_style;
use crate::variants::variant_siblings;
use figura_core::model::{InteractionState, StateStyleSet, Style};
use figura_core::scene::{NodeId, SceneGraph};
use figura_core::Result;

/// Default amount the synthesized hover background is darkened by.
pub const HOVER_DARKEN_FACTOR: f64 = 0.1;

/// Route a variant name to the interaction state it styles, if any.
pub fn state_for_variant(name: &str) -> Option<InteractionState> {
    let name = name.to_lowercase();
    if name.contains("hover") {
        Some(InteractionState::Hover)
    } else if name.contains("focus") {
        Some(InteractionState::Focus)
    } else if name.contains("active") || name.contains("pressed") {
        Some(InteractionState::Active)
    } else if name.contains("disabled") {
        Some(InteractionState::Disabled)
    } else {
        None
    }
}

/// Resolve the state styles of `id`, using `base` as its own style.
pub fn resolve_states(
    graph: &SceneGraph,
    id: NodeId,
    base: &Style,
    darken_factor: f64,
) -> Result<StateStyleSet> {
    graph.node(id)?;
    let mut states = StateStyleSet::default();

    for (_, sibling) in variant_siblings(graph, id) {
        if let Some(state) = state_for_variant(&sibling.name) {
            *states.get_mut(state) = extract_style(sibling);
        }
    }

    if states.hover.is_empty() {
        if let Some(background) = base
            .background_color
            .as_deref()
            .filter(|color| *color != TRANSPARENT)
        {
            states.hover.background_color = Some(darken(background, darken_factor));
        }
    }

    Ok(states)
}
