//! Style extraction from a single node.

use crate::normalize::{css_number, normalize_color, normalize_effects, round_half_up};
use figura_core::model::Style;
use figura_core::scene::{NodeKind, SceneNode, TextInfo};
use figura_core::types::Mixable;

/// Extract the flat style of `node`.
///
/// Each field is filled only when the node's kind exposes it and the value
/// is concrete; mixed values are left absent.
pub fn extract_style(node: &SceneNode) -> Style {
    let mut style = Style::new();

    if let Some(Mixable::Uniform(fills)) = &node.fills {
        style.background_color = Some(normalize_color(fills));
    }
    if let Some(strokes) = &node.strokes {
        style.border_color = Some(normalize_color(strokes));
    }
    if let Some(weight) = concrete(&node.stroke_weight) {
        style.border_width = Some(px(*weight));
    }
    if let Some(radius) = concrete(&node.corner_radius) {
        style.border_radius = Some(px(*radius));
    }
    if let Some(effects) = &node.effects {
        style.box_shadow = Some(normalize_effects(effects));
    }

    if let NodeKind::Text(text) = &node.kind {
        apply_text_style(&mut style, node, text);
    }

    if let Some(size) = node.size {
        style.width = Some(px(round_half_up(size.width)));
        style.height = Some(px(round_half_up(size.height)));
    }

    if let Some(padding) = node.kind.padding() {
        style.padding_left = padding.left.map(px);
        style.padding_right = padding.right.map(px);
        style.padding_top = padding.top.map(px);
        style.padding_bottom = padding.bottom.map(px);
    }

    style
}

fn apply_text_style(style: &mut Style, node: &SceneNode, text: &TextInfo) {
    if let Some(size) = concrete(&text.font_size) {
        style.font_size = Some(px(*size));
    }
    if let Some(weight) = concrete(&text.font_weight) {
        style.font_weight = Some(*weight);
    }
    if let Some(font) = concrete(&text.font_name) {
        style.font_family = Some(font.family.clone());
    }
    if let Some(Mixable::Uniform(fills)) = &node.fills {
        style.color = Some(normalize_color(fills));
    }
    if let Some(line_height) = concrete(&text.line_height) {
        if let Some(value) = line_height.value() {
            style.line_height = Some(format!(
                "{}{}",
                css_number(value),
                line_height.unit().to_lowercase()
            ));
        }
    }
}

fn concrete<T>(value: &Option<Mixable<T>>) -> Option<&T> {
    value.as_ref().and_then(Mixable::concrete)
}

fn px(value: f64) -> String {
    format!("{}px", css_number(value))
}
