//! Paint and effect normalization into CSS-like strings.

use figura_core::types::{Effect, Paint, Rgb};

/// Value used when no solid paint is available.
pub const TRANSPARENT: &str = "transparent";

/// Value used when a node has no drop shadows.
pub const NO_SHADOW: &str = "none";

/// Render the first paint as an `rgba(...)` string.
///
/// Only the first paint is inspected; anything other than a solid paint
/// renders as `transparent`.
pub fn normalize_color(fills: &[Paint]) -> String {
    match fills.first() {
        Some(Paint::Solid { color, opacity }) => rgba_string(color, opacity.unwrap_or(1.0)),
        _ => TRANSPARENT.to_string(),
    }
}

/// Render drop shadows as a `box-shadow` list, preserving order.
pub fn normalize_effects(effects: &[Effect]) -> String {
    let shadows: Vec<String> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::DropShadow(shadow) => Some(format!(
                "{}px {}px {}px {}",
                css_number(shadow.offset.x),
                css_number(shadow.offset.y),
                css_number(shadow.radius),
                rgba_string(&shadow.color.rgb(), shadow.color.a),
            )),
            _ => None,
        })
        .collect();

    if shadows.is_empty() {
        NO_SHADOW.to_string()
    } else {
        shadows.join(", ")
    }
}

/// Darken an `rgba(r, g, b, a)` string by subtracting `round(255 * factor)`
/// from each color channel, floored at zero.
///
/// Strings of any other form are returned unchanged.
pub fn darken(color: &str, factor: f64) -> String {
    match parse_rgba(color) {
        Some([r, g, b, a]) => {
            let delta = round_half_up(255.0 * factor);
            let channel = |c: f64| (c.trunc() - delta).max(0.0);
            format!(
                "rgba({}, {}, {}, {})",
                css_number(channel(r)),
                css_number(channel(g)),
                css_number(channel(b)),
                css_number(a),
            )
        }
        None => color.to_string(),
    }
}

/// Format a number the way CSS authors write it: `1` rather than `1.0`.
pub fn css_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else {
        value.to_string()
    }
}

/// Round to the nearest integer, halves toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn rgba_string(color: &Rgb, alpha: f64) -> String {
    let (r, g, b) = color.to_rgb8();
    format!("rgba({}, {}, {}, {})", r, g, b, css_number(alpha))
}

fn parse_rgba(color: &str) -> Option<[f64; 4]> {
    let inner = color.strip_prefix("rgba(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(|part| part.trim().parse::<f64>().ok());
    let rgba = [parts.next()??, parts.next()??, parts.next()??, parts.next()??];
    if parts.next().is_some() {
        return None;
    }
    Some(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figura_core::types::{Rgba, Shadow, Vector};
    use proptest::prelude::*;

    fn drop_shadow(x: f64, y: f64, radius: f64, color: Rgba) -> Effect {
        Effect::DropShadow(Shadow::new(Vector::new(x, y), radius, color))
    }

    #[test]
    fn test_empty_fills_are_transparent() {
        assert_eq!(normalize_color(&[]), "transparent");
    }

    #[test]
    fn test_solid_fill_with_opacity() {
        let fills = [Paint::solid_with_opacity(1.0, 0.0, 0.0, 0.5)];
        assert_eq!(normalize_color(&fills), "rgba(255, 0, 0, 0.5)");
    }

    #[test]
    fn test_solid_fill_defaults_to_opaque() {
        let fills = [Paint::solid(0.2, 0.4, 0.6)];
        assert_eq!(normalize_color(&fills), "rgba(51, 102, 153, 1)");
    }

    #[test]
    fn test_only_first_fill_is_used() {
        let gradient_first = [Paint::GradientLinear, Paint::solid(1.0, 1.0, 1.0)];
        assert_eq!(normalize_color(&gradient_first), "transparent");

        let solid_first = [Paint::solid(0.0, 0.0, 0.0), Paint::Image];
        assert_eq!(normalize_color(&solid_first), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn test_no_effects_is_none() {
        assert_eq!(normalize_effects(&[]), "none");
        assert_eq!(
            normalize_effects(&[Effect::LayerBlur { radius: 4.0 }]),
            "none"
        );
    }

    #[test]
    fn test_single_drop_shadow() {
        let effects = [drop_shadow(2.0, 4.0, 8.0, Rgba::new(0.0, 0.0, 0.0, 0.25))];
        assert_eq!(normalize_effects(&effects), "2px 4px 8px rgba(0, 0, 0, 0.25)");
    }

    #[test]
    fn test_shadows_keep_order_and_skip_inner() {
        let effects = [
            drop_shadow(0.0, 1.0, 2.0, Rgba::new(0.0, 0.0, 0.0, 0.1)),
            Effect::InnerShadow(Shadow::new(
                Vector::new(0.0, 0.0),
                3.0,
                Rgba::new(1.0, 1.0, 1.0, 1.0),
            )),
            drop_shadow(0.5, -2.0, 12.0, Rgba::new(1.0, 0.0, 0.0, 1.0)),
        ];
        assert_eq!(
            normalize_effects(&effects),
            "0px 1px 2px rgba(0, 0, 0, 0.1), 0.5px -2px 12px rgba(255, 0, 0, 1)"
        );
    }

    #[test]
    fn test_darken_clamps_at_zero() {
        assert_eq!(darken("rgba(200,100,50,1)", 0.2), "rgba(149, 49, 0, 1)");
        assert_eq!(darken("rgba(26, 26, 26, 0.5)", 0.1), "rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn test_darken_ignores_other_forms() {
        assert_eq!(darken("transparent", 0.2), "transparent");
        assert_eq!(darken("#ff0000", 0.2), "#ff0000");
        assert_eq!(darken("rgba(1, 2, 3)", 0.2), "rgba(1, 2, 3)");
        assert_eq!(darken("rgba(a, b, c, d)", 0.2), "rgba(a, b, c, d)");
    }

    #[test]
    fn test_css_number() {
        assert_eq!(css_number(1.0), "1");
        assert_eq!(css_number(-0.0), "0");
        assert_eq!(css_number(1.5), "1.5");
        assert_eq!(css_number(0.25), "0.25");
    }

    proptest! {
        #[test]
        fn prop_darken_never_goes_negative(
            r in 0u8..=255, g in 0u8..=255, b in 0u8..=255, factor in 0.0f64..=1.0
        ) {
            let color = format!("rgba({}, {}, {}, 1)", r, g, b);
            let darkened = darken(&color, factor);
            let [dr, dg, db, da] = parse_rgba(&darkened).unwrap();
            let delta = round_half_up(255.0 * factor);
            prop_assert_eq!(dr, (f64::from(r) - delta).max(0.0));
            prop_assert_eq!(dg, (f64::from(g) - delta).max(0.0));
            prop_assert_eq!(db, (f64::from(b) - delta).max(0.0));
            prop_assert_eq!(da, 1.0);
        }

        #[test]
        fn prop_solid_color_round_trips_channels(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let fills = [Paint::solid(
                f64::from(r) / 255.0,
                f64::from(g) / 255.0,
                f64::from(b) / 255.0,
            )];
            prop_assert_eq!(normalize_color(&fills), format!("rgba({}, {}, {}, 1)", r, g, b));
        }
    }
}
