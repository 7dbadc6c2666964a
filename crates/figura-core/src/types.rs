//! Value types read from host nodes: colors, paints, effects, text metrics.
//!
//! Field names and type tags follow the host plugin API's JSON shape so that
//! a serialized selection decodes directly into these types.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A property that may be reported as an indeterminate placeholder when a
/// node's descendants or text ranges disagree.
///
/// Serialized as the plain value, or as the string `"mixed"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mixable<T> {
    Uniform(T),
    Mixed,
}

impl<T> Mixable<T> {
    /// The value, if it is uniform across the node.
    pub fn concrete(&self) -> Option<&T> {
        match self {
            Self::Uniform(value) => Some(value),
            Self::Mixed => None,
        }
    }

    pub fn is_mixed(&self) -> bool {
        matches!(self, Self::Mixed)
    }
}

impl<T> From<T> for Mixable<T> {
    fn from(value: T) -> Self {
        Self::Uniform(value)
    }
}

#[derive(Deserialize)]
enum MixedMarker {
    #[serde(rename = "mixed")]
    Mixed,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MixableRepr<T> {
    Marker(MixedMarker),
    Value(T),
}

impl<T: Serialize> Serialize for Mixable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Uniform(value) => value.serialize(serializer),
            Self::Mixed => serializer.serialize_str("mixed"),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Mixable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match MixableRepr::<T>::deserialize(deserializer)? {
            MixableRepr::Marker(MixedMarker::Mixed) => Self::Mixed,
            MixableRepr::Value(value) => Self::Uniform(value),
        })
    }
}

/// RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Scale each channel to an 8-bit integer, rounding half up.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (channel8(self.r), channel8(self.g), channel8(self.b))
    }
}

/// RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

fn channel8(value: f64) -> u8 {
    (value * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// 2D offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Node dimensions in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Auto-layout padding. Each side is absent unless the host reports a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub top: Option<f64>,
    pub bottom: Option<f64>,
}

impl Padding {
    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self {
            left: Some(horizontal),
            right: Some(horizontal),
            top: Some(vertical),
            bottom: Some(vertical),
        }
    }
}

/// A fill or stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid {
        color: Rgb,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        opacity: Option<f64>,
    },
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    Video,
    #[serde(other)]
    Unsupported,
}

impl Paint {
    /// Solid paint at full opacity.
    pub fn solid(r: f64, g: f64, b: f64) -> Self {
        Self::Solid {
            color: Rgb::new(r, g, b),
            opacity: None,
        }
    }

    pub fn solid_with_opacity(r: f64, g: f64, b: f64, opacity: f64) -> Self {
        Self::Solid {
            color: Rgb::new(r, g, b),
            opacity: Some(opacity),
        }
    }
}

/// Shadow parameters shared by drop and inner shadows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub color: Rgba,
    pub offset: Vector,
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
}

impl Shadow {
    pub fn new(offset: Vector, radius: f64, color: Rgba) -> Self {
        Self {
            color,
            offset,
            radius,
            spread: None,
        }
    }
}

/// A visual effect attached to a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    DropShadow(Shadow),
    InnerShadow(Shadow),
    LayerBlur { radius: f64 },
    BackgroundBlur { radius: f64 },
    #[serde(other)]
    Unsupported,
}

/// Text line height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeight {
    Pixels { value: f64 },
    Percent { value: f64 },
    Auto,
}

impl LineHeight {
    /// The host's unit tag.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Pixels { .. } => "PIXELS",
            Self::Percent { .. } => "PERCENT",
            Self::Auto => "AUTO",
        }
    }

    /// The numeric value, for units that carry one.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Pixels { value } | Self::Percent { value } => Some(*value),
            Self::Auto => None,
        }
    }
}

/// Font family and style as the host names them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}
