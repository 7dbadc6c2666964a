//! The component description handed to downstream code generators.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Semantic category of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Button,
    Input,
    Card,
    Dropdown,
    Modal,
    Toggle,
    Checkbox,
    Radio,
    Generic,
}

impl ComponentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Input => "input",
            Self::Card => "card",
            Self::Dropdown => "dropdown",
            Self::Modal => "modal",
            Self::Toggle => "toggle",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Generic => "generic",
        }
    }

    /// Check if components of this category respond to user input.
    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            Self::Button
                | Self::Input
                | Self::Dropdown
                | Self::Toggle
                | Self::Checkbox
                | Self::Radio
        )
    }
}

impl std::fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat, CSS-like style record. Absent fields were not set or not applicable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Interaction state a component can be styled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionState {
    Hover,
    Focus,
    Active,
    Disabled,
}

impl InteractionState {
    pub const ALL: [Self; 4] = [Self::Hover, Self::Focus, Self::Active, Self::Disabled];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Focus => "focus",
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }
}

/// Style overrides for each interaction state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateStyleSet {
    pub hover: Style,
    pub focus: Style,
    pub active: Style,
    pub disabled: Style,
}

impl StateStyleSet {
    pub fn get(&self, state: InteractionState) -> &Style {
        match state {
            InteractionState::Hover => &self.hover,
            InteractionState::Focus => &self.focus,
            InteractionState::Active => &self.active,
            InteractionState::Disabled => &self.disabled,
        }
    }

    pub fn get_mut(&mut self, state: InteractionState) -> &mut Style {
        match state {
            InteractionState::Hover => &mut self.hover,
            InteractionState::Focus => &mut self.focus,
            InteractionState::Active => &mut self.active,
            InteractionState::Disabled => &mut self.disabled,
        }
    }
}

/// One member of a variant group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Type tag of an inferred property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Number,
    Boolean,
    Enum,
    Function,
}

/// A typed component property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    #[serde(rename = "type")]
    pub prop_type: PropertyType,
    /// Default value; serialized as `null` when absent.
    pub default_value: Option<serde_json::Value>,
}

impl PropertyDefinition {
    pub fn new(prop_type: PropertyType, default_value: Option<serde_json::Value>) -> Self {
        Self {
            prop_type,
            default_value,
        }
    }

    /// A callback property; never has a default.
    pub fn function() -> Self {
        Self::new(PropertyType::Function, None)
    }

    pub fn boolean(default: bool) -> Self {
        Self::new(PropertyType::Boolean, Some(serde_json::Value::Bool(default)))
    }

    pub fn string(default: impl Into<String>) -> Self {
        Self::new(
            PropertyType::String,
            Some(serde_json::Value::String(default.into())),
        )
    }
}

/// Normalized description of one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescription {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category: ComponentCategory,
    pub styles: Style,
    pub states: StateStyleSet,
    pub variants: Vec<Variant>,
    pub properties: IndexMap<String, PropertyDefinition>,
}
