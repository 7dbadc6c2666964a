//! Property schema inference.

use crate::options::ExtractOptions;
use figura_core::model::{ComponentCategory, PropertyDefinition, PropertyType};
use figura_core::scene::{ComponentProperty, ComponentPropertyKind, SceneNode};
use indexmap::IndexMap;
use serde_json::Value;

/// Build the property schema of `node`.
///
/// Declared component properties come first; conventional properties for
/// buttons and inputs are then added, replacing declared ones of the same
/// name.
pub fn build_properties(
    node: &SceneNode,
    category: ComponentCategory,
    options: &ExtractOptions,
) -> IndexMap<String, PropertyDefinition> {
    let mut props = IndexMap::new();

    if let Some(info) = node.kind.component_info() {
        for (name, property) in &info.properties {
            props.insert(name.clone(), declared_property(property, options));
        }
    }

    let name = node.name.to_lowercase();
    let (is_button, is_input) = if options.conventions_follow_category {
        (
            category == ComponentCategory::Button,
            category == ComponentCategory::Input,
        )
    } else {
        (name.contains("button"), name.contains("input"))
    };

    if is_button {
        props.insert("onClick".to_string(), PropertyDefinition::function());
        props.insert("disabled".to_string(), PropertyDefinition::boolean(false));
    }

    if is_input {
        props.insert("value".to_string(), PropertyDefinition::string(""));
        props.insert("onChange".to_string(), PropertyDefinition::function());
        props.insert("placeholder".to_string(), PropertyDefinition::string(""));
        props.insert("disabled".to_string(), PropertyDefinition::boolean(false));
    }

    props
}

/// Infer the definition of one declared property.
///
/// Only string and boolean values become defaults. Numeric values and
/// variant selections stay `null` unless `typed_defaults` is set.
pub fn declared_property(property: &ComponentProperty, options: &ExtractOptions) -> PropertyDefinition {
    let prop_type = match property.kind {
        ComponentPropertyKind::Boolean => PropertyType::Boolean,
        ComponentPropertyKind::Variant => PropertyType::Enum,
        _ if property.value.is_number() => PropertyType::Number,
        _ => PropertyType::String,
    };

    let default_value = match (&property.value, prop_type) {
        (Value::String(_), PropertyType::Enum) | (Value::Number(_), _) => {
            options.typed_defaults.then(|| property.value.clone())
        }
        (Value::String(_) | Value::Bool(_), _) => Some(property.value.clone()),
        _ => None,
    };

    PropertyDefinition::new(prop_type, default_value)
}
