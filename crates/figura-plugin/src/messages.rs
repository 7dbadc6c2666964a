//! Messages exchanged with the plugin UI.

use figura_core::model::{ComponentCategory, ComponentDescription};
use figura_core::ExtractError;
use serde::{Deserialize, Serialize};

/// Request sent by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InboundMessage {
    /// Extract the current selection.
    GenerateComponent,
    /// End the session.
    ClosePlugin,
    /// Any other message type; ignored.
    #[serde(other)]
    Unknown,
}

impl InboundMessage {
    /// Decode a JSON message. Undecodable input is treated as unknown.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring undecodable message");
            Self::Unknown
        })
    }
}

/// Reply posted to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum OutboundMessage {
    ComponentData {
        #[serde(rename = "componentType")]
        component_type: ComponentCategory,
        #[serde(rename = "componentData")]
        component_data: Box<ComponentDescription>,
    },
    Error {
        message: String,
    },
}

impl OutboundMessage {
    pub fn component_data(description: ComponentDescription) -> Self {
        Self::ComponentData {
            component_type: description.category,
            component_data: Box::new(description),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<Result<ComponentDescription, ExtractError>> for OutboundMessage {
    fn from(result: Result<ComponentDescription, ExtractError>) -> Self {
        match result {
            Ok(description) => Self::component_data(description),
            Err(err) => Self::error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figura_core::model::{PropertyDefinition, StateStyleSet, Style, Variant};

    fn description() -> ComponentDescription {
        let mut description = ComponentDescription {
            id: "1:1".to_string(),
            name: "Primary Button".to_string(),
            description: String::new(),
            category: ComponentCategory::Button,
            styles: Style {
                background_color: Some("rgba(0, 0, 255, 1)".to_string()),
                width: Some("120px".to_string()),
                ..Style::default()
            },
            states: StateStyleSet {
                hover: Style {
                    background_color: Some("rgba(0, 0, 229, 1)".to_string()),
                    ..Style::default()
                },
                ..StateStyleSet::default()
            },
            variants: vec![Variant {
                id: "1:1".to_string(),
                name: "Primary Button".to_string(),
                description: String::new(),
            }],
            properties: Default::default(),
        };
        description
            .properties
            .insert("onClick".to_string(), PropertyDefinition::function());
        description
            .properties
            .insert("disabled".to_string(), PropertyDefinition::boolean(false));
        description
    }

    #[test]
    fn test_decode_inbound() {
        assert_eq!(
            InboundMessage::from_json(r#"{"type":"generate-component"}"#),
            InboundMessage::GenerateComponent
        );
        assert_eq!(
            InboundMessage::from_json(r#"{"type":"close-plugin"}"#),
            InboundMessage::ClosePlugin
        );
        assert_eq!(
            InboundMessage::from_json(r#"{"type":"resize","width":400}"#),
            InboundMessage::Unknown
        );
        assert_eq!(InboundMessage::from_json("not json"), InboundMessage::Unknown);
        assert_eq!(InboundMessage::from_json(r#"{"kind":"x"}"#), InboundMessage::Unknown);
    }

    #[test]
    fn test_error_wire_shape() {
        let message = OutboundMessage::from(Err(ExtractError::EmptySelection));
        insta::assert_json_snapshot!(message, @r#"
        {
          "type": "error",
          "message": "Please select a component to convert"
        }
        "#);
    }

    #[test]
    fn test_component_data_wire_shape() {
        let message = OutboundMessage::component_data(description());
        insta::assert_json_snapshot!(message, @r#"
        {
          "type": "component-data",
          "componentType": "button",
          "componentData": {
            "id": "1:1",
            "name": "Primary Button",
            "description": "",
            "type": "button",
            "styles": {
              "backgroundColor": "rgba(0, 0, 255, 1)",
              "width": "120px"
            },
            "states": {
              "hover": {
                "backgroundColor": "rgba(0, 0, 229, 1)"
              },
              "focus": {},
              "active": {},
              "disabled": {}
            },
            "variants": [
              {
                "id": "1:1",
                "name": "Primary Button",
                "description": ""
              }
            ],
            "properties": {
              "onClick": {
                "type": "function",
                "defaultValue": null
              },
              "disabled": {
                "type": "boolean",
                "defaultValue": false
              }
            }
          }
        }
        "#);
    }

    #[test]
    fn test_outbound_json_round_trip() {
        let message = OutboundMessage::component_data(description());
        let json = message.to_json().unwrap();
        let decoded: OutboundMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, message);
    }
}
