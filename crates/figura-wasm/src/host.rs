//! Host implementation backed by JavaScript callbacks.

use figura_core::scene::{NodeId, SceneGraph};
use figura_core::types::FontName;
use figura_core::HostError;
use figura_plugin::{Host, OutboundMessage};
use js_sys::{Function, Promise};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// A [`Host`] whose UI channel and font loader live in JavaScript.
///
/// The scene is replaced from a serialized selection before each request.
pub struct JsHost {
    scene: SceneGraph,
    selection: Vec<NodeId>,
    post_message: Function,
    load_fonts: Option<Function>,
    close: Option<Function>,
}

impl JsHost {
    pub fn new(post_message: Function, load_fonts: Option<Function>, close: Option<Function>) -> Self {
        Self {
            scene: SceneGraph::new(),
            selection: Vec::new(),
            post_message,
            load_fonts,
            close,
        }
    }

    pub fn set_scene(&mut self, scene: SceneGraph, selection: Vec<NodeId>) {
        self.scene = scene;
        self.selection = selection;
    }
}

/// Serialize with plain objects for maps, as the UI expects JSON-shaped data.
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

impl Host for JsHost {
    fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    fn selection(&self) -> &[NodeId] {
        &self.selection
    }

    async fn load_fonts(&mut self, fonts: &[FontName]) -> Result<(), HostError> {
        let Some(loader) = &self.load_fonts else {
            return Ok(());
        };
        let family = fonts
            .first()
            .map(|font| font.family.clone())
            .unwrap_or_default();
        let font_load = |reason: String| HostError::FontLoad {
            family: family.clone(),
            reason,
        };

        let arg = to_js(fonts).map_err(|e| font_load(e.to_string()))?;
        let returned = loader
            .call1(&JsValue::NULL, &arg)
            .map_err(|e| font_load(describe(&e)))?;
        JsFuture::from(Promise::resolve(&returned))
            .await
            .map_err(|e| font_load(describe(&e)))?;
        Ok(())
    }

    fn post_message(&mut self, message: OutboundMessage) {
        let value = match to_js(&message) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, "failed to serialize outbound message");
                return;
            }
        };
        if let Err(err) = self.post_message.call1(&JsValue::NULL, &value) {
            tracing::warn!(error = %describe(&err), "postMessage callback threw");
        }
    }

    fn close(&mut self) {
        if let Some(close) = &self.close {
            if let Err(err) = close.call0(&JsValue::NULL) {
                tracing::warn!(error = %describe(&err), "close callback threw");
            }
        }
    }
}
