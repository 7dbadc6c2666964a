//! WebAssembly bindings for the figura component extractor.
//!
//! The plugin's main thread serializes the current selection and forwards
//! UI messages to a [`PluginSession`]; replies come back through the
//! `postMessage` callback.
//!
//! The selection is passed as a [`SelectionSnapshot`]: `nodes` holds root
//! subtrees and `selection` the selected node ids. When a selected
//! component is a variant, its root must be the parent `COMPONENT_SET`
//! with every sibling variant included. A snapshot of the selected node
//! alone extracts without variants or variant-based state styles.
//!
//! ## Example
//!
//! ```js
//! import { PluginSession } from 'figura-wasm';
//!
//! const session = new PluginSession(
//!   (msg) => figma.ui.postMessage(msg),
//!   (fonts) => Promise.all(fonts.map((f) => figma.loadFontAsync(f))),
//!   () => figma.closePlugin(),
//! );
//!
//! // Serialize a node tree with the plugin API field names; figma.mixed
//! // becomes the string "mixed".
//! const toSnapshot = (node) => ({
//!   id: node.id, name: node.name, type: node.type,
//!   /* width, height, fills, strokes, effects, padding*, text fields ... */
//!   children: 'children' in node ? node.children.map(toSnapshot) : [],
//! });
//!
//! figma.ui.onmessage = (msg) => {
//!   const selected = figma.currentPage.selection;
//!   const roots = selected.map((node) =>
//!     node.parent && node.parent.type === 'COMPONENT_SET' ? node.parent : node);
//!   session.handleMessage(msg, {
//!     nodes: [...new Set(roots)].map(toSnapshot),
//!     selection: selected.map((node) => node.id),
//!   });
//! };
//! ```

use figura_core::scene::{NodeId, SceneGraph};
use figura_core::snapshot::SelectionSnapshot;
use figura_core::types::Paint;
use figura_extract::{classify, darken, normalize_color, ExtractOptions, Extractor};
use figura_plugin::{InboundMessage, Session, SessionState};
use js_sys::{Function, Promise};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

mod host;

pub use host::JsHost;
use host::to_js;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

enum Slot {
    Idle(Box<Session<JsHost>>),
    InFlight,
    Closed,
}

/// A plugin session driven from JavaScript.
///
/// Messages are handled strictly in arrival order: each waits for the
/// promise of the message before it, so a `close-plugin` sent while fonts
/// are loading runs after that request has posted its reply.
#[wasm_bindgen]
pub struct PluginSession {
    slot: Rc<RefCell<Slot>>,
    tail: RefCell<Promise>,
}

#[wasm_bindgen]
impl PluginSession {
    /// Create a session.
    ///
    /// `postMessage` receives every reply. `loadFonts`, if given, receives
    /// the fonts a request needs and may return a Promise. `close` is called
    /// once when the UI asks to close.
    #[wasm_bindgen(constructor)]
    pub fn new(
        post_message: Function,
        load_fonts: Option<Function>,
        close: Option<Function>,
        options: JsValue,
    ) -> Result<PluginSession, JsError> {
        let options = decode_options(options)?;
        let host = JsHost::new(post_message, load_fonts, close);
        Ok(Self {
            slot: Rc::new(RefCell::new(Slot::Idle(Box::new(Session::with_options(
                host, options,
            ))))),
            tail: RefCell::new(Promise::resolve(&JsValue::UNDEFINED)),
        })
    }

    /// Handle one UI message against the serialized current selection.
    ///
    /// `selection` is only read for `generate-component`; see the crate
    /// docs for its shape. Every failure is posted as an `error` message,
    /// never thrown. Resolves to `true` while the session stays open.
    #[wasm_bindgen(js_name = handleMessage)]
    pub fn handle_message(&self, message: JsValue, selection: JsValue) -> Promise {
        let message: InboundMessage = serde_wasm_bindgen::from_value(message).unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring undecodable message");
            InboundMessage::Unknown
        });
        let scene = (message == InboundMessage::GenerateComponent).then(|| decode_selection(selection));

        let previous = self.tail.borrow().clone();
        let slot = Rc::clone(&self.slot);
        let promise = wasm_bindgen_futures::future_to_promise(async move {
            // Earlier requests always resolve; only their ordering matters.
            let _ = JsFuture::from(previous).await;

            let taken = std::mem::replace(&mut *slot.borrow_mut(), Slot::InFlight);
            let mut session = match taken {
                Slot::Idle(session) => session,
                other => {
                    *slot.borrow_mut() = other;
                    return Ok(JsValue::from_bool(false));
                }
            };

            let state = match scene {
                Some(Err(reason)) => {
                    session.report_fault(reason);
                    session.state()
                }
                Some(Ok((graph, ids))) => {
                    session.host_mut().set_scene(graph, ids);
                    session.handle(message).await
                }
                None => session.handle(message).await,
            };

            let open = state == SessionState::Open;
            *slot.borrow_mut() = if open {
                Slot::Idle(session)
            } else {
                Slot::Closed
            };
            Ok(JsValue::from_bool(open))
        });

        *self.tail.borrow_mut() = promise.clone();
        promise
    }

    /// Whether the session still accepts messages.
    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        !matches!(*self.slot.borrow(), Slot::Closed)
    }
}

fn decode_selection(selection: JsValue) -> Result<(SceneGraph, Vec<NodeId>), String> {
    serde_wasm_bindgen::from_value::<SelectionSnapshot>(selection)
        .map_err(|e| format!("Invalid selection: {}", e))?
        .into_scene()
        .map_err(|e| format!("Invalid selection: {}", e))
}

fn decode_options(options: JsValue) -> Result<ExtractOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(ExtractOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid extract options: {}", e)))
}

/// Classify a node name into a component category.
#[wasm_bindgen(js_name = classifyName)]
pub fn classify_name(name: &str) -> String {
    classify(name).as_str().to_string()
}

/// Normalize a list of paints to a CSS color.
#[wasm_bindgen(js_name = normalizeColor)]
pub fn normalize_color_js(fills: JsValue) -> Result<String, JsError> {
    let fills: Vec<Paint> = serde_wasm_bindgen::from_value(fills)
        .map_err(|e| JsError::new(&format!("Invalid paints: {}", e)))?;
    Ok(normalize_color(&fills))
}

/// Darken an `rgba(...)` color by `factor`.
#[wasm_bindgen(js_name = darkenColor)]
pub fn darken_color(color: &str, factor: f64) -> String {
    darken(color, factor)
}

/// Extract a component description from a serialized selection, without a
/// session.
#[wasm_bindgen(js_name = extractComponent)]
pub fn extract_component(selection: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let snapshot: SelectionSnapshot = serde_wasm_bindgen::from_value(selection)
        .map_err(|e| JsError::new(&format!("Invalid selection: {}", e)))?;
    let (scene, ids) = snapshot
        .into_scene()
        .map_err(|e| JsError::new(&format!("Invalid selection: {}", e)))?;

    let description = Extractor::with_options(decode_options(options)?)
        .extract_selection(&scene, &ids)
        .map_err(|e| JsError::new(&e.to_string()))?;

    to_js(&description).map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Get the library version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
