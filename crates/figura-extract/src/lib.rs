//! Component extraction for design-tool nodes.
//!
//! Turns one selected component (or instance) into a normalized
//! [`ComponentDescription`](figura_core::ComponentDescription): base style,
//! interaction state styles, variant membership, and a typed property
//! schema.
//!
//! # Example
//!
//! ```ignore
//! use figura_extract::Extractor;
//!
//! let (graph, selection) = snapshot.into_scene()?;
//! let description = Extractor::new().extract_selection(&graph, &selection)?;
//! println!("{}", serde_json::to_string_pretty(&description)?);
//! ```

pub mod classify;
pub mod extractor;
pub mod normalize;
pub mod options;
pub mod properties;
pub mod states;
pub mod style;
pub mod variants;

pub use classify::classify;
pub use extractor::Extractor;
pub use normalize::{darken, normalize_color, normalize_effects};
pub use options::ExtractOptions;
pub use properties::build_properties;
pub use states::{resolve_states, state_for_variant, HOVER_DARKEN_FACTOR};
pub use style::extract_style;
pub use variants::collect_variants;
