//! Core types for the figura component extractor.
//!
//! This crate provides the types shared by every other figura crate:
//! - the host node model (scene graph arena, node kinds, paints, effects)
//! - the component description produced by extraction
//! - JSON snapshots of a host selection
//! - error types

pub mod errors;
pub mod model;
pub mod scene;
pub mod snapshot;
pub mod types;

pub use errors::*;
pub use model::*;
pub use scene::*;
pub use snapshot::{NodeSnapshot, NodeType, SelectionSnapshot};
pub use types::*;
