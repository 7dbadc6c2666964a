//! Error types for figura.

use crate::scene::NodeId;
use thiserror::Error;

/// Message used when an extraction fault carries no message of its own.
pub const GENERIC_FAULT_MESSAGE: &str = "Failed to extract component data";

/// Result type alias for extraction.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that end a single extraction request.
///
/// The display strings are the user-facing messages posted back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("Please select a component to convert")]
    EmptySelection,

    #[error("Please select only one component at a time")]
    MultipleSelection { count: usize },

    #[error("Selected node must be a component or component instance")]
    UnsupportedNodeKind { kind: &'static str },

    #[error("{0}")]
    ExtractionFault(String),
}

impl ExtractError {
    /// Build an extraction fault, falling back to the generic message when
    /// `message` is blank.
    pub fn fault(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::ExtractionFault(GENERIC_FAULT_MESSAGE.to_string())
        } else {
            Self::ExtractionFault(message)
        }
    }
}

impl From<HostError> for ExtractError {
    fn from(err: HostError) -> Self {
        Self::fault(err.to_string())
    }
}

impl From<SceneError> for ExtractError {
    fn from(err: SceneError) -> Self {
        Self::fault(err.to_string())
    }
}

/// Errors reported by the host while serving a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("Failed to load font \"{family}\": {reason}")]
    FontLoad { family: String, reason: String },

    #[error("{0}")]
    Other(String),
}

/// Errors from scene graph lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("Node {0:?} is not part of the scene")]
    UnknownNode(NodeId),
}

/// Errors while decoding a selection snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate node id in snapshot: {0}")]
    DuplicateId(String),

    #[error("Selected node id not found in snapshot: {0}")]
    UnknownSelection(String),
}
