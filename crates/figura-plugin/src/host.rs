//! The host side of a plugin session.

use crate::messages::OutboundMessage;
use figura_core::scene::{NodeId, SceneGraph};
use figura_core::types::FontName;
use figura_core::HostError;

/// Services the design tool provides to a session.
///
/// The scene graph and selection are read-only from the session's point of
/// view. Font loading is the only asynchronous call.
#[allow(async_fn_in_trait)]
pub trait Host {
    /// The live node graph.
    fn scene(&self) -> &SceneGraph;

    /// Currently selected nodes, in host order.
    fn selection(&self) -> &[NodeId];

    /// Resolve the given fonts so text properties can be read.
    async fn load_fonts(&mut self, fonts: &[FontName]) -> Result<(), HostError>;

    /// Deliver a message to the UI.
    fn post_message(&mut self, message: OutboundMessage);

    /// Tear down the host session.
    fn close(&mut self);
}
