//! Plugin session for the figura component extractor.
//!
//! A [`Session`] owns the [`Host`] handle for one plugin run. It receives
//! UI messages, runs extraction on the current selection, and posts exactly
//! one reply per `generate-component` request:
//!
//! ```ignore
//! use figura_plugin::{Session, SnapshotHost};
//!
//! let host = SnapshotHost::from_json(&snapshot_json)?;
//! let mut session = Session::new(host);
//! pollster::block_on(session.handle_json(r#"{"type":"generate-component"}"#));
//! ```

pub mod host;
pub mod messages;
pub mod session;
pub mod snapshot_host;

pub use host::Host;
pub use messages::{InboundMessage, OutboundMessage};
pub use session::{Session, SessionState};
pub use snapshot_host::SnapshotHost;
