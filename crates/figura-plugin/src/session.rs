//! Plugin session: dispatches UI messages to the extractor.

use crate::host::Host;
use crate::messages::{InboundMessage, OutboundMessage};
use figura_core::model::ComponentDescription;
use figura_core::{ExtractError, Result};
use figura_extract::{ExtractOptions, Extractor};

/// Whether a session still accepts messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Closed,
}

/// One plugin run, from launch until the UI asks to close.
///
/// Owns the host handle. Each `generate-component` request is validated
/// and fully extracted before the next message is handled, and exactly one
/// reply is posted per request.
#[derive(Debug)]
pub struct Session<H: Host> {
    host: H,
    extractor: Extractor,
    state: SessionState,
}

impl<H: Host> Session<H> {
    pub fn new(host: H) -> Self {
        Self::with_options(host, ExtractOptions::default())
    }

    pub fn with_options(host: H, options: ExtractOptions) -> Self {
        Self {
            host,
            extractor: Extractor::with_options(options),
            state: SessionState::Open,
        }
    }

    /// Handle one inbound message and return the resulting session state.
    ///
    /// Messages that arrive after the session closed are dropped.
    pub async fn handle(&mut self, message: InboundMessage) -> SessionState {
        if self.state == SessionState::Closed {
            tracing::debug!(?message, "session closed; dropping message");
            return self.state;
        }

        match message {
            InboundMessage::GenerateComponent => {
                let reply = match self.generate().await {
                    Ok(description) => OutboundMessage::component_data(description),
                    Err(err) => {
                        tracing::warn!(%err, "component extraction failed");
                        OutboundMessage::error(err.to_string())
                    }
                };
                self.host.post_message(reply);
            }
            InboundMessage::ClosePlugin => {
                tracing::debug!("closing session");
                self.host.close();
                self.state = SessionState::Closed;
            }
            InboundMessage::Unknown => {
                tracing::debug!("ignoring unrecognized message");
            }
        }

        self.state
    }

    /// Decode a JSON message and handle it.
    pub async fn handle_json(&mut self, json: &str) -> SessionState {
        self.handle(InboundMessage::from_json(json)).await
    }

    /// Report a request that failed before extraction could start, such as
    /// a selection that could not be decoded. Posts one error reply while
    /// the session is open.
    pub fn report_fault(&mut self, message: impl Into<String>) {
        if self.state == SessionState::Closed {
            tracing::debug!("session closed; dropping fault");
            return;
        }
        let err = ExtractError::fault(message);
        tracing::warn!(%err, "request failed before extraction");
        self.host.post_message(OutboundMessage::error(err.to_string()));
    }

    async fn generate(&mut self) -> Result<ComponentDescription> {
        tracing::debug!(selected = self.host.selection().len(), "generate-component requested");
        let id = self
            .extractor
            .validate(self.host.scene(), self.host.selection())?;

        let fonts = self.extractor.required_fonts(self.host.scene(), id);
        if !fonts.is_empty() {
            tracing::debug!(count = fonts.len(), "loading fonts");
            self.host.load_fonts(&fonts).await?;
        }

        self.extractor.extract(self.host.scene(), id)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}
