// mifare-pcsc/src/card/builder.rs

use crate::card::Card;
use crate::transport::Transport;
use crate::types::Protocol;
use crate::{Error, Result};

/// Helper to construct a `Card` session once the reader has connected.
#[derive(Default)]
pub struct CardBuilder {
    transport: Option<Box<dyn Transport>>,
    protocol: Protocol,
}

impl CardBuilder {
    /// Empty builder; a transport is required before `build`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Protocol negotiated at connect time. Defaults to T=1.
    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Requires a transport to be provided; otherwise returns NotConnected.
    pub fn build(self) -> Result<Card> {
        match self.transport {
            Some(t) => Ok(Card::new(t, self.protocol)),
            None => Err(Error::NotConnected),
        }
    }
}
