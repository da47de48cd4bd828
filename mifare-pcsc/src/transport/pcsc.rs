// mifare-pcsc/src/transport/pcsc.rs

#![cfg(feature = "pcsc")]

use crate::transport::traits::Transport;
use crate::types::Protocol;
use crate::Result;

impl From<::pcsc::Protocol> for Protocol {
    fn from(p: ::pcsc::Protocol) -> Self {
        match p {
            ::pcsc::Protocol::T0 => Protocol::T0,
            ::pcsc::Protocol::T1 => Protocol::T1,
            ::pcsc::Protocol::RAW => Protocol::Raw,
        }
    }
}

/// Transport over an already connected PC/SC card handle. Reader
/// discovery and connect/disconnect stay with the caller; this type only
/// transmits. It is feature-gated behind `--features pcsc`.
pub struct PcscTransport {
    card: ::pcsc::Card,
    reader: String,
}

impl PcscTransport {
    /// Wrap a handle returned by `pcsc::Context::connect`.
    pub fn new(card: ::pcsc::Card, reader: impl Into<String>) -> Self {
        Self {
            card,
            reader: reader.into(),
        }
    }

    /// Protocol the reader negotiated for this card, if reported.
    pub fn active_protocol(&self) -> Result<Option<Protocol>> {
        let status = self.card.status2_owned()?;
        Ok(status.protocol2().map(Protocol::from))
    }
}

impl Transport for PcscTransport {
    fn transmit(
        &mut self,
        command: &[u8],
        expected_len: usize,
        protocol: Protocol,
    ) -> Result<Vec<u8>> {
        // The PC/SC layer sends with the protocol chosen at connect time;
        // the tag only travels along for logging.
        let mut buf = [0u8; ::pcsc::MAX_BUFFER_SIZE];
        let resp = self.card.transmit(command, &mut buf)?;
        if resp.len() != expected_len {
            log::debug!(
                "{} ({}): expected {} response byte(s), got {}",
                self.reader,
                protocol,
                expected_len,
                resp.len()
            );
        }
        Ok(resp.to_vec())
    }

    fn name(&self) -> String {
        self.reader.clone()
    }
}
