// mifare-pcsc/src/card/mod.rs

use crate::protocol::{Command, Response};
use crate::trailer::SectorTrailer;
use crate::transport::Transport;
use crate::types::{KeyType, Protocol, Uid};
use crate::utils::bytes_to_hex_spaced;
use crate::Result;

/// Session construction
pub mod builder;
/// Per-command session operations
pub mod operations;

pub use builder::CardBuilder;
pub use operations::{BlockRead, DumpIterator, DumpPlan};

/// Session with one connected MIFARE Classic card.
///
/// Holds the transport and the protocol negotiated at connect time, nothing
/// else: every read goes to the card. Authenticate before reading or
/// writing a sector; the session does not track it and the card answers
/// `69 82` otherwise.
///
/// `Card` is `Send`: a session can be moved to a worker thread, one per
/// reader. It is not shared; every operation takes `&mut self`.
pub struct Card {
    transport: Box<dyn Transport>,
    protocol: Protocol,
}

impl Card {
    /// Wrap a connected transport.
    pub fn new(transport: Box<dyn Transport>, protocol: Protocol) -> Self {
        Self {
            transport,
            protocol,
        }
    }

    /// Protocol negotiated at connect time.
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Send one command and classify the reply.
    pub fn execute(&mut self, cmd: &Command) -> Result<Response> {
        let apdu = cmd.encode();
        log::debug!(
            "{} >> {} ({})",
            self.transport.name(),
            bytes_to_hex_spaced(&apdu),
            cmd.operation()
        );
        let raw = self
            .transport
            .transmit(&apdu, cmd.expected_len(), self.protocol)?;
        log::debug!("{} << {}", self.transport.name(), bytes_to_hex_spaced(&raw));
        Response::decode(cmd, &raw)
    }

    /// UID of the card in the field.
    pub fn get_uid(&mut self) -> Result<Uid> {
        operations::get_uid(self)
    }

    /// Load a 6-byte key into reader slot `slot` (0x20 = non-volatile).
    pub fn load_auth_key(&mut self, slot: u8, key: &[u8]) -> Result<()> {
        operations::load_auth_key(self, slot, key)
    }

    /// Authenticate the sector holding `block` with the key in `slot`.
    pub fn authenticate(&mut self, block: u8, key_type: KeyType, slot: u8) -> Result<()> {
        operations::authenticate(self, block, key_type, slot)
    }

    /// Read 0x10, 0x20 or 0x30 bytes starting at `block`.
    pub fn read_block(&mut self, block: u8, len: usize) -> Result<Vec<u8>> {
        operations::read_block(self, block, len)
    }

    /// Write 0x10, 0x20 or 0x30 bytes starting at `block`.
    ///
    /// Refuses writes that cover a sector trailer or run past block 0x3F;
    /// use [`Card::write_trailer`] for trailers.
    pub fn update_block(&mut self, block: u8, data: &[u8]) -> Result<()> {
        operations::update_block(self, block, data)
    }

    /// Copy value block `src` onto `dest` within one sector.
    pub fn restore_block(&mut self, src: u8, dest: u8) -> Result<()> {
        operations::restore_block(self, src, dest)
    }

    /// Read and decode the trailer of `sector`.
    pub fn read_trailer(&mut self, sector: u8) -> Result<SectorTrailer> {
        operations::read_trailer(self, sector)
    }

    /// Pack `trailer` and write it to the last block of `sector`.
    pub fn write_trailer(&mut self, sector: u8, trailer: &SectorTrailer) -> Result<()> {
        operations::write_trailer(self, sector, trailer)
    }

    /// Iterate over the blocks of `plan`, authenticating and reading each.
    pub fn dump<'a>(&'a mut self, plan: &'a DumpPlan) -> DumpIterator<'a> {
        DumpIterator::new(self, plan)
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Card")
            .field("transport", &self.transport.name())
            .field("protocol", &self.protocol)
            .finish()
    }
}
