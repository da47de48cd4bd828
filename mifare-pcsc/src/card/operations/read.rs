// mifare-pcsc/src/card/operations/read.rs

use crate::card::Card;
use crate::constants::TRAILER_LEN;
use crate::protocol::Command;
use crate::trailer::{unpack_trailer, SectorTrailer};
use crate::types::{BlockLength, BlockNumber};
use crate::Result;

/// Read `len` bytes (one to three blocks) starting at `block`.
pub fn read_block(card: &mut Card, block: u8, len: usize) -> Result<Vec<u8>> {
    let block = BlockNumber::new(block)?;
    let len = BlockLength::new(len)?;
    Ok(card.execute(&Command::ReadBlock { block, len })?.into_data())
}

/// Read and decode the trailer block of `sector`.
///
/// Most cards mask key A (and key B when it is not readable) with zeros.
pub fn read_trailer(card: &mut Card, sector: u8) -> Result<SectorTrailer> {
    let block = BlockNumber::trailer_of(sector)?;
    let data = read_block(card, block.as_u8(), TRAILER_LEN)?;
    unpack_trailer(&data)
}
