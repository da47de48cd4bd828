// mifare-pcsc/src/card/operations/write.rs

use crate::card::Card;
use crate::constants::MAX_BLOCK;
use crate::protocol::Command;
use crate::trailer::{pack_trailer, SectorTrailer};
use crate::types::{BlockData, BlockNumber, BlockPair};
use crate::{Error, Result};

/// Write one to three data blocks starting at `block`.
///
/// The written range must stay within `0x00..=0x3F` and must not cover a
/// sector trailer; trailers go through [`write_trailer`].
pub fn update_block(card: &mut Card, block: u8, data: &[u8]) -> Result<()> {
    let block = BlockNumber::new(block)?;
    let data = BlockData::new(data)?;
    check_data_span(block, &data)?;
    card.execute(&Command::UpdateBlock { block, data })?;
    Ok(())
}

/// Every block touched by the write must exist and hold plain data.
fn check_data_span(first: BlockNumber, data: &BlockData) -> Result<()> {
    let start = first.as_u8() as usize;
    let last = start + data.length().blocks() as usize - 1;
    if last > MAX_BLOCK as usize {
        return Err(Error::out_of_range("last block", last, MAX_BLOCK as usize));
    }
    for b in start..=last {
        let b = BlockNumber::new(b as u8)?;
        if b.is_trailer() {
            return Err(Error::TrailerBlock(b.as_u8()));
        }
    }
    Ok(())
}

/// Copy a value block onto another block of the same sector.
pub fn restore_block(card: &mut Card, src: u8, dest: u8) -> Result<()> {
    let pair = BlockPair::new(src, dest)?;
    card.execute(&Command::RestoreBlock { pair })?;
    Ok(())
}

/// Pack `trailer` and write it to the last block of `sector`.
pub fn write_trailer(card: &mut Card, sector: u8, trailer: &SectorTrailer) -> Result<()> {
    let block = BlockNumber::trailer_of(sector)?;
    let data = BlockData::new(&pack_trailer(trailer)?)?;
    card.execute(&Command::UpdateBlock { block, data })?;
    Ok(())
}
