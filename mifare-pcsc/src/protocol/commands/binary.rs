// mifare-pcsc/src/protocol/commands/binary.rs

use crate::constants::{CLA_PSEUDO_APDU, INS_READ_BINARY, INS_UPDATE_BINARY};
use crate::types::{BlockData, BlockLength, BlockNumber};

/// Encode Read Binary: `FF B0 00 <block> <Le>`
pub fn encode_read(block: BlockNumber, len: BlockLength) -> Vec<u8> {
    vec![
        CLA_PSEUDO_APDU,
        INS_READ_BINARY,
        0x00,
        block.as_u8(),
        len.as_u8(),
    ]
}

/// Encode Update Binary: `FF D6 00 <block> <Lc> <data>`
pub fn encode_update(block: BlockNumber, data: &BlockData) -> Vec<u8> {
    let len = data.length();
    let mut buf = Vec::with_capacity(5 + len.as_usize());
    buf.extend_from_slice(&[
        CLA_PSEUDO_APDU,
        INS_UPDATE_BINARY,
        0x00,
        block.as_u8(),
        len.as_u8(),
    ]);
    buf.extend_from_slice(data.as_bytes());
    buf
}
