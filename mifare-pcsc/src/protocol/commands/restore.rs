// mifare-pcsc/src/protocol/commands/restore.rs

use crate::constants::{CLA_PSEUDO_APDU, INS_RESTORE_BLOCK, RESTORE_LC, RESTORE_VB_OP};
use crate::types::BlockPair;

/// Encode Restore Block: `FF D7 00 <src> 02 03 <dest>`
pub fn encode_restore(pair: BlockPair) -> Vec<u8> {
    vec![
        CLA_PSEUDO_APDU,
        INS_RESTORE_BLOCK,
        0x00,
        pair.src.as_u8(),
        RESTORE_LC,
        RESTORE_VB_OP,
        pair.dest.as_u8(),
    ]
}
