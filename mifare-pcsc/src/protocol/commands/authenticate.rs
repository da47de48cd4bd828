// mifare-pcsc/src/protocol/commands/authenticate.rs

use crate::constants::{AUTH_VERSION, CLA_PSEUDO_APDU, INS_GENERAL_AUTHENTICATE};
use crate::types::{BlockNumber, KeySlot, KeyType};

/// Encode General Authenticate:
/// `FF 86 00 00 05 | 01 00 <block> <key type> <slot>`
pub fn encode_authenticate(block: BlockNumber, key_type: KeyType, slot: KeySlot) -> Vec<u8> {
    vec![
        CLA_PSEUDO_APDU,
        INS_GENERAL_AUTHENTICATE,
        0x00,
        0x00,
        0x05, // Lc: authenticate data bytes
        AUTH_VERSION,
        0x00, // block MSB, always 0 on a 1K card
        block.as_u8(),
        key_type.as_u8(),
        slot.as_u8(),
    ]
}
