// mifare-pcsc/src/protocol/commands/load_keys.rs

use crate::constants::{CLA_PSEUDO_APDU, INS_LOAD_KEYS, KEY_LEN};
use crate::types::{Key, KeySlot};

/// Encode Load Keys: `FF 82 <structure> <slot> 06 <key>`
///
/// The key structure byte is 0x20 only for the non-volatile slot.
pub fn encode_load_key(slot: KeySlot, key: Key) -> Vec<u8> {
    let mut buf = Vec::with_capacity(5 + KEY_LEN);
    buf.extend_from_slice(&[
        CLA_PSEUDO_APDU,
        INS_LOAD_KEYS,
        slot.structure(),
        slot.as_u8(),
        KEY_LEN as u8,
    ]);
    buf.extend_from_slice(key.as_bytes());
    buf
}
