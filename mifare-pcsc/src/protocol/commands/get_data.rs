// mifare-pcsc/src/protocol/commands/get_data.rs

use crate::constants::{CLA_PSEUDO_APDU, INS_GET_DATA};

/// Encode Get Data (UID): `FF CA 00 00 00`
pub fn encode_get_uid() -> Vec<u8> {
    vec![CLA_PSEUDO_APDU, INS_GET_DATA, 0x00, 0x00, 0x00]
}
