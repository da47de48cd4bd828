// fixtures.rs: canned reader responses and card contents

use mifare_pcsc::trailer::AccessConditions;
use mifare_pcsc::{Key, SectorTrailer};

pub fn sample_uid_bytes() -> [u8; 4] {
    [0x04, 0xA1, 0xB2, 0xC3]
}

pub fn sample_key_a() -> Key {
    Key::from_bytes([0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5])
}

pub fn sample_key_b() -> Key {
    Key::from_bytes([0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5])
}

/// Trailer of a factory-fresh card: default keys, `FF 07 80 69`.
pub fn transport_trailer() -> SectorTrailer {
    SectorTrailer::new(Key::DEFAULT, AccessConditions::TRANSPORT, Key::DEFAULT)
}

pub fn sw(sw1: u8, sw2: u8) -> Vec<u8> {
    vec![sw1, sw2]
}

pub fn sw_ok() -> Vec<u8> {
    sw(0x90, 0x00)
}

/// `data` followed by `90 00`.
pub fn data_ok(data: &[u8]) -> Vec<u8> {
    let mut resp = data.to_vec();
    resp.extend_from_slice(&[0x90, 0x00]);
    resp
}

pub fn uid_response() -> Vec<u8> {
    data_ok(&sample_uid_bytes())
}

/// One 16-byte block filled with `fill`, plus `90 00`.
pub fn block_response(fill: u8) -> Vec<u8> {
    data_ok(&[fill; 16])
}
