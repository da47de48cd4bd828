use mifare_pcsc::protocol::Command;
use mifare_pcsc::types::{BlockData, BlockLength, BlockNumber, BlockPair, KeySlot};
use mifare_pcsc::{Key, KeyType};

fn apdu(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).unwrap()
}

#[test]
fn get_uid_apdu() {
    assert_eq!(Command::GetUid.encode(), apdu("ff ca 00 00 00"));
    assert_eq!(Command::GetUid.expected_len(), 6);
}

#[test]
fn load_key_volatile_and_non_volatile() {
    let volatile = Command::LoadAuthKey {
        slot: KeySlot::new(0x01).unwrap(),
        key: Key::DEFAULT,
    };
    assert_eq!(volatile.encode(), apdu("ff 82 00 01 06 ffffffffffff"));

    let stored = Command::LoadAuthKey {
        slot: KeySlot::NON_VOLATILE,
        key: Key::from_bytes([0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5]),
    };
    assert_eq!(stored.encode(), apdu("ff 82 20 20 06 a0a1a2a3a4a5"));
    assert_eq!(stored.expected_len(), 2);
}

#[test]
fn authenticate_apdu_with_key_b() {
    let cmd = Command::Authenticate {
        block: BlockNumber::new(0x07).unwrap(),
        key_type: KeyType::B,
        slot: KeySlot::new(0x00).unwrap(),
    };
    assert_eq!(cmd.encode(), apdu("ff 86 00 00 05 01 00 07 61 00"));
}

#[test]
fn read_three_blocks() {
    let cmd = Command::ReadBlock {
        block: BlockNumber::new(0x04).unwrap(),
        len: BlockLength::new(0x30).unwrap(),
    };
    assert_eq!(cmd.encode(), apdu("ff b0 00 04 30"));
    assert_eq!(cmd.expected_len(), 0x32);
}

#[test]
fn update_carries_payload() {
    let data: Vec<u8> = (0u8..16).collect();
    let cmd = Command::UpdateBlock {
        block: BlockNumber::new(0x01).unwrap(),
        data: BlockData::new(&data).unwrap(),
    };
    let encoded = cmd.encode();
    assert_eq!(&encoded[..5], &apdu("ff d6 00 01 10")[..]);
    assert_eq!(&encoded[5..], &data[..]);
}

#[test]
fn update_payload_cannot_exceed_three_blocks() {
    assert!(BlockData::new(&[0xAA; 0x110]).is_err());
    assert!(BlockData::new(&[0xAA; 0x40]).is_err());

    let cmd = Command::UpdateBlock {
        block: BlockNumber::new(0x04).unwrap(),
        data: BlockData::new(&[0xAA; 0x30]).unwrap(),
    };
    let encoded = cmd.encode();
    assert_eq!(encoded[4], 0x30);
    assert_eq!(encoded.len(), 5 + 0x30);
}

#[test]
fn restore_value_block() {
    let cmd = Command::RestoreBlock {
        pair: BlockPair::new(0x04, 0x05).unwrap(),
    };
    assert_eq!(cmd.encode(), apdu("ff d7 00 04 02 03 05"));
}
