#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use common::helpers::{card_with_responses, sent_commands};
use mifare_pcsc::{Error, ErrorKind, KeyType};

#[test]
fn load_key_into_non_volatile_slot() {
    let (mock, mut card) = card_with_responses(vec![fixtures::sw_ok()]);
    card.load_auth_key(0x20, fixtures::sample_key_a().as_bytes())
        .unwrap();
    assert_eq!(
        sent_commands(&mock)[0],
        hex::decode("ff82202006a0a1a2a3a4a5").unwrap()
    );
}

#[test]
fn load_key_validation() {
    let (mock, mut card) = card_with_responses(vec![]);

    assert!(matches!(
        card.load_auth_key(0x21, &[0xFF; 6]),
        Err(Error::OutOfRange { .. })
    ));
    assert!(matches!(
        card.load_auth_key(0x00, &[0xFF; 5]),
        Err(Error::InvalidLength {
            expected: 6,
            actual: 5
        })
    ));
    assert!(mock.lock().unwrap().sent.is_empty());
}

#[test]
fn load_key_reader_rejection() {
    let (_mock, mut card) = card_with_responses(vec![fixtures::sw(0x69, 0x86)]);
    let err = card.load_auth_key(0x00, &[0xFF; 6]).unwrap_err();
    assert!(err.to_string().contains("Volatile memory is not available."));
}

#[test]
fn authenticate_then_read() {
    let (mock, mut card) = card_with_responses(vec![
        fixtures::sw_ok(),
        fixtures::sw_ok(),
        fixtures::block_response(0x00),
    ]);

    card.load_auth_key(0x00, &[0xFF; 6]).unwrap();
    card.authenticate(0x04, KeyType::A, 0x00).unwrap();
    card.read_block(0x04, 0x10).unwrap();

    let sent = sent_commands(&mock);
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[1], hex::decode("ff860000050100046000").unwrap());
}

#[test]
fn authenticate_wrong_key() {
    let (_mock, mut card) = card_with_responses(vec![fixtures::sw(0x69, 0x82)]);
    let err = card.authenticate(0x08, KeyType::B, 0x01).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
    assert_eq!(err.status_word(), Some((0x69, 0x82)));
    assert!(err.to_string().starts_with("General Authenticate: Security status not satisfied."));
}

#[test]
fn authenticate_block_out_of_range() {
    let (mock, mut card) = card_with_responses(vec![]);
    assert!(card.authenticate(0x40, KeyType::A, 0).is_err());
    assert!(card.authenticate(0x00, KeyType::A, 0x21).is_err());
    assert!(mock.lock().unwrap().sent.is_empty());
}
