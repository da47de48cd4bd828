#![cfg(feature = "pcsc")]

#[path = "common.rs"]
mod common;

use mifare_pcsc::{KeyType, Result};

// Needs a reader with a blank MIFARE Classic 1K card on it. Marked
// `#[ignore]` so CI does not try. Run manually with:
//
// cargo test -p mifare-pcsc --test hardware --features pcsc -- --ignored
//

#[test]
#[ignore]
fn read_uid_from_first_reader() -> Result<()> {
    if let Some(mut card) = common::connect_first_card()? {
        let uid = card.get_uid()?;
        assert!(!uid.is_empty());
    }
    Ok(())
}

#[test]
#[ignore]
fn read_block_zero_with_default_key() -> Result<()> {
    if let Some(mut card) = common::connect_first_card()? {
        card.load_auth_key(0x00, &[0xFF; 6])?;
        card.authenticate(0x00, KeyType::A, 0x00)?;
        let data = card.read_block(0x00, 0x10)?;
        assert_eq!(data.len(), 16);
    }
    Ok(())
}
