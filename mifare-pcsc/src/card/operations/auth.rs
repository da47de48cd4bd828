// mifare-pcsc/src/card/operations/auth.rs

use std::convert::TryFrom;

use crate::card::Card;
use crate::protocol::Command;
use crate::types::{BlockNumber, Key, KeySlot, KeyType};
use crate::Result;

/// Load a key into a reader key slot. Slot 0x20 is the non-volatile store.
pub fn load_auth_key(card: &mut Card, slot: u8, key: &[u8]) -> Result<()> {
    let slot = KeySlot::new(slot)?;
    let key = Key::try_from(key)?;
    card.execute(&Command::LoadAuthKey { slot, key })?;
    Ok(())
}

/// Authenticate the sector containing `block` with the key in `slot`.
pub fn authenticate(card: &mut Card, block: u8, key_type: KeyType, slot: u8) -> Result<()> {
    let block = BlockNumber::new(block)?;
    let slot = KeySlot::new(slot)?;
    card.execute(&Command::Authenticate {
        block,
        key_type,
        slot,
    })?;
    Ok(())
}
