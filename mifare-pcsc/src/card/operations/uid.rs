// mifare-pcsc/src/card/operations/uid.rs

use crate::card::Card;
use crate::protocol::Command;
use crate::types::Uid;
use crate::Result;

/// Read the card UID with Get Data.
pub fn get_uid(card: &mut Card) -> Result<Uid> {
    let data = card.execute(&Command::GetUid)?.into_data();
    Ok(Uid::from_bytes(&data))
}
