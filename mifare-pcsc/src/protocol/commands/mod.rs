// mifare-pcsc/src/protocol/commands/mod.rs

/// General Authenticate
pub mod authenticate;
/// Read / Update Binary
pub mod binary;
/// Get Data
pub mod get_data;
/// Load Keys
pub mod load_keys;
/// Restore Block
pub mod restore;

pub use authenticate::encode_authenticate;
pub use binary::{encode_read, encode_update};
pub use get_data::encode_get_uid;
pub use load_keys::encode_load_key;
pub use restore::encode_restore;

use crate::constants::{
    GET_UID_RESPONSE_LEN, INS_GENERAL_AUTHENTICATE, INS_GET_DATA, INS_LOAD_KEYS,
    INS_READ_BINARY, INS_RESTORE_BLOCK, INS_UPDATE_BINARY, STATUS_WORD_LEN,
};
use crate::protocol::status::OperationKind;
use crate::types::{BlockData, BlockLength, BlockNumber, BlockPair, Key, KeySlot, KeyType};

/// Whether a successful response carries data the caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Data before `90 00` is the result.
    Read,
    /// Only the status word matters.
    Void,
}

/// High-level Command enum. Arguments are already validated; the
/// per-command encoders live in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Command {
    /// Get Data, UID of the card in the field
    GetUid,
    /// Load Keys into a reader key slot
    LoadAuthKey { slot: KeySlot, key: Key },
    /// General Authenticate for the sector of `block`
    Authenticate {
        block: BlockNumber,
        key_type: KeyType,
        slot: KeySlot,
    },
    /// Read Binary
    ReadBlock { block: BlockNumber, len: BlockLength },
    /// Update Binary
    UpdateBlock { block: BlockNumber, data: BlockData },
    /// Restore (value block copy)
    RestoreBlock { pair: BlockPair },
}

impl Command {
    /// Instruction byte (INS).
    pub fn instruction(&self) -> u8 {
        match self {
            Self::GetUid => INS_GET_DATA,
            Self::LoadAuthKey { .. } => INS_LOAD_KEYS,
            Self::Authenticate { .. } => INS_GENERAL_AUTHENTICATE,
            Self::ReadBlock { .. } => INS_READ_BINARY,
            Self::UpdateBlock { .. } => INS_UPDATE_BINARY,
            Self::RestoreBlock { .. } => INS_RESTORE_BLOCK,
        }
    }

    /// Response length the transport should expect, status word included.
    pub fn expected_len(&self) -> usize {
        match self {
            Self::GetUid => GET_UID_RESPONSE_LEN,
            Self::ReadBlock { len, .. } => len.as_usize() + STATUS_WORD_LEN,
            _ => STATUS_WORD_LEN,
        }
    }

    /// Error table used when the card rejects this command.
    pub fn operation(&self) -> OperationKind {
        match self {
            Self::GetUid => OperationKind::GetData,
            Self::LoadAuthKey { .. } => OperationKind::LoadKeys,
            Self::Authenticate { .. } => OperationKind::GeneralAuthenticate,
            Self::ReadBlock { .. } => OperationKind::ReadBinary,
            Self::UpdateBlock { .. } | Self::RestoreBlock { .. } => OperationKind::Common,
        }
    }

    /// Whether the success payload is kept.
    pub fn response_mode(&self) -> ResponseMode {
        match self {
            Self::GetUid | Self::ReadBlock { .. } => ResponseMode::Read,
            _ => ResponseMode::Void,
        }
    }

    /// Encode the command into the raw APDU bytes.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetUid => encode_get_uid(),
            Self::LoadAuthKey { slot, key } => encode_load_key(*slot, *key),
            Self::Authenticate {
                block,
                key_type,
                slot,
            } => encode_authenticate(*block, *key_type, *slot),
            Self::ReadBlock { block, len } => encode_read(*block, *len),
            Self::UpdateBlock { block, data } => encode_update(*block, data),
            Self::RestoreBlock { pair } => encode_restore(*pair),
        }
    }
}
