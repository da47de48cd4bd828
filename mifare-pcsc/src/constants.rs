// mifare-pcsc/src/constants.rs
//! Protocol constants for the PC/SC pseudo-APDU set and the MIFARE Classic 1K layout

/// Class byte shared by every PC/SC reader pseudo-APDU
pub const CLA_PSEUDO_APDU: u8 = 0xFF;

/// Get Data (UID)
pub const INS_GET_DATA: u8 = 0xCA;
/// Load Keys
pub const INS_LOAD_KEYS: u8 = 0x82;
/// General Authenticate
pub const INS_GENERAL_AUTHENTICATE: u8 = 0x86;
/// Read Binary
pub const INS_READ_BINARY: u8 = 0xB0;
/// Update Binary
pub const INS_UPDATE_BINARY: u8 = 0xD6;
/// Restore Block
pub const INS_RESTORE_BLOCK: u8 = 0xD7;

/// Status word reported on success: 0x90 0x00
pub const SW_SUCCESS: (u8, u8) = (0x90, 0x00);

/// Length of the trailing status word in every response
pub const STATUS_WORD_LEN: usize = 2;

/// Get Data (UID) expected response: 4 UID bytes + status word
pub const GET_UID_RESPONSE_LEN: usize = 6;

/// Shortest UID a MIFARE Classic card reports
pub const MIN_UID_LEN: usize = 4;

/// Key slot addressing the reader's non-volatile key store
pub const NON_VOLATILE_KEY_SLOT: u8 = 0x20;

/// Highest valid key slot
pub const MAX_KEY_SLOT: u8 = 0x20;

/// MIFARE key length in bytes
pub const KEY_LEN: usize = 6;

/// Highest block address on a MIFARE Classic 1K card
pub const MAX_BLOCK: u8 = 0x3F;

/// Blocks per sector on a MIFARE Classic 1K card
pub const BLOCKS_PER_SECTOR: u8 = 4;

/// Number of sectors on a MIFARE Classic 1K card
pub const SECTOR_COUNT: u8 = 16;

/// Size of one data block
pub const BLOCK_LEN: usize = 0x10;

/// Read/Update Binary accepts one, two or three blocks at once
pub const BLOCK_LENGTHS: [usize; 3] = [0x10, 0x20, 0x30];

/// Packed access-condition bytes including the trailing constant
pub const ACS_LEN: usize = 4;

/// Fourth byte of the access-condition field as written by this crate
pub const ACS_TRAILING_BYTE: u8 = 0x69;

/// Sector trailer: key A (6) + access conditions (4) + key B (6)
pub const TRAILER_LEN: usize = KEY_LEN + ACS_LEN + KEY_LEN;

/// General Authenticate data object version byte
pub const AUTH_VERSION: u8 = 0x01;

/// Restore Block (value block copy) Lc
pub const RESTORE_LC: u8 = 0x02;
/// Restore Block value-block operation byte
pub const RESTORE_VB_OP: u8 = 0x03;
