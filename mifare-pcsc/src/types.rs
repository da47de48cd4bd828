// mifare-pcsc/src/types.rs

use std::convert::TryFrom;

use derive_more::Display;

use crate::constants::{
    BLOCK_LEN, BLOCK_LENGTHS, BLOCKS_PER_SECTOR, KEY_LEN, MAX_BLOCK, MAX_KEY_SLOT, NON_VOLATILE_KEY_SLOT,
    SECTOR_COUNT,
};
use crate::{Error, Result};

/// UID - Get Data が返すバイト列 (4 or 7 バイト)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    /// Copy the bytes the card returned before `90 00`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// Raw UID bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of UID bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the UID has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex, e.g. `"04a1b2c3"`.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

/// Key - Newtype Pattern (6 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// Factory default transport key.
    pub const DEFAULT: Self = Self([0xFF; KEY_LEN]);

    /// Wrap six key bytes.
    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> std::result::Result<Self, Self::Error> {
        let arr: [u8; KEY_LEN] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: KEY_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// Key type byte used by General Authenticate
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    /// Key A (`0x60`)
    #[display(fmt = "key A")]
    A = 0x60,
    /// Key B (`0x61`)
    #[display(fmt = "key B")]
    B = 0x61,
}

impl KeyType {
    /// Byte sent in the General Authenticate data object.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Communication protocol negotiated when the card was connected.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Protocol {
    /// T=0, byte oriented
    T0,
    /// T=1, block oriented
    #[default]
    T1,
    /// Raw reader access
    Raw,
}

/// Reader key slot (0x00..=0x20)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySlot(u8);

impl KeySlot {
    /// The reader's non-volatile key store.
    pub const NON_VOLATILE: Self = Self(NON_VOLATILE_KEY_SLOT);

    /// Validate `slot` against `0x00..=0x20`.
    pub fn new(slot: u8) -> Result<Self> {
        if slot > MAX_KEY_SLOT {
            return Err(Error::out_of_range(
                "key slot",
                slot as usize,
                MAX_KEY_SLOT as usize,
            ));
        }
        Ok(Self(slot))
    }

    /// Slot number as sent on the wire.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Whether this is slot 0x20.
    pub fn is_non_volatile(&self) -> bool {
        self.0 == NON_VOLATILE_KEY_SLOT
    }

    /// Load Keys P1: key structure byte
    pub fn structure(&self) -> u8 {
        if self.is_non_volatile() {
            NON_VOLATILE_KEY_SLOT
        } else {
            0x00
        }
    }
}

/// Block address on a MIFARE Classic 1K card (0x00..=0x3F)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockNumber(u8);

impl BlockNumber {
    /// Validate `block` against `0x00..=0x3F`.
    pub fn new(block: u8) -> Result<Self> {
        Self::checked("block", block)
    }

    fn checked(what: &'static str, block: u8) -> Result<Self> {
        if block > MAX_BLOCK {
            return Err(Error::out_of_range(what, block as usize, MAX_BLOCK as usize));
        }
        Ok(Self(block))
    }

    /// Trailer block of `sector` (the last block of its 4-block group).
    pub fn trailer_of(sector: u8) -> Result<Self> {
        if sector >= SECTOR_COUNT {
            return Err(Error::out_of_range(
                "sector",
                sector as usize,
                (SECTOR_COUNT - 1) as usize,
            ));
        }
        Ok(Self(sector * BLOCKS_PER_SECTOR + (BLOCKS_PER_SECTOR - 1)))
    }

    /// Block address as sent on the wire.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Sector holding this block.
    pub fn sector(&self) -> u8 {
        self.0 / BLOCKS_PER_SECTOR
    }

    /// Whether this is the last block of its sector.
    pub fn is_trailer(&self) -> bool {
        self.0 % BLOCKS_PER_SECTOR == BLOCKS_PER_SECTOR - 1
    }
}

/// Validated source/destination pair for Restore Block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPair {
    /// Value block copied from
    pub src: BlockNumber,
    /// Block overwritten
    pub dest: BlockNumber,
}

impl BlockPair {
    /// Both blocks must exist and share a sector.
    pub fn new(src: u8, dest: u8) -> Result<Self> {
        let src = BlockNumber::checked("source block", src)?;
        let dest = BlockNumber::checked("destination block", dest)?;
        if src.sector() != dest.sector() {
            return Err(Error::DifferentSectors {
                src: src.as_u8(),
                dest: dest.as_u8(),
            });
        }
        Ok(Self { src, dest })
    }
}

/// Number of bytes moved by Read/Update Binary (one to three blocks).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLength(u8);

impl BlockLength {
    /// Accept 0x10, 0x20 or 0x30.
    pub fn new(len: usize) -> Result<Self> {
        if !BLOCK_LENGTHS.contains(&len) {
            return Err(Error::InvalidBlockLength(len));
        }
        Ok(Self(len as u8))
    }

    /// Le / Lc byte.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Length in bytes.
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// Number of 16-byte blocks covered.
    pub fn blocks(&self) -> u8 {
        self.0 / BLOCK_LEN as u8
    }
}

/// Update Binary payload: one, two or three whole blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockData {
    len: BlockLength,
    bytes: Vec<u8>,
}

impl BlockData {
    /// Copy `data`, rejecting anything but 0x10, 0x20 or 0x30 bytes.
    pub fn new(data: &[u8]) -> Result<Self> {
        let len = BlockLength::new(data.len())?;
        Ok(Self {
            len,
            bytes: data.to_vec(),
        })
    }

    /// Validated length, used as Lc.
    pub fn length(&self) -> BlockLength {
        self.len
    }

    /// Payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> std::result::Result<Self, Self::Error> {
        Self::new(bytes)
    }
}
