// mifare-pcsc/src/trailer.rs
//! Sector trailer codec.
//!
//! The last block of every sector holds key A, the access bits and key B.
//! The access bits are stored twice, once inverted, interleaved nibble by
//! nibble:
//!
//! ```text
//! byte 6: !C2 | !C1
//! byte 7:  C1 | !C3
//! byte 8:  C3 |  C2
//! byte 9:  0x69
//! ```

use std::convert::TryFrom;

use crate::constants::{ACS_LEN, ACS_TRAILING_BYTE, KEY_LEN, TRAILER_LEN};
use crate::types::Key;
use crate::{Error, Result};

const NIBBLE_MAX: u8 = 0x0F;

/// Access conditions C1/C2/C3, one bit per block of the sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessConditions {
    /// C1 bits, block 0 in the low bit
    pub c1: u8,
    /// C2 bits
    pub c2: u8,
    /// C3 bits
    pub c3: u8,
}

impl AccessConditions {
    /// Transport configuration shipped on blank cards (`FF 07 80 69`).
    pub const TRANSPORT: Self = Self {
        c1: 0x0,
        c2: 0x0,
        c3: 0x8,
    };

    /// Each of `c1`, `c2`, `c3` must fit in a nibble.
    pub fn new(c1: u8, c2: u8, c3: u8) -> Result<Self> {
        check_nibble("c1", c1)?;
        check_nibble("c2", c2)?;
        check_nibble("c3", c3)?;
        Ok(Self { c1, c2, c3 })
    }

    /// See [`pack_acs`].
    pub fn pack(&self) -> Result<[u8; ACS_LEN]> {
        pack_acs(self.c1, self.c2, self.c3)
    }
}

fn check_nibble(what: &'static str, value: u8) -> Result<()> {
    if value > NIBBLE_MAX {
        return Err(Error::out_of_range(
            what,
            value as usize,
            NIBBLE_MAX as usize,
        ));
    }
    Ok(())
}

/// `(hi << 4) | lo`, both truncated to a nibble.
fn byte_from_nibbles(hi: u8, lo: u8) -> u8 {
    ((hi & NIBBLE_MAX) << 4) | (lo & NIBBLE_MAX)
}

/// Pack three access-condition nibbles into the 4-byte on-card layout.
pub fn pack_acs(c1: u8, c2: u8, c3: u8) -> Result<[u8; ACS_LEN]> {
    check_nibble("c1", c1)?;
    check_nibble("c2", c2)?;
    check_nibble("c3", c3)?;
    Ok([
        byte_from_nibbles(!c2, !c1),
        byte_from_nibbles(c1, !c3),
        byte_from_nibbles(c3, c2),
        ACS_TRAILING_BYTE,
    ])
}

/// Recover the nibbles from the non-inverted copies in bytes 1 and 2.
pub fn unpack_acs(data: &[u8]) -> Result<AccessConditions> {
    if data.len() != ACS_LEN {
        return Err(Error::InvalidLength {
            expected: ACS_LEN,
            actual: data.len(),
        });
    }
    Ok(AccessConditions {
        c1: (data[1] >> 4) & NIBBLE_MAX,
        c2: data[2] & NIBBLE_MAX,
        c3: (data[2] >> 4) & NIBBLE_MAX,
    })
}

/// SectorTrailer (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectorTrailer {
    /// Key A (usually read back as zeros)
    pub key_a: Key,
    /// Access conditions for the four blocks
    pub access: AccessConditions,
    /// Key B
    pub key_b: Key,
}

impl SectorTrailer {
    /// Assemble a trailer.
    pub fn new(key_a: Key, access: AccessConditions, key_b: Key) -> Self {
        Self {
            key_a,
            access,
            key_b,
        }
    }

    /// See [`pack_trailer`].
    pub fn pack(&self) -> Result<[u8; TRAILER_LEN]> {
        pack_trailer(self)
    }
}

impl TryFrom<&[u8]> for SectorTrailer {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> std::result::Result<Self, Self::Error> {
        unpack_trailer(bytes)
    }
}

/// `key_a ‖ access bits ‖ key_b`
pub fn pack_trailer(trailer: &SectorTrailer) -> Result<[u8; TRAILER_LEN]> {
    let acs = trailer.access.pack()?;
    let mut out = [0u8; TRAILER_LEN];
    out[..KEY_LEN].copy_from_slice(trailer.key_a.as_bytes());
    out[KEY_LEN..KEY_LEN + ACS_LEN].copy_from_slice(&acs);
    out[KEY_LEN + ACS_LEN..].copy_from_slice(trailer.key_b.as_bytes());
    Ok(out)
}

/// Split 16 trailer bytes into keys and access conditions.
pub fn unpack_trailer(data: &[u8]) -> Result<SectorTrailer> {
    if data.len() != TRAILER_LEN {
        return Err(Error::InvalidLength {
            expected: TRAILER_LEN,
            actual: data.len(),
        });
    }
    Ok(SectorTrailer {
        key_a: Key::try_from(&data[..KEY_LEN])?,
        access: unpack_acs(&data[KEY_LEN..KEY_LEN + ACS_LEN])?,
        key_b: Key::try_from(&data[KEY_LEN + ACS_LEN..])?,
    })
}
