// mifare-pcsc/src/lib.rs

//! mifare-pcsc
//!
//! MIFARE Classic 1K access over PC/SC pseudo-APDUs (CLA `FF`): card UID,
//! reader key slots, sector authentication and block read / write /
//! restore, with every status word mapped to a typed error.
#![warn(missing_docs)]

/// Card session and operations
pub mod card;
pub mod constants;
/// Error type and taxonomy
pub mod error;
/// Common imports
pub mod prelude;
/// APDU encoding and response classification
pub mod protocol;
pub mod test_support;
/// Sector trailer and access-bit codec
pub mod trailer;
/// Reader I/O
pub mod transport;
/// Validated value types
pub mod types;
pub mod utils;

// `crate::Error`, `crate::Result` and the newtypes are used everywhere,
// so keep them at the root as well as in the prelude.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
