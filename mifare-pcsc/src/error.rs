// mifare-pcsc/src/error.rs

use thiserror::Error;

use crate::protocol::status::{OperationKind, Severity};
use crate::utils::bytes_to_hex;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// A numeric argument exceeded its maximum.
    #[error("{what} out of range: {value:#04x} (max {max:#04x})")]
    OutOfRange {
        /// Argument name
        what: &'static str,
        /// Value supplied
        value: usize,
        /// Largest accepted value
        max: usize,
    },

    /// A byte slice had the wrong length.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Length supplied
        actual: usize,
    },

    /// Read/Update Binary length other than 0x10, 0x20 or 0x30.
    #[error("invalid block data length {0:#04x}: must be 0x10, 0x20 or 0x30")]
    InvalidBlockLength(usize),

    /// Restore source and destination in different sectors.
    #[error("blocks {src:#04x} and {dest:#04x} are not in the same sector")]
    DifferentSectors {
        /// Source block
        src: u8,
        /// Destination block
        dest: u8,
    },

    /// A plain data write would land on a sector trailer.
    #[error("block {0:#04x} is a sector trailer; use write_trailer")]
    TrailerBlock(u8),

    /// A dump plan without any key slot to authenticate with.
    #[error("dump plan has no key slots")]
    NoKeySlots,

    /// Reader I/O failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// `CardBuilder::build` without a transport.
    #[error("no transport connected")]
    NotConnected,

    // PC/SC は実機を使うときだけ有効化する
    /// PC/SC layer failure.
    #[cfg(feature = "pcsc")]
    #[error("pcsc error: {0}")]
    Pcsc(#[from] pcsc::Error),

    /// The card answered with a status word other than `90 00`.
    #[error("{operation}: {message} (sw={sw1:02x}{sw2:02x}, data={})", bytes_to_hex(.data))]
    Status {
        /// First status byte
        sw1: u8,
        /// Second status byte
        sw2: u8,
        /// Warning (`62xx`/`63xx`) or error
        severity: Severity,
        /// Table the message came from
        operation: OperationKind,
        /// Table message, or "unknown status word"
        message: String,
        /// Bytes preceding the status word
        data: Vec<u8>,
    },

    /// Response too short to hold a status word.
    #[error("malformed response: {len} byte(s), status word needs 2")]
    MalformedResponse {
        /// Bytes received
        len: usize,
    },

    /// Success status but the data length does not match the command.
    #[error("unexpected response data length: expected {expected}, got {actual}")]
    UnexpectedDataLength {
        /// Bytes the command asked for
        expected: usize,
        /// Bytes returned
        actual: usize,
    },
}

/// Coarse failure category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller supplied an out-of-range or mis-sized argument. Nothing was sent.
    Validation,
    /// The transport itself failed.
    Transport,
    /// The card answered with a non-success status word.
    Protocol,
    /// The response could not be split into data and status word.
    MalformedResponse,
}

impl Error {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfRange { .. }
            | Self::InvalidLength { .. }
            | Self::InvalidBlockLength(_)
            | Self::DifferentSectors { .. }
            | Self::TrailerBlock(_)
            | Self::NoKeySlots => ErrorKind::Validation,
            Self::Transport(_) | Self::NotConnected => ErrorKind::Transport,
            #[cfg(feature = "pcsc")]
            Self::Pcsc(_) => ErrorKind::Transport,
            Self::Status { .. } => ErrorKind::Protocol,
            Self::MalformedResponse { .. } | Self::UnexpectedDataLength { .. } => {
                ErrorKind::MalformedResponse
            }
        }
    }

    /// Raw status word for card-reported failures.
    pub fn status_word(&self) -> Option<(u8, u8)> {
        match self {
            Self::Status { sw1, sw2, .. } => Some((*sw1, *sw2)),
            _ => None,
        }
    }

    pub(crate) fn out_of_range(what: &'static str, value: usize, max: usize) -> Self {
        Self::OutOfRange { what, value, max }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
