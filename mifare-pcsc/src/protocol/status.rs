// mifare-pcsc/src/protocol/status.rs
//! Status-word classification.
//!
//! Every response ends with `SW1 SW2`. `90 00` is success; anything else is
//! looked up in the common ISO 7816 table and then in the table of the
//! operation that produced it, the latter taking precedence. Some entries
//! match on `SW1` alone and fold `SW2` into the message.

use std::borrow::Cow;

use derive_more::Display;

use crate::constants::{STATUS_WORD_LEN, SW_SUCCESS};
use crate::{Error, Result};

/// Operation whose error table applies to a status word.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// No operation table; ISO 7816 common entries only
    #[display(fmt = "Common")]
    Common,
    /// Get Data (UID)
    #[display(fmt = "Get Data")]
    GetData,
    /// Load Keys
    #[display(fmt = "Load Keys")]
    LoadKeys,
    /// General Authenticate
    #[display(fmt = "General Authenticate")]
    GeneralAuthenticate,
    /// Read Binary
    #[display(fmt = "Read Binary")]
    ReadBinary,
}

/// How the reader classifies a non-success status word.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// `62xx` / `63xx`; the command still failed
    #[display(fmt = "warning")]
    Warning,
    /// Any other failure
    #[display(fmt = "error")]
    Error,
}

/// Status word split from the tail of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusWord {
    /// SW1
    pub sw1: u8,
    /// SW2
    pub sw2: u8,
}

impl StatusWord {
    /// Status word from its two bytes.
    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    /// `90 00`
    pub fn is_success(&self) -> bool {
        (self.sw1, self.sw2) == SW_SUCCESS
    }
}

/// Human-readable interpretation of a non-success status word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDescription {
    /// Warning or error
    pub severity: Severity,
    /// Table text, with `SW2` filled in for wildcard entries
    pub message: Cow<'static, str>,
}

/// One table row: either an exact status word or an `SW1` wildcard.
enum Entry {
    Exact(Severity, &'static str),
    WrongLe(&'static str),
}

impl Entry {
    fn describe(&self, sw2: u8) -> StatusDescription {
        match self {
            Entry::Exact(severity, message) => StatusDescription {
                severity: *severity,
                message: Cow::Borrowed(message),
            },
            Entry::WrongLe(suffix) => StatusDescription {
                severity: Severity::Error,
                message: Cow::Owned(format!("Wrong length (wrong number Le: {}){}", sw2, suffix)),
            },
        }
    }
}

use Severity::{Error as E, Warning as W};

fn common_entry(sw: StatusWord) -> Option<Entry> {
    let entry = match (sw.sw1, sw.sw2) {
        (0x63, 0x00) => Entry::Exact(W, "No information is given."),
        (0x67, 0x00) => Entry::Exact(E, "Wrong length."),
        (0x68, 0x00) => Entry::Exact(E, "Class byte is not correct."),
        (0x6A, 0x81) => Entry::Exact(E, "Function not supported."),
        (0x6B, 0x00) => Entry::Exact(E, "Wrong parameter P1-P2."),
        _ => return None,
    };
    Some(entry)
}

fn operation_entry(operation: OperationKind, sw: StatusWord) -> Option<Entry> {
    let entry = match (operation, sw.sw1, sw.sw2) {
        (OperationKind::GetData, 0x62, 0x82) => Entry::Exact(
            W,
            "End of data reached before Le bytes (Le is greater than data length).",
        ),
        (OperationKind::GetData, 0x6C, _) => {
            Entry::WrongLe("; Le is less than the available UID length.")
        }

        (OperationKind::LoadKeys, 0x63, 0x00) => Entry::Exact(W, "No information is given."),
        (OperationKind::LoadKeys, 0x69, 0x82) => Entry::Exact(E, "Card key not supported."),
        (OperationKind::LoadKeys, 0x69, 0x83) => Entry::Exact(E, "Reader key not supported."),
        (OperationKind::LoadKeys, 0x69, 0x84) => {
            Entry::Exact(E, "Plain transmission not supported.")
        }
        (OperationKind::LoadKeys, 0x69, 0x85) => {
            Entry::Exact(E, "Secured transmission not supported.")
        }
        (OperationKind::LoadKeys, 0x69, 0x86) => {
            Entry::Exact(E, "Volatile memory is not available.")
        }
        (OperationKind::LoadKeys, 0x69, 0x87) => {
            Entry::Exact(E, "Non volatile memory is not available.")
        }
        (OperationKind::LoadKeys, 0x69, 0x88) => Entry::Exact(E, "Key number not valid."),
        (OperationKind::LoadKeys, 0x69, 0x89) => Entry::Exact(E, "Key length is not correct."),

        (OperationKind::GeneralAuthenticate, 0x63, 0x00) => {
            Entry::Exact(W, "No information is given.")
        }
        (OperationKind::GeneralAuthenticate, 0x65, 0x81) => Entry::Exact(
            E,
            "Memory failure, block addressed by blockNumber parameter does not exist.",
        ),
        (OperationKind::GeneralAuthenticate, 0x69, 0x82) => {
            Entry::Exact(E, "Security status not satisfied.")
        }
        (OperationKind::GeneralAuthenticate, 0x69, 0x83) => {
            Entry::Exact(E, "Authentication cannot be done.")
        }
        (OperationKind::GeneralAuthenticate, 0x69, 0x84) => {
            Entry::Exact(E, "Reference key not usable.")
        }
        (OperationKind::GeneralAuthenticate, 0x69, 0x86) => Entry::Exact(E, "Key type not known."),
        (OperationKind::GeneralAuthenticate, 0x69, 0x88) => {
            Entry::Exact(E, "Key number not valid.")
        }

        (OperationKind::ReadBinary, 0x62, 0x81) => {
            Entry::Exact(W, "Part of returned data may be corrupted.")
        }
        (OperationKind::ReadBinary, 0x62, 0x82) => Entry::Exact(
            W,
            "End of file reached before reading expected number of bytes.",
        ),
        (OperationKind::ReadBinary, 0x69, 0x81) => Entry::Exact(E, "Command incompatible."),
        (OperationKind::ReadBinary, 0x69, 0x82) => {
            Entry::Exact(E, "Security status not satisfied.")
        }
        (OperationKind::ReadBinary, 0x69, 0x86) => Entry::Exact(E, "Command not allowed."),
        (OperationKind::ReadBinary, 0x6A, 0x81) => Entry::Exact(E, "Function not supported."),
        (OperationKind::ReadBinary, 0x6A, 0x82) => Entry::Exact(
            E,
            "File not found / Addressed block or byte does not exist.",
        ),
        (OperationKind::ReadBinary, 0x6C, _) => Entry::WrongLe("."),

        _ => return None,
    };
    Some(entry)
}

/// Look up a status word; the operation table overrides the common one.
pub fn describe(sw: StatusWord, operation: OperationKind) -> Option<StatusDescription> {
    let entry = operation_entry(operation, sw).or_else(|| common_entry(sw))?;
    Some(entry.describe(sw.sw2))
}

/// Split a response into its data and trailing status word.
pub fn split_status(response: &[u8]) -> Result<(&[u8], StatusWord)> {
    if response.len() < STATUS_WORD_LEN {
        return Err(Error::MalformedResponse {
            len: response.len(),
        });
    }
    let (data, sw) = response.split_at(response.len() - STATUS_WORD_LEN);
    Ok((data, StatusWord::new(sw[0], sw[1])))
}

/// Classify a raw response. On `90 00` the bytes before the status word
/// are returned; any other status word becomes [`Error::Status`].
pub fn classify(response: &[u8], operation: OperationKind) -> Result<Vec<u8>> {
    let (data, sw) = split_status(response)?;
    if sw.is_success() {
        return Ok(data.to_vec());
    }

    let (severity, message) = match describe(sw, operation) {
        Some(d) => (d.severity, d.message.into_owned()),
        None => (Severity::Error, "unknown status word".to_string()),
    };
    log::trace!(
        "{}: sw={:02x}{:02x} -> {} ({})",
        operation,
        sw.sw1,
        sw.sw2,
        message,
        severity
    );

    Err(Error::Status {
        sw1: sw.sw1,
        sw2: sw.sw2,
        severity,
        operation,
        message,
        data: data.to_vec(),
    })
}
