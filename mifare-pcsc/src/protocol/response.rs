// mifare-pcsc/src/protocol/response.rs

use crate::constants::MIN_UID_LEN;
use crate::protocol::commands::{Command, ResponseMode};
use crate::protocol::status::classify;
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// Decoded outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Data preceding `90 00` for read-mode commands.
    Data(Vec<u8>),
    /// Void-mode command finished with `90 00`.
    Completed,
}

impl Response {
    /// Classify the raw transport response for `cmd`.
    pub fn decode(cmd: &Command, raw: &[u8]) -> Result<Self> {
        let data = classify(raw, cmd.operation())?;

        match cmd.response_mode() {
            ResponseMode::Void => {
                if !data.is_empty() {
                    log::debug!(
                        "ignoring {} data byte(s) on INS {:02x}: {}",
                        data.len(),
                        cmd.instruction(),
                        bytes_to_hex(&data)
                    );
                }
                Ok(Self::Completed)
            }
            ResponseMode::Read => {
                match cmd {
                    Command::ReadBlock { len, .. } if data.len() != len.as_usize() => {
                        return Err(Error::UnexpectedDataLength {
                            expected: len.as_usize(),
                            actual: data.len(),
                        });
                    }
                    // a UID is 4, 7 or 10 bytes; none at all is not a UID
                    Command::GetUid if data.is_empty() => {
                        return Err(Error::UnexpectedDataLength {
                            expected: MIN_UID_LEN,
                            actual: 0,
                        });
                    }
                    _ => {}
                }
                Ok(Self::Data(data))
            }
        }
    }

    /// Payload of a read-mode response; empty for `Completed`.
    pub fn into_data(self) -> Vec<u8> {
        match self {
            Self::Data(d) => d,
            Self::Completed => Vec::new(),
        }
    }
}
