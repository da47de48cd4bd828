// mifare-pcsc/src/prelude.rs

pub use crate::card::{BlockRead, Card, CardBuilder, DumpPlan};
pub use crate::protocol::{Command, OperationKind, Response, Severity, StatusWord};
pub use crate::trailer::{AccessConditions, SectorTrailer};
pub use crate::transport::Transport;
pub use crate::{Error, ErrorKind, Key, KeyType, Protocol, Result, Uid};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
