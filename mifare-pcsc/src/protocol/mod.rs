// mifare-pcsc/src/protocol/mod.rs

/// Command enum and APDU encoders
pub mod commands;
/// Decoded command outcome
pub mod response;
pub mod status;

pub use commands::{Command, ResponseMode};
pub use response::Response;
pub use status::{classify, OperationKind, Severity, StatusWord};
