//! Small helpers shared across the crate: hex formatting for log output
//! and hex parsing for keys given on a command line.

pub mod hex;

pub use hex::*;
