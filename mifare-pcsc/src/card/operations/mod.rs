/// Key loading and authentication
pub mod auth;
/// Multi-block dump walk
pub mod dump;
/// Read Binary and trailer reads
pub mod read;
/// Get Data (UID)
pub mod uid;
/// Update Binary, restore and trailer writes
pub mod write;

// Re-export the operations at the module root so callers can use
// `crate::card::operations::read_block(...)` directly.
pub use auth::{authenticate, load_auth_key};
pub use dump::{BlockRead, DumpIterator, DumpPlan};
pub use read::{read_block, read_trailer};
pub use uid::get_uid;
pub use write::{restore_block, update_block, write_trailer};
