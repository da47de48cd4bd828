// mifare-pcsc/src/transport/mod.rs

/// Recording transport for tests
pub mod mock;
#[cfg(feature = "pcsc")]
/// PC/SC reader transport
pub mod pcsc;
/// `Transport` trait
pub mod traits;

pub use mock::MockTransport;
#[cfg(feature = "pcsc")]
pub use self::pcsc::PcscTransport;
pub use traits::Transport;
