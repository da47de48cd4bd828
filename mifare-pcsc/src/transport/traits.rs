// mifare-pcsc/src/transport/traits.rs

use std::sync::{Arc, Mutex};

use crate::types::Protocol;
use crate::{Error, Result};

/// Transport trait abstracts reader I/O away from the command layer.
///
/// One call is one command/response exchange. Implementations are not
/// expected to be reentrant; a `Card` session never overlaps calls.
/// `Send` so a session can be handed to a worker thread.
pub trait Transport: Send {
    /// Send `command` and return the full response, status word included.
    /// `expected_len` sizes the receive buffer; `protocol` is the tag
    /// negotiated when the card was connected.
    fn transmit(&mut self, command: &[u8], expected_len: usize, protocol: Protocol)
    -> Result<Vec<u8>>;

    /// Short reader description used in log output.
    fn name(&self) -> String {
        "transport".to_string()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn transmit(
        &mut self,
        command: &[u8],
        expected_len: usize,
        protocol: Protocol,
    ) -> Result<Vec<u8>> {
        (**self).transmit(command, expected_len, protocol)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

/// Lets a caller keep a handle on a transport it hands to a session.
impl<T: Transport> Transport for Arc<Mutex<T>> {
    fn transmit(
        &mut self,
        command: &[u8],
        expected_len: usize,
        protocol: Protocol,
    ) -> Result<Vec<u8>> {
        let mut inner = self
            .lock()
            .map_err(|_| Error::Transport("shared transport lock poisoned".into()))?;
        inner.transmit(command, expected_len, protocol)
    }

    fn name(&self) -> String {
        match self.lock() {
            Ok(inner) => inner.name(),
            Err(poisoned) => poisoned.into_inner().name(),
        }
    }
}
