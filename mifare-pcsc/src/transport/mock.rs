// mifare-pcsc/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::types::Protocol;
use crate::{Error, Result};

/// One recorded `transmit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentCommand {
    /// APDU bytes
    pub command: Vec<u8>,
    /// Response length the caller expected
    pub expected_len: usize,
    /// Protocol tag passed along
    pub protocol: Protocol,
}

/// Mock transport for unit tests. It records sent commands and returns queued responses.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every transmit call, in order
    pub sent: Vec<SentCommand>,
    /// Replies handed out front to back
    pub responses: VecDeque<Vec<u8>>,
    /// Testing hook: number of transmit calls that should fail with a transport error
    pub failures: usize,
}

impl MockTransport {
    /// Mock with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock pre-seeded with `responses`.
    pub fn with_responses(responses: Vec<Vec<u8>>) -> Self {
        Self {
            responses: responses.into(),
            ..Self::default()
        }
    }

    /// Set how many subsequent transmit calls should fail (for tests).
    pub fn set_failures(&mut self, n: usize) {
        self.failures = n;
    }

    /// Queue a raw reply.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(resp);
    }

    /// Queue `data` followed by `90 00`.
    pub fn push_ok(&mut self, data: &[u8]) {
        let mut resp = data.to_vec();
        resp.extend_from_slice(&[0x90, 0x00]);
        self.push_response(resp);
    }

    /// APDU of the most recent transmit.
    pub fn last_command(&self) -> Option<&[u8]> {
        self.sent.last().map(|s| s.command.as_slice())
    }
}

impl Transport for MockTransport {
    fn transmit(
        &mut self,
        command: &[u8],
        expected_len: usize,
        protocol: Protocol,
    ) -> Result<Vec<u8>> {
        self.sent.push(SentCommand {
            command: command.to_vec(),
            expected_len,
            protocol,
        });
        if self.failures > 0 {
            self.failures -= 1;
            return Err(Error::Transport("simulated reader failure".into()));
        }
        self.responses
            .pop_front()
            .ok_or_else(|| Error::Transport("no response queued".into()))
    }

    fn name(&self) -> String {
        "mock".to_string()
    }
}
