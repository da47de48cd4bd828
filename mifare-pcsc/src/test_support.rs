//! Test support helpers intended for use by unit and integration tests.
//!
//! Centralizes MockTransport setup so tests across the crate and the
//! tests/ directory share the same logic.

use std::sync::{Arc, Mutex};

use crate::card::Card;
use crate::transport::mock::MockTransport;
use crate::types::Protocol;

/// Build a `Card` backed by a MockTransport pre-seeded with `responses`,
/// and return a handle on the mock so the caller can inspect sent
/// commands after the session took ownership.
#[doc(hidden)]
pub fn shared_mock(responses: Vec<Vec<u8>>) -> (Arc<Mutex<MockTransport>>, Card) {
    let mock = Arc::new(Mutex::new(MockTransport::with_responses(responses)));
    let card = Card::new(Box::new(mock.clone()), Protocol::T1);
    (mock, card)
}
