use std::sync::{Arc, Mutex};

use mifare_pcsc::test_support::shared_mock;
use mifare_pcsc::transport::MockTransport;
use mifare_pcsc::Card;

/// Mock-backed card plus a handle for checking what was sent.
pub fn card_with_responses(responses: Vec<Vec<u8>>) -> (Arc<Mutex<MockTransport>>, Card) {
    super::init_logger();
    shared_mock(responses)
}

/// Every APDU the card sent, in order.
pub fn sent_commands(mock: &Arc<Mutex<MockTransport>>) -> Vec<Vec<u8>> {
    mock.lock()
        .unwrap()
        .sent
        .iter()
        .map(|s| s.command.clone())
        .collect()
}
