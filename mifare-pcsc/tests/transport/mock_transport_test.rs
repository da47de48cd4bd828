use std::sync::{Arc, Mutex};

use mifare_pcsc::transport::{MockTransport, Transport};
use mifare_pcsc::Protocol;

#[test]
fn mock_transport_records_and_replies() {
    let mut m = MockTransport::new();
    m.push_ok(&[0x01, 0x02]);
    let r = m.transmit(&[0xFF, 0xCA, 0x00, 0x00, 0x00], 6, Protocol::T0).unwrap();
    assert_eq!(r, vec![0x01, 0x02, 0x90, 0x00]);
    assert_eq!(m.sent.len(), 1);
    assert_eq!(m.sent[0].protocol, Protocol::T0);
    assert_eq!(m.last_command(), Some(&[0xFF, 0xCA, 0x00, 0x00, 0x00][..]));
}

#[test]
fn responses_come_back_in_order() {
    let mut m = MockTransport::with_responses(vec![vec![0x90, 0x00], vec![0x6A, 0x82]]);
    assert_eq!(m.transmit(&[0x00], 2, Protocol::T1).unwrap(), vec![0x90, 0x00]);
    assert_eq!(m.transmit(&[0x01], 2, Protocol::T1).unwrap(), vec![0x6A, 0x82]);
    assert!(m.transmit(&[0x02], 2, Protocol::T1).is_err());
}

#[test]
fn shared_handle_sees_boxed_sends() {
    let shared = Arc::new(Mutex::new(MockTransport::new()));
    shared.lock().unwrap().push_ok(&[]);

    let mut boxed: Box<dyn Transport> = Box::new(shared.clone());
    boxed.transmit(&[0xAA], 2, Protocol::Raw).unwrap();

    assert_eq!(boxed.name(), "mock");
    assert_eq!(shared.lock().unwrap().sent[0].command, vec![0xAA]);
}
