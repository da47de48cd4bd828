use mifare_pcsc::protocol::status::{classify, describe};
use mifare_pcsc::{Error, ErrorKind, OperationKind, Severity, StatusWord};

fn status_of(raw: &[u8], op: OperationKind) -> (Severity, String) {
    match classify(raw, op) {
        Err(Error::Status {
            severity, message, ..
        }) => (severity, message),
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[test]
fn success_strips_status_word() {
    let data = classify(&[0x01, 0x02, 0x90, 0x00], OperationKind::Common).unwrap();
    assert_eq!(data, vec![0x01, 0x02]);
}

#[test]
fn operation_table_wins_over_common() {
    let (_, common) = status_of(&[0x6A, 0x81], OperationKind::Common);
    assert_eq!(common, "Function not supported.");

    let (_, auth) = status_of(&[0x69, 0x82], OperationKind::GeneralAuthenticate);
    assert_eq!(auth, "Security status not satisfied.");

    let (_, load) = status_of(&[0x69, 0x82], OperationKind::LoadKeys);
    assert_eq!(load, "Card key not supported.");
}

#[test]
fn common_table_is_fallback() {
    let (_, msg) = status_of(&[0x6B, 0x00], OperationKind::ReadBinary);
    assert_eq!(msg, "Wrong parameter P1-P2.");
}

#[test]
fn wrong_le_wildcard_reports_decimal() {
    let (severity, msg) = status_of(&[0x6C, 0x10], OperationKind::ReadBinary);
    assert_eq!(severity, Severity::Error);
    assert!(msg.contains("16"), "message was {msg}");

    // not an entry outside Get Data / Read Binary
    let (_, other) = status_of(&[0x6C, 0x10], OperationKind::LoadKeys);
    assert_eq!(other, "unknown status word");
}

#[test]
fn warnings_are_still_errors() {
    let err = classify(&[0x63, 0x00], OperationKind::Common).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
    match err {
        Error::Status { severity, .. } => assert_eq!(severity, Severity::Warning),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn unknown_status_word() {
    assert!(describe(StatusWord::new(0x6F, 0x00), OperationKind::Common).is_none());
    let (severity, msg) = status_of(&[0x6F, 0x00], OperationKind::Common);
    assert_eq!(severity, Severity::Error);
    assert_eq!(msg, "unknown status word");
}

#[test]
fn short_response_is_malformed() {
    assert!(matches!(
        classify(&[0x90], OperationKind::Common),
        Err(Error::MalformedResponse { len: 1 })
    ));
    assert!(matches!(
        classify(&[], OperationKind::GetData),
        Err(Error::MalformedResponse { len: 0 })
    ));
}

#[test]
fn status_error_keeps_data_and_operation() {
    let err = classify(&[0xAA, 0x62, 0x82], OperationKind::GetData).unwrap_err();
    assert_eq!(err.status_word(), Some((0x62, 0x82)));
    match err {
        Error::Status {
            operation, data, ..
        } => {
            assert_eq!(operation, OperationKind::GetData);
            assert_eq!(data, vec![0xAA]);
        }
        other => panic!("unexpected {:?}", other),
    }
}
