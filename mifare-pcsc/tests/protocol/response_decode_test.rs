use mifare_pcsc::protocol::{Command, Response};
use mifare_pcsc::types::{BlockLength, BlockNumber, BlockPair};
use mifare_pcsc::{Error, ErrorKind};

fn read(block: u8, len: usize) -> Command {
    Command::ReadBlock {
        block: BlockNumber::new(block).unwrap(),
        len: BlockLength::new(len).unwrap(),
    }
}

#[test]
fn read_two_blocks() {
    let mut raw = vec![0x11; 32];
    raw.extend_from_slice(&[0x90, 0x00]);
    let resp = Response::decode(&read(4, 0x20), &raw).unwrap();
    assert_eq!(resp.into_data(), vec![0x11; 32]);
}

#[test]
fn read_with_too_much_data() {
    let mut raw = vec![0x11; 32];
    raw.extend_from_slice(&[0x90, 0x00]);
    let err = Response::decode(&read(4, 0x10), &raw).unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedDataLength {
            expected: 16,
            actual: 32
        }
    ));
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[test]
fn read_not_found_message() {
    let err = Response::decode(&read(0x3F, 0x10), &[0x6A, 0x82]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Read Binary: File not found / Addressed block or byte does not exist. (sw=6a82, data=)"
    );
}

#[test]
fn restore_completes_without_data() {
    let cmd = Command::RestoreBlock {
        pair: BlockPair::new(8, 9).unwrap(),
    };
    assert_eq!(
        Response::decode(&cmd, &[0x90, 0x00]).unwrap(),
        Response::Completed
    );
    assert!(Response::Completed.into_data().is_empty());
}
