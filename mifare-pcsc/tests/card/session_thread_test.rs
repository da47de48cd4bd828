#[path = "../common/mod.rs"]
mod common;

use std::thread;

use common::fixtures;
use common::helpers::{card_with_responses, sent_commands};

#[test]
fn session_runs_on_worker_thread() {
    let (mock, mut card) = card_with_responses(vec![
        fixtures::uid_response(),
        fixtures::block_response(0x42),
    ]);

    let worker = thread::spawn(move || {
        let uid = card.get_uid().unwrap();
        let data = card.read_block(0x01, 0x10).unwrap();
        (uid, data)
    });
    let (uid, data) = worker.join().unwrap();

    assert_eq!(uid.as_bytes(), &fixtures::sample_uid_bytes());
    assert_eq!(data, vec![0x42; 16]);
    assert_eq!(sent_commands(&mock).len(), 2);
}

#[test]
fn independent_sessions_in_parallel() {
    let workers: Vec<_> = (0u8..4)
        .map(|i| {
            let (_mock, mut card) = card_with_responses(vec![fixtures::block_response(i)]);
            thread::spawn(move || card.read_block(0x04, 0x10).unwrap())
        })
        .collect();

    for (i, w) in workers.into_iter().enumerate() {
        assert_eq!(w.join().unwrap(), vec![i as u8; 16]);
    }
}
