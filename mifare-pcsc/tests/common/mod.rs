// Shared helpers for the integration tests. Each test file pulls this in
// with `#[path = "../common/mod.rs"]`, so not every item is used everywhere.
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

/// Route `log` output through the test harness; safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
