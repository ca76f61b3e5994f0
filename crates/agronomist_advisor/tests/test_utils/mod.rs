//! Test helpers for the advisory flows.

pub mod fake_driver;

#[allow(unused_imports)]
pub use fake_driver::{FakeDriver, FakeReply};
