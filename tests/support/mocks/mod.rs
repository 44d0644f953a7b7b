// tests/support/mocks/mod.rs
//! Test doubles for every port the application services depend on.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod notifications;
pub mod security;
pub mod store;
pub mod time;

pub use notifications::{RecordingEmailSender, RecordingSocialPoster};
pub use security::{DummyPasswordHasher, DummyTokenManager, token_for};
pub use store::InMemoryStore;
pub use time::{FixedClock, fixed_now};
