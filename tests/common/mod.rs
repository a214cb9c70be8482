//! Common test utilities and fixtures for relay integration tests

#![allow(dead_code)]

pub mod mock_upstream;
pub mod test_app;

pub use mock_upstream::*;
pub use test_app::*;
