//! Integration tests

pub mod client_tests;
