//! Unit tests for bedrock-sweep
//!
//! These tests run the application services against in-memory fakes and
//! never touch AWS.

mod architecture;
mod config_service;
mod property_tests;
