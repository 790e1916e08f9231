//! Integration tests for bedrock-sweep
//!
//! These tests spawn the actual binary and test end-to-end behavior. None of
//! them reach AWS: every account-touching command is run without a usable
//! region or credentials.

mod sweep_command;
