//! Shared helpers for integration tests.

pub mod engine_harness;
