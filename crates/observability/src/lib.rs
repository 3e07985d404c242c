//! `ledgerdesk-observability` — tracing/logging initialization for hosts.

pub mod tracing;

pub use crate::tracing::{init, init_for_tests, init_with};
