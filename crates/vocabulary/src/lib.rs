//! `ledgerdesk-vocabulary` — the shared status badge vocabulary.
//!
//! One total mapping from (family, status) to display label and semantic
//! tone, used by every list and detail view. Replaces the per-page label
//! tables that drift apart when each page keeps its own copy.

pub mod badge;

pub use badge::{badge, StatusBadge, Tone};
