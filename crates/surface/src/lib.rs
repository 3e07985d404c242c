//! `ledgerdesk-surface` — the action surface consumed by presentation.
//!
//! Turns the pure transition policy into renderable buttons (label,
//! confirmation gate, confirmation copy) and drives the
//! fetch → present → transition cycle against a document store. A failed
//! write never touches the caller's view: there is no optimistic commit.

pub mod actions;
pub mod service;

pub use actions::{available_actions, AvailableAction};
pub use service::{DocumentService, DocumentView, TransitionError};
