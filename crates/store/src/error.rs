//! Store-layer error taxonomy.
//!
//! These are collaborator failures, as opposed to the deterministic domain
//! errors in `ledgerdesk-core`. Every one of them is surfaced to the end
//! user; none are swallowed.

use thiserror::Error;

/// A read against the hosted store failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The id did not resolve. Callers redirect to the list view.
    #[error("not found")]
    NotFound,

    /// Network or backend failure. Callers show a retry affordance.
    #[error("transient store failure: {0}")]
    Transient(String),
}

/// A transition write was rejected (e.g. a backend-side constraint).
///
/// The caller must leave its displayed status unchanged: no optimistic
/// commit without a confirmed write.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("transition write rejected: {reason}")]
pub struct PersistenceError {
    pub reason: String,
}

impl PersistenceError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// PDF generation failed. Isolated to the export action; document state is
/// unaffected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("export failed: {0}")]
pub struct ExportError(pub String);
