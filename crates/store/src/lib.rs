//! `ledgerdesk-store` — collaborator contracts for the hosted backend.
//!
//! The hosted data store, the currency formatter, and the PDF exporter are
//! black boxes to the domain core. This crate defines the seams they are
//! called through, their error taxonomy, and an in-memory store for tests
//! and development.

pub mod contract;
pub mod error;
pub mod in_memory;

pub use contract::{CurrencyFormatter, DocumentStore, PdfExporter, SimpleCurrencyFormatter};
pub use error::{ExportError, PersistenceError, StoreError};
pub use in_memory::InMemoryStore;
