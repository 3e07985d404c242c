//! `ledgerdesk-documents` — transactional document snapshots.
//!
//! Orders, bills/invoices and their payments as immutable snapshots fetched
//! from the hosted store, plus the balance calculator. This crate owns no
//! persistence; mutation happens through the store collaborator.

pub mod balance;
pub mod document;
pub mod payment;
pub mod status;

pub use balance::Balance;
pub use document::{DocumentFamily, DocumentKind, Invoice, Order, TransactionalDocument};
pub use payment::{has_completed_payment, Payment};
pub use status::{InvoiceStatus, OrderStatus, PaymentStatus};
