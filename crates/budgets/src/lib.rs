//! `ledgerdesk-budgets` — budget lifecycle and append-only revision.
//!
//! Budgets share the badge vocabulary with transactional documents but run a
//! distinct lifecycle: draft → confirmed → revised, with archive off
//! confirmed or revised. A revision never edits a record in place; it marks
//! the current record revised and creates a linked successor.

pub mod budget;

pub use budget::{revise, Budget, BudgetStatus, Revision};
