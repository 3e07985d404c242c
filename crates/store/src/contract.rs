//! Seams the core calls into.

use ledgerdesk_budgets::{Budget, BudgetStatus, Revision};
use ledgerdesk_core::{BudgetId, DocumentId};
use ledgerdesk_documents::{DocumentKind, Payment, TransactionalDocument};
use ledgerdesk_policy::FamilyStatus;

use crate::error::{ExportError, PersistenceError, StoreError};

/// Read/write access to the hosted relational backend.
///
/// Implementations are free to be remote and slow; the core treats each call
/// as an independent operation with no retry, timeout, or cancellation
/// semantics of its own.
pub trait DocumentStore {
    fn fetch_document(
        &self,
        kind: DocumentKind,
        id: DocumentId,
    ) -> Result<TransactionalDocument, StoreError>;

    /// All payments recorded against a document, including pending and
    /// failed ones — they are historical records.
    fn fetch_payments(&self, document_id: DocumentId) -> Result<Vec<Payment>, StoreError>;

    fn fetch_budget(&self, id: BudgetId) -> Result<Budget, StoreError>;

    /// Write a new status onto a document. The store owns the actual
    /// enforcement; a rejection must leave the stored record unchanged.
    fn apply_transition(
        &self,
        kind: DocumentKind,
        id: DocumentId,
        new_status: FamilyStatus,
    ) -> Result<(), PersistenceError>;

    /// Write a new status onto a budget.
    fn apply_budget_transition(
        &self,
        id: BudgetId,
        new_status: BudgetStatus,
    ) -> Result<(), PersistenceError>;

    /// Persist a budget revision: the parent's `Revised` mark and the new
    /// child record, together.
    fn record_revision(&self, revision: &Revision) -> Result<(), PersistenceError>;
}

/// Locale/currency-aware amount formatting, injected by the host.
pub trait CurrencyFormatter {
    /// Render a smallest-currency-unit amount for display.
    fn format(&self, amount: i64) -> String;
}

/// Plain two-decimal formatter for tests and development hosts.
#[derive(Debug, Clone)]
pub struct SimpleCurrencyFormatter {
    pub symbol: String,
}

impl SimpleCurrencyFormatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

impl CurrencyFormatter for SimpleCurrencyFormatter {
    fn format(&self, amount: i64) -> String {
        let sign = if amount < 0 { "-" } else { "" };
        let abs = amount.unsigned_abs();
        format!("{sign}{}{}.{:02}", self.symbol, abs / 100, abs % 100)
    }
}

/// Opaque PDF export seam. Failure is isolated to the export action.
pub trait PdfExporter {
    fn generate(&self, doc: &TransactionalDocument) -> Result<Vec<u8>, ExportError>;
}
