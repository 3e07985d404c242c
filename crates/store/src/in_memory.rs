//! In-memory document store.
//!
//! Intended for tests/dev. Not optimized for performance. Supports injecting
//! a one-shot write failure so persistence-error paths are testable.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use tracing::debug;

use ledgerdesk_budgets::{Budget, BudgetStatus, Revision};
use ledgerdesk_core::{BudgetId, DocumentId};
use ledgerdesk_documents::{DocumentKind, Payment, TransactionalDocument};
use ledgerdesk_policy::FamilyStatus;

use crate::contract::DocumentStore;
use crate::error::{PersistenceError, StoreError};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: RwLock<HashMap<DocumentId, TransactionalDocument>>,
    payments: RwLock<HashMap<DocumentId, Vec<Payment>>>,
    budgets: RwLock<HashMap<BudgetId, Budget>>,
    fail_next_write: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_document(&self, doc: TransactionalDocument) {
        let mut documents = self.documents.write().expect("lock poisoned");
        documents.insert(doc.id(), doc);
    }

    pub fn insert_payment(&self, payment: Payment) {
        let mut payments = self.payments.write().expect("lock poisoned");
        payments.entry(payment.document_id).or_default().push(payment);
    }

    pub fn insert_budget(&self, budget: Budget) {
        let mut budgets = self.budgets.write().expect("lock poisoned");
        budgets.insert(budget.id, budget);
    }

    /// Make the next write fail with a `PersistenceError`, then recover.
    pub fn fail_next_write(&self) {
        self.fail_next_write.store(true, Ordering::SeqCst);
    }

    fn take_injected_failure(&self) -> Result<(), PersistenceError> {
        if self.fail_next_write.swap(false, Ordering::SeqCst) {
            return Err(PersistenceError::new("injected write failure"));
        }
        Ok(())
    }
}

impl DocumentStore for InMemoryStore {
    fn fetch_document(
        &self,
        kind: DocumentKind,
        id: DocumentId,
    ) -> Result<TransactionalDocument, StoreError> {
        let documents = self
            .documents
            .read()
            .map_err(|_| StoreError::Transient("lock poisoned".to_string()))?;

        let doc = documents.get(&id).ok_or(StoreError::NotFound)?;
        if doc.kind() != kind {
            // Addressing a bill by an order route and vice versa resolves
            // to nothing, same as a stale id.
            return Err(StoreError::NotFound);
        }
        Ok(doc.clone())
    }

    fn fetch_payments(&self, document_id: DocumentId) -> Result<Vec<Payment>, StoreError> {
        let payments = self
            .payments
            .read()
            .map_err(|_| StoreError::Transient("lock poisoned".to_string()))?;
        Ok(payments.get(&document_id).cloned().unwrap_or_default())
    }

    fn fetch_budget(&self, id: BudgetId) -> Result<Budget, StoreError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|_| StoreError::Transient("lock poisoned".to_string()))?;
        budgets.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    fn apply_transition(
        &self,
        kind: DocumentKind,
        id: DocumentId,
        new_status: FamilyStatus,
    ) -> Result<(), PersistenceError> {
        self.take_injected_failure()?;

        let mut documents = self
            .documents
            .write()
            .map_err(|_| PersistenceError::new("lock poisoned"))?;

        let doc = documents
            .get_mut(&id)
            .ok_or_else(|| PersistenceError::new(format!("document {id} does not exist")))?;

        if doc.kind() != kind {
            return Err(PersistenceError::new(format!(
                "document {id} is not a {kind:?}"
            )));
        }

        match (doc, new_status) {
            (TransactionalDocument::Order(order), FamilyStatus::Order(status)) => {
                debug!(document = %id, from = %order.status, to = %status, "order transition");
                order.status = status;
                Ok(())
            }
            (TransactionalDocument::Invoice(invoice), FamilyStatus::Invoice(status)) => {
                debug!(document = %id, from = %invoice.status, to = %status, "invoice transition");
                invoice.status = status;
                Ok(())
            }
            _ => Err(PersistenceError::new(format!(
                "status {} does not belong to the document's family",
                new_status.as_str()
            ))),
        }
    }

    fn apply_budget_transition(
        &self,
        id: BudgetId,
        new_status: BudgetStatus,
    ) -> Result<(), PersistenceError> {
        self.take_injected_failure()?;

        let mut budgets = self
            .budgets
            .write()
            .map_err(|_| PersistenceError::new("lock poisoned"))?;

        let budget = budgets
            .get_mut(&id)
            .ok_or_else(|| PersistenceError::new(format!("budget {id} does not exist")))?;
        budget.status = new_status;
        Ok(())
    }

    fn record_revision(&self, revision: &Revision) -> Result<(), PersistenceError> {
        self.take_injected_failure()?;

        let mut budgets = self
            .budgets
            .write()
            .map_err(|_| PersistenceError::new("lock poisoned"))?;

        if budgets.contains_key(&revision.child.id) {
            return Err(PersistenceError::new(format!(
                "budget {} already exists",
                revision.child.id
            )));
        }

        let parent = budgets.get_mut(&revision.parent_id).ok_or_else(|| {
            PersistenceError::new(format!("budget {} does not exist", revision.parent_id))
        })?;

        // Both writes happen under one lock: the parent's mark and the child
        // record land together or not at all.
        parent.status = revision.parent_status;
        budgets.insert(revision.child.id, revision.child.clone());
        Ok(())
    }
}
