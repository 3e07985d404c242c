//! Document service: fetch → present → transition, without optimistic commit.

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use ledgerdesk_budgets::{revise, Budget};
use ledgerdesk_core::{BudgetId, DocumentId, DomainError};
use ledgerdesk_documents::{
    has_completed_payment, Balance, DocumentKind, Payment, TransactionalDocument,
};
use ledgerdesk_policy::{Action, FamilyStatus, TransitionContext, TransitionPolicy};
use ledgerdesk_store::{
    DocumentStore, ExportError, PdfExporter, PersistenceError, StoreError,
};
use ledgerdesk_vocabulary::StatusBadge;

use crate::actions::{available_actions, AvailableAction};

/// Why a requested transition did not happen.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// The policy does not offer this action in the document's state.
    #[error("action '{action}' is not available in status '{status}'")]
    NotAllowed { action: Action, status: &'static str },

    /// The action is offered but is not a plain status write (e.g. `Pay`
    /// goes through the payment recorder, `Revise` through the revision
    /// operation).
    #[error("action '{0}' does not map to a direct status transition")]
    NotATransition(Action),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Fetch(#[from] StoreError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Everything a detail page renders: the snapshot, its payment history, the
/// recomputed balance, the status badge, and the actions to offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentView {
    pub document: TransactionalDocument,
    pub payments: Vec<Payment>,
    /// `None` for orders — they carry no paid amount.
    pub balance: Option<Balance>,
    pub badge: StatusBadge,
    pub actions: Vec<AvailableAction>,
}

impl DocumentView {
    pub fn offers(&self, action: Action) -> bool {
        self.actions.iter().any(|a| a.action == action)
    }
}

/// Drives document pages against a store.
///
/// Stateless per call: concurrent duplicate submissions are the caller's
/// concern (disable the control while an operation is in flight).
#[derive(Debug)]
pub struct DocumentService<S> {
    store: S,
    policy: TransitionPolicy,
}

impl<S: DocumentStore> DocumentService<S> {
    pub fn new(store: S, policy: TransitionPolicy) -> Self {
        Self { store, policy }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch a document and assemble its view.
    pub fn load(&self, kind: DocumentKind, id: DocumentId) -> Result<DocumentView, StoreError> {
        let document = self.store.fetch_document(kind, id)?;
        let payments = self.store.fetch_payments(id)?;
        Ok(self.view_of(document, payments))
    }

    fn view_of(&self, document: TransactionalDocument, payments: Vec<Payment>) -> DocumentView {
        let status = FamilyStatus::from(&document);
        let ctx = TransitionContext::new(document.archived())
            .with_completed_payment(has_completed_payment(&payments));

        let (balance, badge) = match &document {
            TransactionalDocument::Order(o) => (None, StatusBadge::from(o.status)),
            TransactionalDocument::Invoice(i) => {
                (Some(i.balance()), StatusBadge::from(i.status))
            }
        };

        let actions = available_actions(&self.policy, status, ctx);

        DocumentView {
            document,
            payments,
            balance,
            badge,
            actions,
        }
    }

    /// Apply a status transition and return the refreshed view.
    ///
    /// The input view is borrowed and never mutated: on any failure the
    /// caller keeps displaying exactly what it had. Only a confirmed write
    /// produces a new view, re-read from the store.
    pub fn apply(
        &self,
        view: &DocumentView,
        action: Action,
    ) -> Result<DocumentView, TransitionError> {
        let status = FamilyStatus::from(&view.document);
        let ctx = TransitionContext::new(view.document.archived())
            .with_completed_payment(has_completed_payment(&view.payments));

        if !self.policy.legal_actions(status, ctx).contains(&action) {
            warn!(action = %action, status = status.as_str(), "transition refused by policy");
            return Err(TransitionError::NotAllowed {
                action,
                status: status.as_str(),
            });
        }

        let target = self
            .policy
            .target_status(status, action)
            .ok_or(TransitionError::NotATransition(action))?;

        let kind = view.document.kind();
        let id = view.document.id();
        match self.store.apply_transition(kind, id, target) {
            Ok(()) => {
                info!(document = %id, action = %action, to = target.as_str(), "transition applied");
            }
            Err(err) => {
                warn!(document = %id, action = %action, error = %err, "transition write rejected");
                return Err(err.into());
            }
        }

        Ok(self.load(kind, id)?)
    }

    /// Revise a confirmed budget: mark it revised and create the linked
    /// successor carrying the new amount. Returns the child on success.
    pub fn revise_budget(
        &self,
        parent_id: BudgetId,
        new_amount: i64,
    ) -> Result<Budget, TransitionError> {
        let parent = self.store.fetch_budget(parent_id)?;

        let status = FamilyStatus::from(parent.status);
        let ctx = TransitionContext::default();
        if !self
            .policy
            .legal_actions(status, ctx)
            .contains(&Action::Revise)
        {
            return Err(TransitionError::NotAllowed {
                action: Action::Revise,
                status: status.as_str(),
            });
        }

        let revision = revise(&parent, new_amount, Utc::now())?;
        self.store.record_revision(&revision)?;
        info!(
            parent = %revision.parent_id,
            child = %revision.child.id,
            "budget revision recorded"
        );
        Ok(revision.child)
    }

    /// Confirm or archive a budget through a plain status write.
    pub fn apply_budget(
        &self,
        budget_id: BudgetId,
        action: Action,
    ) -> Result<Budget, TransitionError> {
        let budget = self.store.fetch_budget(budget_id)?;

        let status = FamilyStatus::from(budget.status);
        let ctx = TransitionContext::default();
        if !self.policy.legal_actions(status, ctx).contains(&action) {
            return Err(TransitionError::NotAllowed {
                action,
                status: status.as_str(),
            });
        }

        let target = self
            .policy
            .target_status(status, action)
            .ok_or(TransitionError::NotATransition(action))?;

        let new_status = match target {
            FamilyStatus::Budget(s) => s,
            _ => return Err(TransitionError::NotATransition(action)),
        };

        self.store.apply_budget_transition(budget_id, new_status)?;
        info!(budget = %budget_id, action = %action, to = new_status.as_str(), "budget transition applied");
        Ok(self.store.fetch_budget(budget_id)?)
    }

    /// Export a document snapshot through the opaque PDF seam. Failure is
    /// isolated to the export action and never touches document state.
    pub fn export<E: PdfExporter>(
        &self,
        exporter: &E,
        view: &DocumentView,
    ) -> Result<Vec<u8>, ExportError> {
        exporter.generate(&view.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerdesk_budgets::BudgetStatus;
    use ledgerdesk_core::PaymentId;
    use ledgerdesk_documents::{
        Invoice, InvoiceStatus, Order, OrderStatus, PaymentStatus,
    };
    use ledgerdesk_store::InMemoryStore;
    use ledgerdesk_vocabulary::Tone;

    fn service() -> DocumentService<InMemoryStore> {
        ledgerdesk_observability::init_for_tests();
        DocumentService::new(InMemoryStore::new(), TransitionPolicy::default())
    }

    fn seed_order(service: &DocumentService<InMemoryStore>, status: OrderStatus) -> DocumentId {
        let order = Order {
            id: DocumentId::new(),
            number: "SO-0001".to_string(),
            kind: DocumentKind::SalesOrder,
            status,
            total_amount: 2500,
            archived: false,
        };
        let id = order.id;
        service
            .store()
            .insert_document(TransactionalDocument::Order(order));
        id
    }

    fn seed_invoice(
        service: &DocumentService<InMemoryStore>,
        status: InvoiceStatus,
        total: i64,
        paid: i64,
    ) -> DocumentId {
        let invoice = Invoice {
            id: DocumentId::new(),
            number: "INV-0001".to_string(),
            kind: DocumentKind::CustomerInvoice,
            status,
            total_amount: total,
            paid_amount: paid,
            archived: false,
        };
        let id = invoice.id;
        service
            .store()
            .insert_document(TransactionalDocument::Invoice(invoice));
        id
    }

    fn seed_budget(
        service: &DocumentService<InMemoryStore>,
        status: BudgetStatus,
    ) -> BudgetId {
        let budget = Budget {
            id: BudgetId::new(),
            name: "Ops".to_string(),
            analytic_account: "OPS-2026".to_string(),
            status,
            budgeted_amount: 500,
            achieved_amount: 0,
            parent_budget_id: None,
            created_at: Utc::now(),
        };
        let id = budget.id;
        service.store().insert_budget(budget);
        id
    }

    fn completed_payment(document_id: DocumentId, amount: i64) -> Payment {
        Payment {
            id: PaymentId::new(),
            number: "PAY-0001".to_string(),
            status: PaymentStatus::Completed,
            amount,
            document_id,
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn load_of_an_unknown_id_is_not_found() {
        let service = service();
        let err = service
            .load(DocumentKind::SalesOrder, DocumentId::new())
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[test]
    fn draft_invoice_view_shows_open_balance_and_no_cancel() {
        let service = service();
        let id = seed_invoice(&service, InvoiceStatus::Draft, 1000, 0);

        let view = service.load(DocumentKind::CustomerInvoice, id).unwrap();
        assert_eq!(view.balance.unwrap().outstanding(), 1000);
        assert!(!view.offers(Action::Cancel));
        assert!(!view.offers(Action::Pay));
        assert!(view.offers(Action::Confirm));
        assert_eq!(view.badge.tone, Tone::Neutral);
    }

    #[test]
    fn confirming_a_draft_order_refreshes_the_view() {
        let service = service();
        let id = seed_order(&service, OrderStatus::Draft);
        let view = service.load(DocumentKind::SalesOrder, id).unwrap();

        let after = service.apply(&view, Action::Confirm).unwrap();
        assert_eq!(
            FamilyStatus::from(&after.document),
            FamilyStatus::from(OrderStatus::Confirmed)
        );
        assert!(!after.offers(Action::Confirm));
    }

    #[test]
    fn rejected_write_leaves_the_callers_view_unchanged() {
        let service = service();
        let id = seed_order(&service, OrderStatus::Draft);
        let view = service.load(DocumentKind::SalesOrder, id).unwrap();

        service.store().fail_next_write();
        let err = service.apply(&view, Action::Confirm).unwrap_err();
        assert!(matches!(err, TransitionError::Persistence(_)));

        // The view still shows draft, and so does the store.
        assert_eq!(
            FamilyStatus::from(&view.document),
            FamilyStatus::from(OrderStatus::Draft)
        );
        let reloaded = service.load(DocumentKind::SalesOrder, id).unwrap();
        assert_eq!(
            FamilyStatus::from(&reloaded.document),
            FamilyStatus::from(OrderStatus::Draft)
        );
    }

    #[test]
    fn disallowed_action_is_refused_without_touching_the_store() {
        let service = service();
        let id = seed_order(&service, OrderStatus::Cancelled);
        let view = service.load(DocumentKind::SalesOrder, id).unwrap();

        let err = service.apply(&view, Action::Confirm).unwrap_err();
        assert_eq!(
            err,
            TransitionError::NotAllowed {
                action: Action::Confirm,
                status: "cancelled",
            }
        );
    }

    #[test]
    fn pay_is_offered_but_not_a_direct_transition() {
        let service = service();
        let id = seed_invoice(&service, InvoiceStatus::Posted, 1000, 0);
        let view = service.load(DocumentKind::CustomerInvoice, id).unwrap();

        assert!(view.offers(Action::Pay));
        let err = service.apply(&view, Action::Pay).unwrap_err();
        assert_eq!(err, TransitionError::NotATransition(Action::Pay));
    }

    #[test]
    fn completed_payment_withholds_cancel_under_the_default_stance() {
        let service = service();
        let id = seed_invoice(&service, InvoiceStatus::PartiallyPaid, 1000, 400);
        service.store().insert_payment(completed_payment(id, 400));

        let view = service.load(DocumentKind::CustomerInvoice, id).unwrap();
        assert!(!view.offers(Action::Cancel));
        assert!(view.offers(Action::Pay));

        let err = service.apply(&view, Action::Cancel).unwrap_err();
        assert!(matches!(err, TransitionError::NotAllowed { .. }));
    }

    #[test]
    fn revising_a_confirmed_budget_creates_the_linked_child() {
        let service = service();
        let parent_id = seed_budget(&service, BudgetStatus::Confirmed);

        let child = service.revise_budget(parent_id, 900).unwrap();
        assert_eq!(child.parent_budget_id, Some(parent_id));
        assert_eq!(child.status, BudgetStatus::Draft);
        assert_eq!(child.budgeted_amount, 900);

        let parent = service.store().fetch_budget(parent_id).unwrap();
        assert_eq!(parent.status, BudgetStatus::Revised);
    }

    #[test]
    fn revising_a_draft_budget_is_refused_by_the_policy() {
        let service = service();
        let parent_id = seed_budget(&service, BudgetStatus::Draft);

        let err = service.revise_budget(parent_id, 900).unwrap_err();
        assert_eq!(
            err,
            TransitionError::NotAllowed {
                action: Action::Revise,
                status: "draft",
            }
        );
    }

    #[test]
    fn budget_confirm_and_archive_walk_the_lifecycle() {
        let service = service();
        let id = seed_budget(&service, BudgetStatus::Draft);

        let confirmed = service.apply_budget(id, Action::Confirm).unwrap();
        assert_eq!(confirmed.status, BudgetStatus::Confirmed);

        let archived = service.apply_budget(id, Action::Archive).unwrap();
        assert_eq!(archived.status, BudgetStatus::Archived);

        let err = service.apply_budget(id, Action::Archive).unwrap_err();
        assert!(matches!(err, TransitionError::NotAllowed { .. }));
    }

    #[test]
    fn export_failure_is_isolated_from_document_state() {
        struct FailingExporter;
        impl PdfExporter for FailingExporter {
            fn generate(
                &self,
                _doc: &TransactionalDocument,
            ) -> Result<Vec<u8>, ExportError> {
                Err(ExportError("renderer unavailable".to_string()))
            }
        }

        let service = service();
        let id = seed_order(&service, OrderStatus::Confirmed);
        let view = service.load(DocumentKind::SalesOrder, id).unwrap();

        let err = service.export(&FailingExporter, &view).unwrap_err();
        assert_eq!(err, ExportError("renderer unavailable".to_string()));

        let reloaded = service.load(DocumentKind::SalesOrder, id).unwrap();
        assert_eq!(reloaded.document, view.document);
    }
}
