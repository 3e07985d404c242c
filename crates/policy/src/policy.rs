//! Legal-action derivation per (family status, context).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use ledgerdesk_budgets::BudgetStatus;
use ledgerdesk_documents::{
    DocumentFamily, InvoiceStatus, OrderStatus, TransactionalDocument,
};

use crate::action::Action;

/// The (family, status) pair as one closed type, so every policy match is
/// total and a new status cannot be silently mishandled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyStatus {
    Order(OrderStatus),
    Invoice(InvoiceStatus),
    Budget(BudgetStatus),
}

impl FamilyStatus {
    pub fn family(self) -> DocumentFamily {
        match self {
            FamilyStatus::Order(_) => DocumentFamily::Order,
            FamilyStatus::Invoice(_) => DocumentFamily::Invoice,
            FamilyStatus::Budget(_) => DocumentFamily::Budget,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FamilyStatus::Order(s) => s.as_str(),
            FamilyStatus::Invoice(s) => s.as_str(),
            FamilyStatus::Budget(s) => s.as_str(),
        }
    }
}

impl From<OrderStatus> for FamilyStatus {
    fn from(status: OrderStatus) -> Self {
        FamilyStatus::Order(status)
    }
}

impl From<InvoiceStatus> for FamilyStatus {
    fn from(status: InvoiceStatus) -> Self {
        FamilyStatus::Invoice(status)
    }
}

impl From<BudgetStatus> for FamilyStatus {
    fn from(status: BudgetStatus) -> Self {
        FamilyStatus::Budget(status)
    }
}

impl From<&TransactionalDocument> for FamilyStatus {
    fn from(doc: &TransactionalDocument) -> Self {
        match doc {
            TransactionalDocument::Order(o) => FamilyStatus::Order(o.status),
            TransactionalDocument::Invoice(i) => FamilyStatus::Invoice(i.status),
        }
    }
}

/// Per-document facts the policy needs beyond the status itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionContext {
    /// Archived documents are read-only regardless of status.
    pub archived: bool,
    /// Whether any payment against the document has completed. Supplied by
    /// the caller from the fetched payment rows.
    pub has_completed_payment: bool,
}

impl TransitionContext {
    pub fn new(archived: bool) -> Self {
        Self {
            archived,
            has_completed_payment: false,
        }
    }

    pub fn with_completed_payment(mut self, has_completed_payment: bool) -> Self {
        self.has_completed_payment = has_completed_payment;
        self
    }
}

/// Stance on offering Cancel once a completed payment exists.
///
/// The source systems never enforced this consistently, so the stance is
/// configuration rather than a hardcoded rule: `Block` withholds the action,
/// `Allow` keeps offering it and lets the backend decide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelAfterPayment {
    #[default]
    Block,
    Allow,
}

/// Policy configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub cancel_after_payment: CancelAfterPayment,
}

/// The transition policy: a pure, total function from (status, context) to
/// the set of legal actions. It holds no mutable state and cannot fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionPolicy {
    config: PolicyConfig,
}

impl TransitionPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> PolicyConfig {
        self.config
    }

    /// Which actions the UI may offer for a document in `status` under `ctx`.
    ///
    /// Archived documents only ever expose the `View` capability. The policy
    /// offers actions; it does not promise the backend will accept them.
    pub fn legal_actions(
        &self,
        status: FamilyStatus,
        ctx: TransitionContext,
    ) -> BTreeSet<Action> {
        let mut actions = BTreeSet::from([Action::View]);

        if ctx.archived {
            return actions;
        }

        match status {
            FamilyStatus::Order(OrderStatus::Draft) => {
                actions.extend([Action::Save, Action::Confirm, Action::Cancel]);
            }
            FamilyStatus::Order(OrderStatus::Confirmed) => {
                actions.extend([Action::Cancel, Action::CancelRequest]);
            }
            FamilyStatus::Order(OrderStatus::Cancelled) => {}

            FamilyStatus::Invoice(InvoiceStatus::Draft) => {
                // No cancel before posting: a draft is withdrawn by never
                // posting it, not by cancelling.
                actions.extend([Action::Save, Action::Confirm]);
            }
            FamilyStatus::Invoice(InvoiceStatus::Posted) => {
                actions.extend([Action::Pay, Action::CancelRequest]);
                if self.cancel_offered(ctx) {
                    actions.insert(Action::Cancel);
                }
            }
            FamilyStatus::Invoice(InvoiceStatus::PartiallyPaid) => {
                actions.insert(Action::Pay);
                if self.cancel_offered(ctx) {
                    actions.insert(Action::Cancel);
                }
            }
            FamilyStatus::Invoice(InvoiceStatus::Paid)
            | FamilyStatus::Invoice(InvoiceStatus::Cancelled) => {}

            FamilyStatus::Budget(BudgetStatus::Draft) => {
                actions.extend([Action::Save, Action::Confirm]);
            }
            FamilyStatus::Budget(BudgetStatus::Confirmed) => {
                actions.extend([Action::Revise, Action::Archive]);
            }
            FamilyStatus::Budget(BudgetStatus::Revised) => {
                actions.insert(Action::Archive);
            }
            FamilyStatus::Budget(BudgetStatus::Archived) => {}
        }

        actions
    }

    fn cancel_offered(&self, ctx: TransitionContext) -> bool {
        match self.config.cancel_after_payment {
            CancelAfterPayment::Allow => true,
            CancelAfterPayment::Block => !ctx.has_completed_payment,
        }
    }

    /// The status a plain transition write lands on, when the action maps to
    /// one. `Pay` has no static target (partially paid vs paid depends on
    /// amounts), and `Revise` goes through the revision operation because it
    /// creates a record besides writing the parent's status.
    pub fn target_status(
        &self,
        status: FamilyStatus,
        action: Action,
    ) -> Option<FamilyStatus> {
        match (status, action) {
            (FamilyStatus::Order(OrderStatus::Draft), Action::Confirm) => {
                Some(OrderStatus::Confirmed.into())
            }
            (FamilyStatus::Order(OrderStatus::Draft), Action::Cancel)
            | (FamilyStatus::Order(OrderStatus::Confirmed), Action::Cancel) => {
                Some(OrderStatus::Cancelled.into())
            }

            (FamilyStatus::Invoice(InvoiceStatus::Draft), Action::Confirm) => {
                Some(InvoiceStatus::Posted.into())
            }
            (FamilyStatus::Invoice(InvoiceStatus::Posted), Action::Cancel)
            | (FamilyStatus::Invoice(InvoiceStatus::PartiallyPaid), Action::Cancel) => {
                Some(InvoiceStatus::Cancelled.into())
            }

            (FamilyStatus::Budget(BudgetStatus::Draft), Action::Confirm) => {
                Some(BudgetStatus::Confirmed.into())
            }
            (FamilyStatus::Budget(BudgetStatus::Confirmed), Action::Archive)
            | (FamilyStatus::Budget(BudgetStatus::Revised), Action::Archive) => {
                Some(BudgetStatus::Archived.into())
            }

            _ => None,
        }
    }
}
