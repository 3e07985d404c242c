use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use ledgerdesk_core::{BudgetId, DomainError, Entity};

/// Budget status lifecycle.
///
/// `Archived` is terminal here (unlike transactional documents, where the
/// archived flag sits next to the status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Draft,
    Confirmed,
    Revised,
    Archived,
}

impl BudgetStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BudgetStatus::Draft => "draft",
            BudgetStatus::Confirmed => "confirmed",
            BudgetStatus::Revised => "revised",
            BudgetStatus::Archived => "archived",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BudgetStatus::Archived)
    }
}

impl FromStr for BudgetStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(BudgetStatus::Draft),
            "confirmed" => Ok(BudgetStatus::Confirmed),
            "revised" => Ok(BudgetStatus::Revised),
            "archived" => Ok(BudgetStatus::Archived),
            other => Err(DomainError::validation(format!(
                "BudgetStatus: unknown status '{other}'"
            ))),
        }
    }
}

impl core::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Budget snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub name: String,
    /// Analytic account the budget tracks, carried across revisions.
    pub analytic_account: String,
    pub status: BudgetStatus,
    /// Planned amount in smallest currency unit.
    pub budgeted_amount: i64,
    /// Realized amount in smallest currency unit.
    pub achieved_amount: i64,
    /// Predecessor in the revision chain. Always points strictly backward
    /// in creation order, so the chain is acyclic.
    pub parent_budget_id: Option<BudgetId>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Budget {
    type Id = BudgetId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Result of revising a budget: the status to write back onto the parent and
/// the new child record to create. The parent snapshot itself is untouched;
/// persisting both is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub parent_id: BudgetId,
    pub parent_status: BudgetStatus,
    pub child: Budget,
}

/// Revise a confirmed budget.
///
/// Append-only: the child gets a fresh id, the parent's analytic account, the
/// new editable amount, and `parent_budget_id` pointing at the parent. The
/// parent is only ever marked `Revised` — no amounts change on it, and a
/// grandchild links to the child, never back to the grandparent.
pub fn revise(
    parent: &Budget,
    new_amount: i64,
    now: DateTime<Utc>,
) -> Result<Revision, DomainError> {
    if parent.status != BudgetStatus::Confirmed {
        return Err(DomainError::invariant(format!(
            "only confirmed budgets can be revised (status: {})",
            parent.status
        )));
    }

    if new_amount < 0 {
        return Err(DomainError::validation(
            "budgeted amount must not be negative",
        ));
    }

    let child = Budget {
        id: BudgetId::new(),
        name: parent.name.clone(),
        analytic_account: parent.analytic_account.clone(),
        status: BudgetStatus::Draft,
        budgeted_amount: new_amount,
        achieved_amount: 0,
        parent_budget_id: Some(parent.id),
        created_at: now,
    };

    Ok(Revision {
        parent_id: parent.id,
        parent_status: BudgetStatus::Revised,
        child,
    })
}
