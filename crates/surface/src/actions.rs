//! Renderable actions: label, confirmation gate, confirmation copy.

use serde::{Deserialize, Serialize};

use ledgerdesk_policy::{Action, FamilyStatus, TransitionContext, TransitionPolicy};

/// What a button needs to render and gate an action.
///
/// The confirmation copy is part of the contract: it is the one place the
/// user is told about irreversible side effects before triggering them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableAction {
    pub action: Action,
    pub label: &'static str,
    pub requires_confirmation: bool,
    pub confirmation_copy: Option<&'static str>,
}

impl AvailableAction {
    fn of(action: Action) -> Self {
        Self {
            action,
            label: label(action),
            requires_confirmation: action.requires_confirmation(),
            confirmation_copy: confirmation_copy(action),
        }
    }
}

fn label(action: Action) -> &'static str {
    match action {
        Action::Save => "Save",
        Action::Confirm => "Confirm",
        Action::Revise => "Revise",
        Action::Archive => "Archive",
        Action::Cancel => "Cancel",
        Action::Pay => "Register Payment",
        Action::CancelRequest => "Request Cancellation",
        Action::View => "View",
    }
}

fn confirmation_copy(action: Action) -> Option<&'static str> {
    match action {
        Action::Confirm => Some(
            "This will confirm the document and lock it for further editing. Continue?",
        ),
        Action::Revise => Some(
            "This will create a new revision with an editable amount. \
             The current version will be marked as revised. Continue?",
        ),
        Action::Archive => Some(
            "This will archive the record. Archived records are read-only. Continue?",
        ),
        _ => None,
    }
}

/// The ordered list of actions to render for a document in `status` under
/// `ctx`. `View` is a capability, not a button, and is filtered out.
pub fn available_actions(
    policy: &TransitionPolicy,
    status: FamilyStatus,
    ctx: TransitionContext,
) -> Vec<AvailableAction> {
    policy
        .legal_actions(status, ctx)
        .into_iter()
        .filter(|action| *action != Action::View)
        .map(AvailableAction::of)
        .collect()
}
