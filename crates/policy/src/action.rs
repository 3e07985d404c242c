//! User-facing actions a document can offer.

use serde::{Deserialize, Serialize};

/// Everything a document page can offer the user.
///
/// `View` is a capability, not a button: it is what remains when a document
/// is archived or terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Save,
    Confirm,
    Revise,
    Archive,
    Cancel,
    Pay,
    CancelRequest,
    View,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Save => "save",
            Action::Confirm => "confirm",
            Action::Revise => "revise",
            Action::Archive => "archive",
            Action::Cancel => "cancel",
            Action::Pay => "pay",
            Action::CancelRequest => "cancel_request",
            Action::View => "view",
        }
    }

    /// Whether the UI must interpose an explicit confirmation dialog before
    /// invoking the action. Confirm, revise and archive communicate
    /// irreversible side effects; save and cancel do not gate.
    pub fn requires_confirmation(self) -> bool {
        matches!(self, Action::Confirm | Action::Revise | Action::Archive)
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
