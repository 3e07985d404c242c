//! `ledgerdesk-policy` — the transition policy.
//!
//! The state machine that every document page used to encode implicitly as
//! "which button appears for this status", extracted into one pure, total,
//! independently testable function. The policy decides which actions are
//! *offered*; whether the backend accepts the resulting write is the store's
//! business.

pub mod action;
pub mod policy;

pub use action::Action;
pub use policy::{
    CancelAfterPayment, FamilyStatus, PolicyConfig, TransitionContext, TransitionPolicy,
};
