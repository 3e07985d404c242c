//! Status badges: label + semantic tone per (family, status).

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use ledgerdesk_budgets::BudgetStatus;
use ledgerdesk_documents::{
    DocumentFamily, InvoiceStatus, OrderStatus, PaymentStatus,
};

/// Semantic tone of a badge. Presentation maps these to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Neutral,
    Positive,
    Warning,
    Negative,
}

/// Display label + tone for a status value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBadge {
    pub label: Cow<'static, str>,
    pub tone: Tone,
}

impl StatusBadge {
    fn known(label: &'static str, tone: Tone) -> Self {
        Self {
            label: Cow::Borrowed(label),
            tone,
        }
    }

    /// Fail-closed rendering for a status value the vocabulary does not
    /// know: show the raw value with a neutral tone. Presentation must never
    /// crash on an unrecognized status.
    fn unknown(raw: &str) -> Self {
        Self {
            label: Cow::Owned(raw.to_string()),
            tone: Tone::Neutral,
        }
    }
}

impl From<OrderStatus> for StatusBadge {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Draft => StatusBadge::known("Draft", Tone::Neutral),
            OrderStatus::Confirmed => StatusBadge::known("Confirmed", Tone::Positive),
            OrderStatus::Cancelled => StatusBadge::known("Cancelled", Tone::Negative),
        }
    }
}

impl From<InvoiceStatus> for StatusBadge {
    fn from(status: InvoiceStatus) -> Self {
        match status {
            InvoiceStatus::Draft => StatusBadge::known("Draft", Tone::Neutral),
            InvoiceStatus::Posted => StatusBadge::known("Posted", Tone::Positive),
            InvoiceStatus::PartiallyPaid => {
                StatusBadge::known("Partially Paid", Tone::Warning)
            }
            InvoiceStatus::Paid => StatusBadge::known("Paid", Tone::Positive),
            InvoiceStatus::Cancelled => StatusBadge::known("Cancelled", Tone::Negative),
        }
    }
}

impl From<PaymentStatus> for StatusBadge {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Pending => StatusBadge::known("Pending", Tone::Warning),
            PaymentStatus::Completed => StatusBadge::known("Completed", Tone::Positive),
            PaymentStatus::Failed => StatusBadge::known("Failed", Tone::Negative),
        }
    }
}

impl From<BudgetStatus> for StatusBadge {
    fn from(status: BudgetStatus) -> Self {
        match status {
            BudgetStatus::Draft => StatusBadge::known("Draft", Tone::Neutral),
            BudgetStatus::Confirmed => StatusBadge::known("Confirmed", Tone::Positive),
            BudgetStatus::Revised => StatusBadge::known("Revised", Tone::Warning),
            BudgetStatus::Archived => StatusBadge::known("Archived", Tone::Neutral),
        }
    }
}

/// Resolve the badge for a raw status value as stored by the backend.
///
/// Known values get their curated label and tone; anything else falls back
/// to the raw string with `Tone::Neutral`.
pub fn badge(family: DocumentFamily, raw: &str) -> StatusBadge {
    match family {
        DocumentFamily::Order => raw
            .parse::<OrderStatus>()
            .map(StatusBadge::from)
            .unwrap_or_else(|_| StatusBadge::unknown(raw)),
        DocumentFamily::Invoice => raw
            .parse::<InvoiceStatus>()
            .map(StatusBadge::from)
            .unwrap_or_else(|_| StatusBadge::unknown(raw)),
        DocumentFamily::Payment => raw
            .parse::<PaymentStatus>()
            .map(StatusBadge::from)
            .unwrap_or_else(|_| StatusBadge::unknown(raw)),
        DocumentFamily::Budget => raw
            .parse::<BudgetStatus>()
            .map(StatusBadge::from)
            .unwrap_or_else(|_| StatusBadge::unknown(raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_get_curated_labels() {
        let badge = badge(DocumentFamily::Invoice, "partially_paid");
        assert_eq!(badge.label, "Partially Paid");
        assert_eq!(badge.tone, Tone::Warning);
    }

    #[test]
    fn unknown_status_fails_closed_to_neutral_raw_value() {
        let badge = badge(DocumentFamily::Order, "teleported");
        assert_eq!(badge.label, "teleported");
        assert_eq!(badge.tone, Tone::Neutral);
    }

    #[test]
    fn same_wire_value_can_differ_in_tone_across_families() {
        // "confirmed" is positive for both, but "draft" stays neutral while
        // a payment "pending" warns — the family is part of the key.
        assert_eq!(badge(DocumentFamily::Budget, "confirmed").tone, Tone::Positive);
        assert_eq!(badge(DocumentFamily::Payment, "pending").tone, Tone::Warning);
        assert_eq!(badge(DocumentFamily::Invoice, "draft").tone, Tone::Neutral);
    }

    #[test]
    fn every_known_status_has_a_badge() {
        for raw in ["draft", "confirmed", "cancelled"] {
            assert_ne!(badge(DocumentFamily::Order, raw).label, "");
        }
        for raw in ["draft", "posted", "partially_paid", "paid", "cancelled"] {
            assert_ne!(badge(DocumentFamily::Invoice, raw).label, "");
        }
        for raw in ["pending", "completed", "failed"] {
            assert_ne!(badge(DocumentFamily::Payment, raw).label, "");
        }
        for raw in ["draft", "confirmed", "revised", "archived"] {
            assert_ne!(badge(DocumentFamily::Budget, raw).label, "");
        }
    }

    #[test]
    fn terminal_negative_states_read_negative() {
        assert_eq!(badge(DocumentFamily::Invoice, "cancelled").tone, Tone::Negative);
        assert_eq!(badge(DocumentFamily::Payment, "failed").tone, Tone::Negative);
    }
}
