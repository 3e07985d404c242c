//! Transactional document snapshots.

use serde::{Deserialize, Serialize};

use ledgerdesk_core::{DocumentId, Entity};

use crate::balance::Balance;
use crate::status::{InvoiceStatus, OrderStatus};

/// Concrete page-level document kind, as addressed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    PurchaseOrder,
    SalesOrder,
    VendorBill,
    CustomerInvoice,
}

/// Lifecycle family a record belongs to. Orders and invoices are the two
/// transactional families; payments and budgets have their own vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFamily {
    Order,
    Invoice,
    Payment,
    Budget,
}

impl DocumentKind {
    pub fn family(self) -> DocumentFamily {
        match self {
            DocumentKind::PurchaseOrder | DocumentKind::SalesOrder => DocumentFamily::Order,
            DocumentKind::VendorBill | DocumentKind::CustomerInvoice => DocumentFamily::Invoice,
        }
    }
}

/// Purchase or sales order snapshot. Orders carry no paid amount; payment
/// happens against the bill/invoice derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: DocumentId,
    pub number: String,
    pub kind: DocumentKind,
    pub status: OrderStatus,
    /// Total in smallest currency unit (e.g., cents).
    pub total_amount: i64,
    /// Orthogonal to `status`: archived documents are read-only.
    pub archived: bool,
}

/// Vendor bill or customer invoice snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: DocumentId,
    pub number: String,
    pub kind: DocumentKind,
    pub status: InvoiceStatus,
    /// Total in smallest currency unit (e.g., cents).
    pub total_amount: i64,
    /// Sum of completed payments, smallest currency unit.
    pub paid_amount: i64,
    /// Orthogonal to `status`: archived documents are read-only.
    pub archived: bool,
}

impl Invoice {
    /// Outstanding balance, recomputed from the snapshot on every call.
    pub fn balance(&self) -> Balance {
        Balance::of(self.total_amount, self.paid_amount)
    }

    /// A document accepts payment only once posted and while something is
    /// still owed. Drafts and cancelled documents never do, whatever the
    /// balance says.
    pub fn is_payable(&self) -> bool {
        self.balance().outstanding() > 0
            && !matches!(self.status, InvoiceStatus::Draft | InvoiceStatus::Cancelled)
    }
}

impl Entity for Order {
    type Id = DocumentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Entity for Invoice {
    type Id = DocumentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// What a document fetch returns: one of the two transactional families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionalDocument {
    Order(Order),
    Invoice(Invoice),
}

impl TransactionalDocument {
    pub fn id(&self) -> DocumentId {
        match self {
            TransactionalDocument::Order(o) => o.id,
            TransactionalDocument::Invoice(i) => i.id,
        }
    }

    pub fn number(&self) -> &str {
        match self {
            TransactionalDocument::Order(o) => &o.number,
            TransactionalDocument::Invoice(i) => &i.number,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            TransactionalDocument::Order(o) => o.kind,
            TransactionalDocument::Invoice(i) => i.kind,
        }
    }

    pub fn archived(&self) -> bool {
        match self {
            TransactionalDocument::Order(o) => o.archived,
            TransactionalDocument::Invoice(i) => i.archived,
        }
    }

    pub fn as_invoice(&self) -> Option<&Invoice> {
        match self {
            TransactionalDocument::Invoice(i) => Some(i),
            TransactionalDocument::Order(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_invoice(status: InvoiceStatus, total: i64, paid: i64) -> Invoice {
        Invoice {
            id: DocumentId::new(),
            number: "INV-0001".to_string(),
            kind: DocumentKind::CustomerInvoice,
            status,
            total_amount: total,
            paid_amount: paid,
            archived: false,
        }
    }

    #[test]
    fn kinds_map_to_their_families() {
        assert_eq!(DocumentKind::PurchaseOrder.family(), DocumentFamily::Order);
        assert_eq!(DocumentKind::SalesOrder.family(), DocumentFamily::Order);
        assert_eq!(DocumentKind::VendorBill.family(), DocumentFamily::Invoice);
        assert_eq!(
            DocumentKind::CustomerInvoice.family(),
            DocumentFamily::Invoice
        );
    }

    #[test]
    fn draft_invoice_with_open_balance_is_not_payable() {
        let invoice = test_invoice(InvoiceStatus::Draft, 1000, 0);
        assert_eq!(invoice.balance().outstanding(), 1000);
        assert!(!invoice.is_payable());
    }

    #[test]
    fn posted_invoice_with_open_balance_is_payable() {
        let invoice = test_invoice(InvoiceStatus::Posted, 1000, 250);
        assert!(invoice.is_payable());
    }

    #[test]
    fn cancelled_invoice_is_never_payable() {
        let invoice = test_invoice(InvoiceStatus::Cancelled, 1000, 0);
        assert!(!invoice.is_payable());
    }

    #[test]
    fn fully_paid_invoice_is_not_payable() {
        let invoice = test_invoice(InvoiceStatus::Paid, 1000, 1000);
        assert!(!invoice.is_payable());
    }
}
