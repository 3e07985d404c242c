//! Payment records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ledgerdesk_core::{DocumentId, Entity, PaymentId};

use crate::status::PaymentStatus;

/// A payment against exactly one transactional document.
///
/// Payments never mutate in place: a failed or cancelled document keeps its
/// payment rows as historical records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub number: String,
    pub status: PaymentStatus,
    /// Amount in smallest currency unit.
    pub amount: i64,
    pub document_id: DocumentId,
    pub recorded_at: DateTime<Utc>,
}

impl Payment {
    pub fn is_completed(&self) -> bool {
        self.status == PaymentStatus::Completed
    }
}

impl Entity for Payment {
    type Id = PaymentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// True if any payment in the slice has completed. Drives the
/// cancel-after-payment stance in the transition policy.
pub fn has_completed_payment(payments: &[Payment]) -> bool {
    payments.iter().any(Payment::is_completed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_payment(status: PaymentStatus) -> Payment {
        Payment {
            id: PaymentId::new(),
            number: "PAY-0001".to_string(),
            status,
            amount: 500,
            document_id: DocumentId::new(),
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn completed_detection_ignores_pending_and_failed() {
        let payments = vec![
            test_payment(PaymentStatus::Pending),
            test_payment(PaymentStatus::Failed),
        ];
        assert!(!has_completed_payment(&payments));

        let mut with_completed = payments.clone();
        with_completed.push(test_payment(PaymentStatus::Completed));
        assert!(has_completed_payment(&with_completed));
    }
}
