//! Balance calculator.

use serde::{Deserialize, Serialize};

use ledgerdesk_core::ValueObject;

/// Outstanding-balance calculation over a document's totals.
///
/// Amounts are smallest-currency-unit integers. The calculator does not
/// validate upstream data: an overpaid document yields a negative balance,
/// which is representable and flagged rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    total: i64,
    paid: i64,
}

impl Balance {
    pub fn of(total: i64, paid: i64) -> Self {
        Self { total, paid }
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn paid(&self) -> i64 {
        self.paid
    }

    /// What is still owed. Recomputed on every call, never cached.
    pub fn outstanding(&self) -> i64 {
        self.total - self.paid
    }

    /// Paid amount exceeds the total. Surfaced to the user, not rejected.
    pub fn is_overpaid(&self) -> bool {
        self.outstanding() < 0
    }

    pub fn is_settled(&self) -> bool {
        self.outstanding() == 0
    }
}

impl ValueObject for Balance {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn outstanding_is_total_minus_paid() {
        let balance = Balance::of(1000, 250);
        assert_eq!(balance.outstanding(), 750);
        assert!(!balance.is_overpaid());
        assert!(!balance.is_settled());
    }

    #[test]
    fn overpayment_is_flagged_not_rejected() {
        let balance = Balance::of(1000, 1200);
        assert_eq!(balance.outstanding(), -200);
        assert!(balance.is_overpaid());
    }

    #[test]
    fn settled_when_paid_in_full() {
        let balance = Balance::of(1000, 1000);
        assert!(balance.is_settled());
        assert!(!balance.is_overpaid());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: outstanding is always the exact difference for amounts
        /// in the non-negative range callers are contracted to supply.
        #[test]
        fn outstanding_matches_subtraction(
            total in 0i64..1_000_000_000i64,
            paid in 0i64..1_000_000_000i64,
        ) {
            let balance = Balance::of(total, paid);
            prop_assert_eq!(balance.outstanding(), total - paid);
            prop_assert_eq!(balance.is_overpaid(), paid > total);
        }
    }
}
