//! Status lifecycles for transactional documents and payments.
//!
//! The backend stores statuses as lowercase strings; these enums are the
//! closed vocabulary each family accepts. Parsing an unknown string is a
//! `Validation` error — presentation decides how to fail closed.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use ledgerdesk_core::DomainError;

/// Order status lifecycle (purchase and sales orders).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    Confirmed,
    Cancelled,
}

/// Bill/invoice status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Posted,
    PartiallyPaid,
    Paid,
    Cancelled,
}

/// Payment sub-status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Draft => "draft",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Terminal states admit no further transition.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }
}

impl InvoiceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Posted => "posted",
            InvoiceStatus::PartiallyPaid => "partially_paid",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, InvoiceStatus::Paid | InvoiceStatus::Cancelled)
    }
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }
}

macro_rules! impl_status_from_str {
    ($t:ty, $name:literal, [$($variant:expr),+ $(,)?]) => {
        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s == $variant.as_str() {
                        return Ok($variant);
                    }
                )+
                Err(DomainError::validation(format!(
                    "{}: unknown status '{}'",
                    $name, s
                )))
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_status_from_str!(
    OrderStatus,
    "OrderStatus",
    [OrderStatus::Draft, OrderStatus::Confirmed, OrderStatus::Cancelled]
);
impl_status_from_str!(
    InvoiceStatus,
    "InvoiceStatus",
    [
        InvoiceStatus::Draft,
        InvoiceStatus::Posted,
        InvoiceStatus::PartiallyPaid,
        InvoiceStatus::Paid,
        InvoiceStatus::Cancelled,
    ]
);
impl_status_from_str!(
    PaymentStatus,
    "PaymentStatus",
    [PaymentStatus::Pending, PaymentStatus::Completed, PaymentStatus::Failed]
);
