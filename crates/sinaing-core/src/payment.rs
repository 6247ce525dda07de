//! # Payment Rules
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Unpaid ──pay(CreditCard | OnlinePayment)──► Paid                      │
//! │    │                                           │                        │
//! │    └── declined: stays Unpaid                  └── pay again: no-op    │
//! │                                                                         │
//! │  Amount due is flat:                                                   │
//! │    with a menu order   ₱1500                                           │
//! │    reservation only    ₱500                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The flat rate ignores what was actually ordered. The itemized subtotal
//! is reported next to it in the summary but never charged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::PaymentMethod;
use crate::validation::{validate_card_number, validate_transaction_id};

pub const FLAT_RATE_WITH_MENU: Money = Money::from_pesos(1500);
pub const FLAT_RATE_RESERVATION_ONLY: Money = Money::from_pesos(500);

/// Amount charged for the active reservation.
pub fn amount_due(has_menu_order: bool) -> Money {
    if has_menu_order {
        FLAT_RATE_WITH_MENU
    } else {
        FLAT_RATE_RESERVATION_ONLY
    }
}

/// What the operator entered at the payment prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentRequest {
    CreditCard { card_number: String },
    OnlinePayment { transaction_id: String },
}

impl PaymentRequest {
    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentRequest::CreditCard { .. } => PaymentMethod::CreditCard,
            PaymentRequest::OnlinePayment { .. } => PaymentMethod::OnlinePayment,
        }
    }
}

/// Proof of a completed payment, kept on the reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub receipt_id: Uuid,
    pub method: PaymentMethod,
    pub amount: Money,
    /// Masked card number or the online transaction ID.
    pub reference: String,
    pub paid_at: DateTime<Utc>,
}

/// Result of a payment attempt that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Completed(PaymentReceipt),
    /// Nothing happened: the reservation was paid earlier.
    AlreadyPaid,
}

/// Checks the payment details and issues a receipt for `amount`.
///
/// ## Rules
/// - Credit card: number length within 13–19 characters
/// - Online payment: transaction ID non-empty
pub fn authorize(request: &PaymentRequest, amount: Money) -> CoreResult<PaymentReceipt> {
    let reference = match request {
        PaymentRequest::CreditCard { card_number } => {
            validate_card_number(card_number).map_err(|_| CoreError::PaymentDeclined {
                reason: "Invalid credit card number".to_string(),
            })?;
            mask_card_number(card_number)
        }
        PaymentRequest::OnlinePayment { transaction_id } => {
            validate_transaction_id(transaction_id).map_err(|_| CoreError::PaymentDeclined {
                reason: "Invalid Transaction ID".to_string(),
            })?;
            transaction_id.clone()
        }
    };

    Ok(PaymentReceipt {
        receipt_id: Uuid::new_v4(),
        method: request.method(),
        amount,
        reference,
        paid_at: Utc::now(),
    })
}

/// Keeps the last four characters: `"**** 1111"`.
pub fn mask_card_number(card_number: &str) -> String {
    let chars: Vec<char> = card_number.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("**** {}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_due_is_flat() {
        assert_eq!(amount_due(true), Money::from_pesos(1500));
        assert_eq!(amount_due(false), Money::from_pesos(500));
    }

    #[test]
    fn test_authorize_credit_card() {
        let request = PaymentRequest::CreditCard {
            card_number: "4111111111111".to_string(),
        };
        let receipt = authorize(&request, amount_due(false)).unwrap();
        assert_eq!(receipt.method, PaymentMethod::CreditCard);
        assert_eq!(receipt.amount, Money::from_pesos(500));
        assert_eq!(receipt.reference, "**** 1111");
    }

    #[test]
    fn test_authorize_rejects_short_card() {
        let request = PaymentRequest::CreditCard {
            card_number: "411111111111".to_string(),
        };
        assert!(matches!(
            authorize(&request, amount_due(false)),
            Err(CoreError::PaymentDeclined { .. })
        ));
    }

    #[test]
    fn test_authorize_online_payment() {
        let ok = PaymentRequest::OnlinePayment {
            transaction_id: "GCASH-778".to_string(),
        };
        assert_eq!(authorize(&ok, amount_due(true)).unwrap().reference, "GCASH-778");

        let empty = PaymentRequest::OnlinePayment {
            transaction_id: String::new(),
        };
        assert!(authorize(&empty, amount_due(true)).is_err());
    }

    #[test]
    fn test_mask_short_input() {
        assert_eq!(mask_card_number("12"), "**** 12");
    }
}
