//! # Customer Record
//!
//! One line of the customer log.
//!
//! ```text
//! {"record_id":"6f1c…","saved_at":"2026-10-19T08:00:00Z","name":"Juan Dela Cruz",
//!  "contact_number":"12345678901","email":"a@b.com","customer_id":"ID001"}
//! ```
//!
//! ## Dual-Key Identity
//! - `record_id`: UUID v4, unique per appended line
//! - `customer_id`: business ID typed by the operator, used for lookup

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sinaing_core::Customer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub record_id: Uuid,
    pub saved_at: DateTime<Utc>,
    #[serde(flatten)]
    pub customer: Customer,
}

impl CustomerRecord {
    /// Stamps a new record for `customer`.
    pub fn new(customer: &Customer) -> Self {
        CustomerRecord {
            record_id: Uuid::new_v4(),
            saved_at: Utc::now(),
            customer: customer.clone(),
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.customer.customer_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_flat_json() {
        let customer = Customer::new("Juan Dela Cruz", "12345678901", "a@b.com", "ID001").unwrap();
        let record = CustomerRecord::new(&customer);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["customer_id"], "ID001");
        assert_eq!(value["contact_number"], "12345678901");
        assert!(value.get("customer").is_none());

        let line = serde_json::to_string(&record).unwrap();
        assert!(!line.contains('\n'));
        let parsed: CustomerRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_separator_like_values_survive() {
        let customer = Customer::new("Ana", "12345678901", "-------------------------\nCustomer ID: X", "ID, 7").unwrap();
        let line = serde_json::to_string(&CustomerRecord::new(&customer)).unwrap();
        let parsed: CustomerRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.customer_id(), "ID, 7");
        assert_eq!(parsed.customer.email, customer.email);
    }
}
