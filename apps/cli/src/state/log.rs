//! # Customer Log State
//!
//! Wraps the [`CustomerLog`] and owns reservation lookup by customer ID.
//!
//! ## Lookup Order
//! ```text
//! search_reservation_by_id("ID001")
//!      │
//!      ├── session.find_customer("ID001") ── hit ──► InSession(customer)
//!      │
//!      └── miss ─► log.find_by_customer_id("ID001")
//!                       ├── hit  ──► InLog(record)
//!                       └── miss ──► NotFound
//! ```

use tracing::debug;

use crate::error::AppResult;
use sinaing_core::{Customer, ReservationSession};
use sinaing_store::{CustomerLog, CustomerRecord};

/// Where a lookup found the customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Entered earlier in this run.
    InSession(Customer),
    /// Only present in the customer log from an earlier run.
    InLog(CustomerRecord),
    NotFound,
}

impl LookupOutcome {
    pub fn customer(&self) -> Option<&Customer> {
        match self {
            LookupOutcome::InSession(customer) => Some(customer),
            LookupOutcome::InLog(record) => Some(&record.customer),
            LookupOutcome::NotFound => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogState {
    log: CustomerLog,
}

impl LogState {
    pub fn new(log: CustomerLog) -> Self {
        LogState { log }
    }

    pub fn log(&self) -> &CustomerLog {
        &self.log
    }

    pub fn save_customer(&self, customer: &Customer) -> AppResult<CustomerRecord> {
        Ok(self.log.append(customer)?)
    }

    /// Session first, then the log. Exact, case-sensitive match.
    pub fn search_reservation_by_id(
        &self,
        session: &ReservationSession,
        customer_id: &str,
    ) -> AppResult<LookupOutcome> {
        if let Some(customer) = session.find_customer(customer_id) {
            debug!(customer_id, "found in session");
            return Ok(LookupOutcome::InSession(customer.clone()));
        }

        match self.log.find_by_customer_id(customer_id)? {
            Some(record) => {
                debug!(customer_id, record_id = %record.record_id, "found in customer log");
                Ok(LookupOutcome::InLog(record))
            }
            None => Ok(LookupOutcome::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str) -> Customer {
        Customer::new("Maria Clara", "09171234567", "maria@example.com", id).unwrap()
    }

    #[test]
    fn test_session_hit_wins_over_log() {
        let dir = tempfile::tempdir().unwrap();
        let state = LogState::new(CustomerLog::new(dir.path().join("customers.jsonl")));
        state.save_customer(&customer("ID001")).unwrap();

        let mut session = ReservationSession::new();
        session.start_reservation();
        session.attach_customer(customer("ID001")).unwrap();

        let outcome = state.search_reservation_by_id(&session, "ID001").unwrap();
        assert!(matches!(outcome, LookupOutcome::InSession(_)));
    }

    #[test]
    fn test_log_fallback_and_miss() {
        let dir = tempfile::tempdir().unwrap();
        let state = LogState::new(CustomerLog::new(dir.path().join("customers.jsonl")));
        state.save_customer(&customer("OLD7")).unwrap();
        let session = ReservationSession::new();

        let outcome = state.search_reservation_by_id(&session, "OLD7").unwrap();
        assert!(matches!(outcome, LookupOutcome::InLog(_)));
        assert_eq!(outcome.customer().unwrap().name, "Maria Clara");

        let outcome = state.search_reservation_by_id(&session, "old7").unwrap();
        assert_eq!(outcome, LookupOutcome::NotFound);
        assert!(outcome.customer().is_none());
    }
}
