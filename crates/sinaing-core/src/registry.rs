//! # Customer ID Registry
//!
//! Remembers every customer ID handed out during this process so that no
//! two reservations share one. Owned by the session; nothing is global.
//! IDs are never forgotten, not even when a reservation is cancelled.

use std::collections::HashSet;

use tracing::debug;

use crate::error::ValidationError;
use crate::validation::{validate_customer_id, ValidationResult};

#[derive(Debug, Clone, Default)]
pub struct CustomerIdRegistry {
    seen: HashSet<String>,
}

impl CustomerIdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id`; returns `false` when it was already taken.
    pub fn reserve(&mut self, id: &str) -> bool {
        let inserted = self.seen.insert(id.to_string());
        debug!(customer_id = id, inserted, "customer id reservation");
        inserted
    }

    /// Like [`reserve`](Self::reserve) but with a typed error, blank IDs included.
    pub fn try_reserve(&mut self, id: &str) -> ValidationResult<()> {
        validate_customer_id(id)?;
        if !self.reserve(id) {
            return Err(ValidationError::Duplicate {
                field: "Customer ID".to_string(),
                value: id.to_string(),
            });
        }
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
