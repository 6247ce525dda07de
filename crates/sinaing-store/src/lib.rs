//! # sinaing-store: Customer Log for Sinaing Society
//!
//! Persists customer records as JSON Lines and looks them up by ID.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Console: Make a Reservation ──► log.append(&customer)                  │
//! │  Console: View Reservation   ──► session.find_customer(id)              │
//! │                                  └── miss ─► log.find_by_customer_id(id)│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   sinaing-store (THIS CRATE)                    │   │
//! │  │   CustomerLog (log.rs) ── CustomerRecord (record.rs)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  customers.jsonl (one JSON object per line)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`log`] - Append and scan operations
//! - [`record`] - The line format
//! - [`error`] - Store error types

pub mod error;
pub mod log;
pub mod record;

pub use error::{StoreError, StoreResult};
pub use log::CustomerLog;
pub use record::CustomerRecord;
