//! # Error Types
//!
//! Domain-specific error types for sinaing-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sinaing-core errors (this file)                                       │
//! │  ├── CoreError        - Capacity, phase and payment failures           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  sinaing-store errors (separate crate)                                 │
//! │  └── StoreError       - Customer log failures                          │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── AppError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → Console                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::session::ReservationPhase;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Slot index outside `[0, SLOTS_PER_DAY)`.
    #[error("Invalid slot number: {index}")]
    InvalidSlotIndex { index: usize },

    /// The slot on that date is already taken.
    ///
    /// ## User Workflow
    /// ```text
    /// Choose slot 3 on 2099-01-01
    ///      │
    ///      ▼
    /// bookings["2099-01-01"][2] == true
    ///      │
    ///      ▼
    /// AlreadyReserved { date: "2099-01-01", slot: 3 }
    ///      │
    ///      ▼
    /// Console: "Slot already reserved."
    /// ```
    #[error("Slot {slot} on {date} is already reserved")]
    AlreadyReserved { date: String, slot: usize },

    /// Table number outside the fixed layout.
    #[error("Invalid table number: {table}")]
    InvalidTableNumber { table: i64 },

    /// Operation not allowed in the current wizard phase.
    #[error("Cannot {operation} while {phase:?}")]
    InvalidPhase {
        operation: &'static str,
        phase: ReservationPhase,
    },

    /// Update requested but nothing has been confirmed.
    #[error("No confirmed reservation to update")]
    NoActiveReservation,

    /// Order changes requested on a reservation without a menu.
    #[error("Menu was not selected initially")]
    MenuNotSelected,

    /// Menu item rejected by the ordering rule.
    #[error("Invalid Menu ID: {id}")]
    InvalidMenuItem { id: i64 },

    /// Payment details failed verification.
    #[error("Payment failed: {reason}")]
    PaymentDeclined { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Slot and table failures: reported to the operator, never fatal.
    pub fn is_capacity(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidSlotIndex { .. }
                | CoreError::AlreadyReserved { .. }
                | CoreError::InvalidTableNumber { .. }
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Always recovered locally by re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g. date pattern, contact digits).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Well-formed date whose month or day is out of range.
    #[error("{field} '{value}' is not a calendar date")]
    NotOnCalendar { field: String, value: String },

    /// Date is earlier than today.
    #[error("{field} '{value}' is in the past")]
    InThePast { field: String, value: String },

    /// Length outside the accepted range.
    #[error("{field} must be between {min} and {max} characters")]
    LengthOutOfRange { field: String, min: usize, max: usize },

    /// Duplicate value (e.g. customer ID seen earlier in this process).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
