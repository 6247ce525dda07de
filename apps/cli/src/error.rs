//! # App Error Type
//!
//! Unified error type for console screens.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  Screen function (commands/)                                            │
//! │  AppResult<()>                                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Store error? ─── StoreError::Open { .. } ─────┐                        │
//! │         │                                      │                        │
//! │         ▼                                      ▼                        │
//! │  Core error?  ─── CoreError::MenuNotSelected ─ AppError { code, msg }   │
//! │         │                                      │                        │
//! │         ▼                                      ▼                        │
//! │  Success                              main loop                         │
//! │                                       ├── InputClosed → stop, exit 1    │
//! │                                       ├── TerminalIo  → stop, exit 1    │
//! │                                       └── otherwise  → print, go on     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Most validation failures never get here: screens re-prompt on the spot.

use std::io;

use thiserror::Error;

use sinaing_core::CoreError;
use sinaing_store::StoreError;

/// Error returned from console screens.
#[derive(Debug, Clone, Error)]
#[error("{code:?}: {message}")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for screen failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Input failed a validation rule
    ValidationError,

    /// Slot taken, slot or table number out of range
    CapacityError,

    /// Reading stdin or writing stdout failed
    TerminalIo,

    /// Customer log access failed
    StoreIo,

    /// Nothing matched the requested ID
    NotFound,

    /// Payment details rejected
    PaymentError,

    /// Operation not allowed in the current state
    BusinessLogic,

    /// Standard input reached end of file
    InputClosed,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn input_closed() -> Self {
        AppError::new(ErrorCode::InputClosed, "Input closed")
    }

    /// Errors the main loop cannot recover from.
    pub fn is_fatal(&self) -> bool {
        matches!(self.code, ErrorCode::InputClosed | ErrorCode::TerminalIo)
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidSlotIndex { .. }
            | CoreError::AlreadyReserved { .. }
            | CoreError::InvalidTableNumber { .. } => ErrorCode::CapacityError,
            CoreError::PaymentDeclined { .. } => ErrorCode::PaymentError,
            CoreError::InvalidMenuItem { .. } | CoreError::Validation(_) => {
                ErrorCode::ValidationError
            }
            CoreError::InvalidPhase { .. }
            | CoreError::NoActiveReservation
            | CoreError::MenuNotSelected => ErrorCode::BusinessLogic,
        };
        AppError::new(code, err.to_string())
    }
}

/// Converts store errors to app errors.
///
/// The path and OS error go to the log; the operator sees the short form.
/// Recoverable: the main loop prints it and carries on.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "customer log operation failed");
        let message = match err {
            StoreError::Open { .. } => "Unable to open the customer file",
            StoreError::Write { .. } => "Unable to write to the customer file",
            StoreError::Read { .. } => "Unable to read the customer file",
            StoreError::Encode(_) => "Unable to encode the customer record",
        };
        AppError::new(ErrorCode::StoreIo, message)
    }
}

/// Terminal I/O failures. End of input is reported separately by the console.
impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::new(ErrorCode::TerminalIo, format!("Terminal I/O failed: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
