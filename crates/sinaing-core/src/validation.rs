//! # Validation Module
//!
//! Input validation for the reservation console.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompt (apps/cli)                                    │
//! │  ├── Numeric parse of menu choices                                     │
//! │  └── Re-prompt on any failure below                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Date pattern + not-in-the-past                                    │
//! │  ├── Contact digits, customer name charset                             │
//! │  └── Card number length, transaction id presence                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Session rules (session.rs)                                   │
//! │  ├── Slot range / already reserved                                     │
//! │  └── Customer ID uniqueness (registry.rs)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sinaing_core::validation::{validate_calendar_date, validate_contact};
//!
//! validate_calendar_date("2030-01-15").unwrap();
//! validate_contact("12345678901").unwrap();
//! assert!(validate_contact("1234567890").is_err());
//! ```

use chrono::{Local, NaiveDate};

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reservation dates are always `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Contact numbers are exactly this many digits.
pub const CONTACT_DIGITS: usize = 11;

/// Accepted credit card number lengths (inclusive).
pub const CARD_NUMBER_MIN: usize = 13;
pub const CARD_NUMBER_MAX: usize = 19;

// =============================================================================
// Date Validators
// =============================================================================

/// Validates the `YYYY-MM-DD` shape and rejects dates before today.
///
/// Uses the local calendar date; see [`validate_date_format_on`].
pub fn validate_date_format(date: &str) -> ValidationResult<()> {
    validate_date_format_on(date, Local::now().date_naive())
}

/// Validates the `YYYY-MM-DD` shape and rejects dates before `today`.
///
/// ## Rules
/// - Exactly 10 characters, `-` at positions 4 and 7, ASCII digits elsewhere
/// - Lexicographically ≥ `today` formatted as `YYYY-MM-DD`
///
/// Comparing strings is sound here only because both sides are fixed-width
/// and zero-padded, so lexical order equals chronological order.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use sinaing_core::validation::validate_date_format_on;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// assert!(validate_date_format_on("2030-01-15", today).is_ok());
/// assert!(validate_date_format_on("2026-10-18", today).is_err());
/// assert!(validate_date_format_on("15-01-2030", today).is_err());
/// ```
pub fn validate_date_format_on(date: &str, today: NaiveDate) -> ValidationResult<()> {
    if !has_date_shape(date) {
        return Err(ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: "must follow the format YYYY-MM-DD".to_string(),
        });
    }

    let today = today.format(DATE_FORMAT).to_string();
    if date < today.as_str() {
        return Err(ValidationError::InThePast {
            field: "date".to_string(),
            value: date.to_string(),
        });
    }

    Ok(())
}

/// Validates `YYYY-(01..12)-(01..31)`.
///
/// Day-of-month overflow is not checked: `2030-02-30` passes.
pub fn validate_calendar_date(date: &str) -> ValidationResult<()> {
    if !has_date_shape(date) {
        return Err(ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: "must follow the format YYYY-MM-DD".to_string(),
        });
    }

    let not_on_calendar = || ValidationError::NotOnCalendar {
        field: "date".to_string(),
        value: date.to_string(),
    };

    let month: u32 = date[5..7].parse().map_err(|_| not_on_calendar())?;
    let day: u32 = date[8..10].parse().map_err(|_| not_on_calendar())?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(not_on_calendar());
    }

    Ok(())
}

fn has_date_shape(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

// =============================================================================
// Customer Validators
// =============================================================================

/// Validates a contact number: exactly 11 decimal digits.
pub fn validate_contact(contact: &str) -> ValidationResult<()> {
    if contact.len() != CONTACT_DIGITS || !contact.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "contact number".to_string(),
            reason: format!("must be exactly {} digits", CONTACT_DIGITS),
        });
    }

    Ok(())
}

/// Validates a customer name: letters and spaces only, non-empty.
///
/// ## Example
/// ```rust
/// use sinaing_core::validation::validate_customer_name;
///
/// assert!(validate_customer_name("Juan Dela Cruz").is_ok());
/// assert!(validate_customer_name("R2-D2").is_err());
/// assert!(validate_customer_name("").is_err());
/// ```
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err(ValidationError::InvalidFormat {
            field: "name".to_string(),
            reason: "should only contain letters and spaces".to_string(),
        });
    }

    Ok(())
}

/// Validates a customer / reservation ID: anything but blank.
pub fn validate_customer_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "customer ID".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Payment Validators
// =============================================================================

/// Validates a credit card number by length only (13–19 characters).
pub fn validate_card_number(card_number: &str) -> ValidationResult<()> {
    let len = card_number.chars().count();
    if !(CARD_NUMBER_MIN..=CARD_NUMBER_MAX).contains(&len) {
        return Err(ValidationError::LengthOutOfRange {
            field: "credit card number".to_string(),
            min: CARD_NUMBER_MIN,
            max: CARD_NUMBER_MAX,
        });
    }

    Ok(())
}

/// Validates an online payment transaction ID: must be non-empty.
pub fn validate_transaction_id(transaction_id: &str) -> ValidationResult<()> {
    if transaction_id.is_empty() {
        return Err(ValidationError::Required {
            field: "transaction ID".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_validate_date_format() {
        assert!(validate_date_format_on("2030-01-15", today()).is_ok());
        assert!(validate_date_format_on("2026-10-19", today()).is_ok());

        assert!(matches!(
            validate_date_format_on("2026-10-18", today()),
            Err(ValidationError::InThePast { .. })
        ));
        assert!(matches!(
            validate_date_format_on("15-01-2030", today()),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_date_format_on("2030/01/15", today()).is_err());
        assert!(validate_date_format_on("2030-1-15", today()).is_err());
        assert!(validate_date_format_on("", today()).is_err());
    }

    #[test]
    fn test_validate_date_format_uses_clock() {
        assert!(validate_date_format("2999-12-31").is_ok());
        assert!(validate_date_format("2000-01-01").is_err());
    }

    #[test]
    fn test_validate_calendar_date() {
        assert!(validate_calendar_date("2030-01-15").is_ok());
        assert!(validate_calendar_date("2030-12-31").is_ok());

        assert!(matches!(
            validate_calendar_date("2030-13-01"),
            Err(ValidationError::NotOnCalendar { .. })
        ));
        assert!(validate_calendar_date("2030-00-10").is_err());
        assert!(validate_calendar_date("2030-01-32").is_err());
        assert!(validate_calendar_date("2030-01-00").is_err());
        assert!(validate_calendar_date("15-01-2030").is_err());
    }

    #[test]
    fn test_calendar_date_does_not_check_month_length() {
        assert!(validate_calendar_date("2030-02-30").is_ok());
        assert!(validate_calendar_date("2030-04-31").is_ok());
    }

    #[test]
    fn test_validate_contact() {
        assert!(validate_contact("12345678901").is_ok());
        assert!(validate_contact("1234567890").is_err());
        assert!(validate_contact("123456789012").is_err());
        assert!(validate_contact("123456789ab").is_err());
        assert!(validate_contact("").is_err());
    }

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Juan Dela Cruz").is_ok());
        assert!(validate_customer_name("Maria").is_ok());

        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("Juan2").is_err());
        assert!(validate_customer_name("O'Brien").is_err());
    }

    #[test]
    fn test_validate_customer_id() {
        assert!(validate_customer_id("ID001").is_ok());
        assert!(validate_customer_id("").is_err());
        assert!(validate_customer_id("   ").is_err());
    }

    #[test]
    fn test_validate_card_number() {
        assert!(validate_card_number("4111111111111").is_ok());
        assert!(validate_card_number("4111111111111111111").is_ok());

        assert!(validate_card_number("411111111111").is_err());
        assert!(validate_card_number("41111111111111111111").is_err());
    }

    #[test]
    fn test_validate_transaction_id() {
        assert!(validate_transaction_id("TXN-42").is_ok());
        assert!(validate_transaction_id("").is_err());
    }
}
