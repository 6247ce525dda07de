//! # Domain Types
//!
//! Core domain types shared by the session, the store and the console.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │    TimeSlot     │   │ ReservationMode │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  index 0..5     │   │  ReservationOnly│       │
//! │  │  contact_number │   │  10:00 + 2h·i   │   │  WithMenu       │       │
//! │  │  email          │   └─────────────────┘   └─────────────────┘       │
//! │  │  customer_id    │                                                    │
//! │  └─────────────────┘   ┌─────────────────┐   ┌─────────────────┐       │
//! │                        │  PaymentMethod  │   │  PaymentStatus  │       │
//! │                        │  CreditCard     │   │  Unpaid         │       │
//! │                        │  OnlinePayment  │   │  Paid           │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::validation::{validate_contact, validate_customer_id, validate_customer_name};
use crate::SLOTS_PER_DAY;

// =============================================================================
// Customer
// =============================================================================

/// A customer profile captured at the start of a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Letters and spaces only.
    pub name: String,

    /// Exactly 11 digits.
    pub contact_number: String,

    /// Not checked.
    pub email: String,

    /// Business identifier, unique within a process.
    pub customer_id: String,
}

impl Customer {
    /// Builds a customer after checking every format rule.
    ///
    /// Uniqueness of `customer_id` is the registry's job, not this one's.
    pub fn new(
        name: impl Into<String>,
        contact_number: impl Into<String>,
        email: impl Into<String>,
        customer_id: impl Into<String>,
    ) -> CoreResult<Self> {
        let customer = Customer {
            name: name.into(),
            contact_number: contact_number.into(),
            email: email.into(),
            customer_id: customer_id.into(),
        };

        validate_customer_name(&customer.name)?;
        validate_customer_id(&customer.customer_id)?;
        validate_contact(&customer.contact_number)?;

        Ok(customer)
    }
}

// =============================================================================
// Time Slot
// =============================================================================

/// One of the five two-hour seatings of a day.
///
/// Index 0 is 10:00–12:00, index 4 is 18:00–20:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeSlot(usize);

impl TimeSlot {
    /// First seating starts at this hour.
    pub const OPENING_HOUR: usize = 10;

    /// Every seating lasts this many hours.
    pub const LENGTH_HOURS: usize = 2;

    /// Returns `None` when `index` is outside the day.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SLOTS_PER_DAY).then_some(TimeSlot(index))
    }

    /// Zero-based index used by the availability store.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// One-based number shown to the operator.
    #[inline]
    pub const fn number(&self) -> usize {
        self.0 + 1
    }

    #[inline]
    pub const fn start_hour(&self) -> usize {
        Self::OPENING_HOUR + Self::LENGTH_HOURS * self.0
    }

    #[inline]
    pub const fn end_hour(&self) -> usize {
        self.start_hour() + Self::LENGTH_HOURS
    }

    /// `"10:00 - 12:00"`.
    pub fn hours_label(&self) -> String {
        format!("{}:00 - {}:00", self.start_hour(), self.end_hour())
    }

    /// All slots of a day in order.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..SLOTS_PER_DAY).map(TimeSlot)
    }
}

// =============================================================================
// Reservation Mode
// =============================================================================

/// What the customer is booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationMode {
    /// Table and time only.
    ReservationOnly,
    /// Table, time and a food order.
    ReservationWithMenu,
}

impl ReservationMode {
    #[inline]
    pub const fn includes_menu(&self) -> bool {
        matches!(self, ReservationMode::ReservationWithMenu)
    }
}

// =============================================================================
// Payment
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    OnlinePayment,
}

impl PaymentMethod {
    /// Name used in console messages.
    pub const fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::OnlinePayment => "Online Payment",
        }
    }
}

/// Payment state of the active reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_customer_new_validates() {
        let customer = Customer::new("Juan Dela Cruz", "12345678901", "a@b.com", "ID001").unwrap();
        assert_eq!(customer.customer_id, "ID001");

        let err = Customer::new("Juan", "123", "a@b.com", "ID001").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        assert!(Customer::new("Juan 3rd", "12345678901", "", "ID001").is_err());
        assert!(Customer::new("Juan", "12345678901", "", " ").is_err());
    }

    #[test]
    fn test_email_is_not_checked() {
        assert!(Customer::new("Ana", "12345678901", "not an email", "X").is_ok());
    }

    #[test]
    fn test_time_slot_hours() {
        let first = TimeSlot::from_index(0).unwrap();
        assert_eq!(first.number(), 1);
        assert_eq!(first.hours_label(), "10:00 - 12:00");

        let last = TimeSlot::from_index(4).unwrap();
        assert_eq!(last.hours_label(), "18:00 - 20:00");

        assert!(TimeSlot::from_index(5).is_none());
        assert_eq!(TimeSlot::all().count(), SLOTS_PER_DAY);
    }

    #[test]
    fn test_payment_status_default() {
        assert_eq!(PaymentStatus::default(), PaymentStatus::Unpaid);
    }

    #[test]
    fn test_enum_serialization() {
        let json = serde_json::to_string(&PaymentMethod::OnlinePayment).unwrap();
        assert_eq!(json, "\"online_payment\"");

        let mode: ReservationMode = serde_json::from_str("\"reservation_with_menu\"").unwrap();
        assert!(mode.includes_menu());
    }
}
