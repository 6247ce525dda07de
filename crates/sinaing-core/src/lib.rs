//! # sinaing-core: Pure Reservation Logic for Sinaing Society
//!
//! This crate is the **heart** of the reservation console. It holds the
//! availability model and the reservation state machine with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Sinaing Reservations Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/cli)                           │   │
//! │  │   Check Dates ─► Tables ─► Menu ─► Reserve ─► View / Update     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sinaing-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐ ┌───────────┐ ┌───────────┐ ┌────────────┐   │   │
//! │  │   │ validation │ │ availab.  │ │   menu    │ │  session   │   │   │
//! │  │   │ dates      │ │ slots     │ │ catalog   │ │  wizard    │   │   │
//! │  │   │ contact    │ │ per date  │ │ tables    │ │  payment   │   │   │
//! │  │   └────────────┘ └───────────┘ └───────────┘ └────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CONSOLE                                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             sinaing-store (Customer Log, JSON Lines)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Customer, TimeSlot, modes and payment enums
//! - [`money`] - Peso amounts in integer centavos
//! - [`error`] - Domain error types
//! - [`validation`] - Date, contact, name and payment checks
//! - [`availability`] - Per-date slot flags
//! - [`menu`] - Static menu catalog
//! - [`tables`] - Fixed table layout
//! - [`registry`] - Customer ID uniqueness
//! - [`payment`] - Flat-rate payment rules
//! - [`session`] - The reservation state machine
//!
//! ## Example Usage
//!
//! ```rust
//! use sinaing_core::payment::{PaymentOutcome, PaymentRequest};
//! use sinaing_core::{Customer, ReservationMode, ReservationSession};
//!
//! let mut session = ReservationSession::new();
//! session.start_reservation();
//! session
//!     .attach_customer(Customer::new("Juan Dela Cruz", "12345678901", "a@b.com", "ID001")?)?;
//! session.choose_mode(ReservationMode::ReservationOnly)?;
//! session.choose_date("2099-01-01")?;
//! session.choose_table(5)?;
//! session.choose_slot(2)?;
//!
//! let card = PaymentRequest::CreditCard { card_number: "4111111111111".into() };
//! assert!(matches!(session.pay(&card)?, PaymentOutcome::Completed(_)));
//! assert_eq!(session.pay(&card)?, PaymentOutcome::AlreadyPaid);
//! # Ok::<(), sinaing_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod availability;
pub mod error;
pub mod menu;
pub mod money;
pub mod payment;
pub mod registry;
pub mod session;
pub mod tables;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use availability::{AvailabilityStore, DayAvailability, SlotStatus};
pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::{MenuCatalog, MenuCategory, MenuItem};
pub use money::Money;
pub use registry::CustomerIdRegistry;
pub use session::{Reservation, ReservationPhase, ReservationSession, ReservationSummary};
pub use tables::{Table, TableId};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Seatings per day: 10:00 to 20:00 in two-hour blocks.
pub const SLOTS_PER_DAY: usize = 5;
