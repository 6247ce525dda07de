//! # Reservation Session
//!
//! The single active reservation and the wizard that builds it.
//!
//! ## Wizard
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Idle                                                                   │
//! │   │ start_reservation                                                   │
//! │   ▼                                                                     │
//! │  CollectingCustomer ── register_customer_id / attach_customer           │
//! │   ▼                                                                     │
//! │  ChoosingMode ──────── choose_mode                                      │
//! │   ▼                                                                     │
//! │  ChoosingDate ──────── choose_date                                      │
//! │   ▼                                                                     │
//! │  ChoosingTable ─────── choose_table                                     │
//! │   ▼                                                                     │
//! │  ChoosingSlot ──────── choose_slot ── AlreadyReserved ──► Idle          │
//! │   ▼                                                                     │
//! │  [OrderingMenu] ────── add_order* / finish_ordering                     │
//! │   ▼                                                                     │
//! │  Confirmed                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Update Actions (Confirmed only)
//! ```text
//!  1. change_date_time  reserves a new slot, the old one stays taken
//!  2. change_table      no conflict check
//!  3. add_to_order      back to OrderingMenu, menu reservations only
//!  4. pay               Unpaid → Paid, second attempt is a no-op
//!  5. cancel            clears the reservation, keeps slots taken, → Idle
//! ```

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::availability::{AvailabilityStore, DayAvailability};
use crate::error::{CoreError, CoreResult};
use crate::menu::{find_item, MenuCatalog, MenuItem, MENU_ID_LIMIT};
use crate::money::Money;
use crate::payment::{self, PaymentOutcome, PaymentReceipt, PaymentRequest};
use crate::registry::CustomerIdRegistry;
use crate::tables::{reserve_table, Table};
use crate::types::{Customer, PaymentStatus, ReservationMode, TimeSlot};
use crate::validation::{validate_calendar_date, validate_date_format_on};

// =============================================================================
// Phase
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationPhase {
    #[default]
    Idle,
    CollectingCustomer,
    ChoosingMode,
    ChoosingDate,
    ChoosingTable,
    ChoosingSlot,
    OrderingMenu,
    Confirmed,
}

// =============================================================================
// Reservation
// =============================================================================

/// Fields of the active reservation. All unset after a cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub mode: Option<ReservationMode>,
    pub date: Option<String>,
    pub slot: Option<TimeSlot>,
    pub table: Option<Table>,
    /// Ordered item IDs, in order, duplicates allowed.
    pub orders: Vec<i64>,
    /// Set once any menu item has been accepted.
    pub with_menu: bool,
    pub payment_status: PaymentStatus,
    pub receipt: Option<PaymentReceipt>,
}

impl Reservation {
    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }
}

/// Everything the console prints under "Reservation Summary".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationSummary {
    pub customer: Option<Customer>,
    pub date: Option<String>,
    pub slot: Option<TimeSlot>,
    pub table: Option<Table>,
    pub items: Vec<MenuItem>,
    /// Sum of ordered item prices, shown for reference only.
    pub itemized_subtotal: Money,
    pub amount_due: Money,
    pub payment_status: PaymentStatus,
    pub receipt: Option<PaymentReceipt>,
}

// =============================================================================
// Session
// =============================================================================

/// Owns the availability store, the customer registry and the one active
/// reservation. Constructed once by the entry point.
#[derive(Debug, Default)]
pub struct ReservationSession {
    phase: ReservationPhase,
    availability: AvailabilityStore,
    registry: CustomerIdRegistry,
    customers: Vec<Customer>,
    active_customer: Option<usize>,
    reservation: Reservation,
    /// Checked by `add_order`. Never loaded, so it stays empty.
    order_catalog: MenuCatalog,
    pending_customer_id: Option<String>,
    draft_mode: Option<ReservationMode>,
    draft_date: Option<String>,
    draft_table: Option<Table>,
    today: Option<NaiveDate>,
}

impl ReservationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins "today" for the not-in-the-past check.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Starts from an existing slot board instead of an empty one.
    pub fn with_availability(mut self, availability: AvailabilityStore) -> Self {
        self.availability = availability;
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn expect_phase(&self, expected: ReservationPhase, operation: &'static str) -> CoreResult<()> {
        if self.phase != expected {
            return Err(CoreError::InvalidPhase {
                operation,
                phase: self.phase,
            });
        }
        Ok(())
    }

    fn expect_confirmed(&self) -> CoreResult<()> {
        if self.phase != ReservationPhase::Confirmed {
            return Err(CoreError::NoActiveReservation);
        }
        Ok(())
    }

    fn transition(&mut self, next: ReservationPhase) {
        debug!(from = ?self.phase, to = ?next, "reservation phase change");
        self.phase = next;
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn phase(&self) -> ReservationPhase {
        self.phase
    }

    pub fn reservation(&self) -> &Reservation {
        &self.reservation
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn active_customer(&self) -> Option<&Customer> {
        self.active_customer.and_then(|i| self.customers.get(i))
    }

    pub fn registry(&self) -> &CustomerIdRegistry {
        &self.registry
    }

    pub fn availability(&self) -> &AvailabilityStore {
        &self.availability
    }

    /// Slot snapshot for a date; materializes the date.
    pub fn check_availability(&mut self, date: &str) -> DayAvailability {
        self.availability.check_availability(date)
    }

    /// Validates a date the way the wizard does, without changing anything.
    pub fn validate_date(&self, date: &str) -> CoreResult<()> {
        validate_date_format_on(date, self.today())?;
        validate_calendar_date(date)?;
        Ok(())
    }

    /// Linear scan of customers created in this process.
    pub fn find_customer(&self, customer_id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.customer_id == customer_id)
    }

    /// Catalog the ordering check runs against. Browsing the menu screens
    /// does not touch it.
    pub fn order_catalog(&self) -> &MenuCatalog {
        &self.order_catalog
    }

    // -------------------------------------------------------------------------
    // Wizard
    // -------------------------------------------------------------------------

    /// Starts a fresh reservation, replacing whatever was active.
    pub fn start_reservation(&mut self) {
        self.reservation = Reservation::default();
        self.pending_customer_id = None;
        self.draft_mode = None;
        self.draft_date = None;
        self.draft_table = None;
        self.transition(ReservationPhase::CollectingCustomer);
    }

    /// Claims a customer ID before the rest of the details are typed in.
    pub fn register_customer_id(&mut self, customer_id: &str) -> CoreResult<()> {
        self.expect_phase(ReservationPhase::CollectingCustomer, "register a customer ID")?;
        self.registry.try_reserve(customer_id)?;
        self.pending_customer_id = Some(customer_id.to_string());
        Ok(())
    }

    /// Makes `customer` the active customer.
    ///
    /// The ID must either be the one just claimed with
    /// [`register_customer_id`](Self::register_customer_id) or still free.
    pub fn attach_customer(&mut self, customer: Customer) -> CoreResult<()> {
        self.expect_phase(ReservationPhase::CollectingCustomer, "attach a customer")?;

        if self.pending_customer_id.as_deref() != Some(customer.customer_id.as_str()) {
            self.registry.try_reserve(&customer.customer_id)?;
        }
        self.pending_customer_id = None;

        info!(customer_id = %customer.customer_id, "customer attached");
        self.customers.push(customer);
        self.active_customer = Some(self.customers.len() - 1);
        self.transition(ReservationPhase::ChoosingMode);
        Ok(())
    }

    pub fn choose_mode(&mut self, mode: ReservationMode) -> CoreResult<()> {
        self.expect_phase(ReservationPhase::ChoosingMode, "choose a reservation mode")?;
        self.draft_mode = Some(mode);
        self.transition(ReservationPhase::ChoosingDate);
        Ok(())
    }

    /// Accepts a `YYYY-MM-DD` date that is today or later.
    pub fn choose_date(&mut self, date: &str) -> CoreResult<()> {
        self.expect_phase(ReservationPhase::ChoosingDate, "choose a date")?;
        self.validate_date(date)?;
        self.draft_date = Some(date.to_string());
        self.transition(ReservationPhase::ChoosingTable);
        Ok(())
    }

    pub fn choose_table(&mut self, table: i64) -> CoreResult<Table> {
        self.expect_phase(ReservationPhase::ChoosingTable, "choose a table")?;
        let table = reserve_table(table)?;
        self.draft_table = Some(table);
        self.transition(ReservationPhase::ChoosingSlot);
        Ok(table)
    }

    /// Reserves the slot and records the reservation.
    ///
    /// ## Errors
    /// - `InvalidSlotIndex`: phase unchanged, ask again
    /// - `AlreadyReserved`: the wizard is abandoned, back to `Idle`
    pub fn choose_slot(&mut self, index: usize) -> CoreResult<TimeSlot> {
        self.expect_phase(ReservationPhase::ChoosingSlot, "choose a slot")?;

        let date = self.draft_date.clone().ok_or(CoreError::InvalidPhase {
            operation: "choose a slot",
            phase: self.phase,
        })?;

        let slot = match self.availability.reserve_slot(&date, index) {
            Ok(slot) => slot,
            Err(err @ CoreError::AlreadyReserved { .. }) => {
                self.draft_date = None;
                self.draft_table = None;
                self.transition(ReservationPhase::Idle);
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        let mode = self.draft_mode.take();
        self.reservation.mode = mode;
        self.reservation.date = Some(date);
        self.reservation.slot = Some(slot);
        self.reservation.table = self.draft_table.take();

        info!(
            date = ?self.reservation.date,
            slot = slot.number(),
            table = ?self.reservation.table.map(|t| t.id),
            "reservation recorded"
        );

        if mode.is_some_and(|m| m.includes_menu()) {
            self.transition(ReservationPhase::OrderingMenu);
        } else {
            self.transition(ReservationPhase::Confirmed);
        }
        Ok(slot)
    }

    /// Adds one item to the order.
    ///
    /// Accepted when the ID is within `0..20` and is *not* one of the IDs of
    /// the session's order catalog. That catalog is empty, so every ID in
    /// range is accepted.
    pub fn add_order(&mut self, id: i64) -> CoreResult<MenuItem> {
        self.expect_phase(ReservationPhase::OrderingMenu, "order from the menu")?;

        let in_range = (0..MENU_ID_LIMIT).contains(&id);
        if !in_range || self.order_catalog.contains(id) {
            return Err(CoreError::InvalidMenuItem { id });
        }
        let item = find_item(id).ok_or(CoreError::InvalidMenuItem { id })?;

        self.reservation.orders.push(id);
        self.reservation.with_menu = true;
        debug!(item_id = id, item = %item.name, "order added");
        Ok(item)
    }

    /// Ends the ordering round; the reservation is confirmed.
    pub fn finish_ordering(&mut self) -> CoreResult<&[i64]> {
        self.expect_phase(ReservationPhase::OrderingMenu, "finish ordering")?;
        self.transition(ReservationPhase::Confirmed);
        Ok(&self.reservation.orders)
    }

    /// Ordered items with their names and prices.
    pub fn ordered_items(&self) -> Vec<MenuItem> {
        self.reservation
            .orders
            .iter()
            .filter_map(|&id| find_item(id))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Update actions
    // -------------------------------------------------------------------------

    /// Moves the reservation to another date/slot.
    ///
    /// The previously held slot is not released.
    pub fn change_date_time(&mut self, date: &str, index: usize) -> CoreResult<TimeSlot> {
        self.expect_confirmed()?;
        self.validate_date(date)?;

        let slot = self.availability.reserve_slot(date, index)?;
        self.reservation.date = Some(date.to_string());
        self.reservation.slot = Some(slot);
        info!(date, slot = slot.number(), "reservation rescheduled");
        Ok(slot)
    }

    pub fn change_table(&mut self, table: i64) -> CoreResult<Table> {
        self.expect_confirmed()?;
        let table = reserve_table(table)?;
        self.reservation.table = Some(table);
        Ok(table)
    }

    /// Re-opens ordering. Only reservations that include a menu qualify.
    ///
    /// The menu flag stays set across ordering rounds, even when a round
    /// adds nothing.
    pub fn add_to_order(&mut self) -> CoreResult<()> {
        self.expect_confirmed()?;
        if !self.reservation.with_menu {
            return Err(CoreError::MenuNotSelected);
        }
        self.transition(ReservationPhase::OrderingMenu);
        Ok(())
    }

    pub fn amount_due(&self) -> Money {
        payment::amount_due(self.reservation.with_menu)
    }

    /// Takes payment for the flat amount due.
    ///
    /// Paying twice returns [`PaymentOutcome::AlreadyPaid`] and changes nothing.
    pub fn pay(&mut self, request: &PaymentRequest) -> CoreResult<PaymentOutcome> {
        self.expect_confirmed()?;
        if self.reservation.is_paid() {
            return Ok(PaymentOutcome::AlreadyPaid);
        }

        let receipt = payment::authorize(request, self.amount_due())?;
        self.reservation.payment_status = PaymentStatus::Paid;
        self.reservation.receipt = Some(receipt.clone());

        info!(
            receipt_id = %receipt.receipt_id,
            method = ?receipt.method,
            amount = %receipt.amount,
            "payment completed"
        );
        Ok(PaymentOutcome::Completed(receipt))
    }

    /// Clears every reservation field. Slots stay taken; the customer stays.
    pub fn cancel(&mut self) -> CoreResult<()> {
        self.expect_confirmed()?;
        self.reservation = Reservation::default();
        info!("reservation cancelled");
        self.transition(ReservationPhase::Idle);
        Ok(())
    }

    pub fn summary(&self) -> ReservationSummary {
        let items = self.ordered_items();
        ReservationSummary {
            customer: self.active_customer().cloned(),
            date: self.reservation.date.clone(),
            slot: self.reservation.slot,
            table: self.reservation.table,
            itemized_subtotal: items.iter().map(|item| item.price).sum(),
            items,
            amount_due: self.amount_due(),
            payment_status: self.reservation.payment_status,
            receipt: self.reservation.receipt.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
