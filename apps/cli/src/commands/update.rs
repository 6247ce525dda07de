//! # View and Update Reservation
//!
//! Main-menu option 5: look a customer up, show the reservation, then
//! optionally change it, pay for it, or cancel it.
//!
//! ## Update Menu
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Change date and time  → change_date_time  (old slot stays taken)   │
//! │  2. Change table          → change_table                               │
//! │  3. Add to order          → add_to_order + ordering round              │
//! │  4. Proceed to payment    → pay (flat P1500 with menu, P500 without)    │
//! │  5. Cancel reservation    → cancel (customer kept, slots stay taken)   │
//! │                                                                         │
//! │  Every action needs a confirmed reservation.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::dates::date_error_message;
use super::menu::{render_full_menu, take_orders};
use super::tables::select_table;
use crate::console::Console;
use crate::error::{AppError, AppResult};
use crate::state::{ConfigState, LogState, LookupOutcome};
use sinaing_core::payment::{PaymentOutcome, PaymentRequest};
use sinaing_core::validation::validate_customer_id;
use sinaing_core::{
    CoreError, Customer, PaymentStatus, ReservationPhase, ReservationSession, ReservationSummary,
};

pub fn view_reservation<R: BufRead, W: Write>(
    session: &mut ReservationSession,
    log: &LogState,
    config: &ConfigState,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.heading("VIEW RESERVATION")?;

    let reservation_id = loop {
        let id = console.prompt("Enter Reservation ID: ")?;
        match validate_customer_id(&id) {
            Ok(()) => break id,
            Err(_) => console
                .say("Reservation ID cannot be empty. Please enter a valid Reservation ID.")?,
        }
    };

    let outcome = match log.search_reservation_by_id(session, &reservation_id) {
        Ok(outcome) => outcome,
        Err(err) => {
            console.say("Error: Unable to open the file for searching.")?;
            debug!(code = ?err.code, "lookup fell back to not found");
            LookupOutcome::NotFound
        }
    };

    match &outcome {
        LookupOutcome::InSession(customer) => {
            render_customer(console, customer)?;
        }
        LookupOutcome::InLog(record) => {
            console.say("Customer found in file:")?;
            render_customer(console, &record.customer)?;
            console.say(format!(
                "Saved on: {}",
                record.saved_at.format("%Y-%m-%d %H:%M:%S UTC")
            ))?;
        }
        LookupOutcome::NotFound => {
            console.say(AppError::not_found("Reservation ID", &reservation_id).message)?;
            console.say("Returning to main menu...")?;
            return console.pause();
        }
    }

    console.blank()?;
    render_summary(console, config, &session.summary())?;

    console.blank()?;
    console.say("Would you like to update your reservation?")?;
    console.say("1. Yes")?;
    console.say("2. No")?;
    match console.prompt_number::<u32>("Enter your choice: ")? {
        Some(1) => update_reservation(session, config, console),
        Some(2) => {
            console.say("Returning to main menu...")?;
            console.pause()
        }
        _ => {
            console.say("Invalid input. Returning to main menu...")?;
            console.pause()
        }
    }
}

pub fn update_reservation<R: BufRead, W: Write>(
    session: &mut ReservationSession,
    config: &ConfigState,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.clear()?;
    console.heading("UPDATE RESERVATION")?;
    console.say("1. Change date and time")?;
    console.say("2. Change table")?;
    console.say("3. Add to order")?;
    console.say("4. Proceed to payment")?;
    console.say("5. Cancel reservation")?;
    console.blank()?;

    match console.prompt_number::<u32>("Enter your choice: ")? {
        Some(1) => change_date_time(session, console)?,
        Some(2) => {
            require_confirmed(session)?;
            let table = select_table(console, |number| session.change_table(number))?;
            info!(table = table.id, "table changed");
        }
        Some(3) => match session.add_to_order() {
            Ok(()) => {
                console.clear()?;
                render_full_menu(console, config)?;
                return take_orders(session, console);
            }
            Err(CoreError::MenuNotSelected) => {
                console.say("Menu was not selected initially.")?;
            }
            Err(err) => return Err(err.into()),
        },
        Some(4) => process_payment(session, config, console)?,
        Some(5) => {
            session.cancel()?;
            console.say("Your reservation has been cancelled.")?;
        }
        _ => console.say("Invalid choice.")?,
    }
    console.pause()
}

fn require_confirmed(session: &ReservationSession) -> AppResult<()> {
    if session.phase() != ReservationPhase::Confirmed {
        return Err(CoreError::NoActiveReservation.into());
    }
    Ok(())
}

fn change_date_time<R: BufRead, W: Write>(
    session: &mut ReservationSession,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    require_confirmed(session)?;

    console.clear()?;
    console.heading("CHANGE DATE AND TIME")?;
    let date = console.prompt_token("Enter new date (YYYY-MM-DD): ")?;
    let number = console.prompt_number::<usize>("Enter new slot number (1-5): ")?;
    let Some(index) = number.and_then(|n| n.checked_sub(1)) else {
        console.say("Invalid input. Please enter a number between 1 to 5 only.")?;
        return Ok(());
    };

    match session.change_date_time(&date, index) {
        Ok(slot) => console.say(format!(
            "Reservation successful for Slot {} ({}) on {}.",
            slot.number(),
            slot.hours_label(),
            date
        )),
        Err(CoreError::Validation(err)) => console.say(date_error_message(&err)),
        Err(CoreError::AlreadyReserved { .. }) => {
            console.say("Slot already reserved.")?;
            console.say("Unable to reserve the new slot. Your reservation was not changed.")
        }
        Err(CoreError::InvalidSlotIndex { .. }) => {
            console.say("Invalid input. Please enter a number between 1 to 5 only.")
        }
        Err(err) => Err(err.into()),
    }
}

fn process_payment<R: BufRead, W: Write>(
    session: &mut ReservationSession,
    config: &ConfigState,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    require_confirmed(session)?;
    if session.reservation().is_paid() {
        return console.say("Payment is already completed. Returning to the main menu.");
    }

    console.clear()?;
    console.heading("PROCEED TO PAYMENT")?;
    console.say(format!(
        "Amount due: {}",
        config.format_currency(session.amount_due().centavos())
    ))?;
    console.say("Select payment method:")?;
    console.say("1. Credit Card")?;
    console.say("2. Online Payment")?;

    let request = match console.prompt_number::<u32>("Enter your choice: ")? {
        Some(1) => PaymentRequest::CreditCard {
            card_number: console.prompt_token("Enter Credit Card Number: ")?,
        },
        Some(2) => PaymentRequest::OnlinePayment {
            transaction_id: console.prompt_token("Enter Transaction ID: ")?,
        },
        _ => return console.say("Invalid payment method selected."),
    };

    match session.pay(&request) {
        Ok(PaymentOutcome::Completed(receipt)) => {
            console.say(format!(
                "Payment successful using {}!",
                receipt.method.display_name()
            ))?;
            console.say(format!(
                "Paid {} (ref. {})",
                config.format_currency(receipt.amount.centavos()),
                receipt.reference
            ))?;
            console.say(format!("Receipt ID: {}", receipt.receipt_id))
        }
        Ok(PaymentOutcome::AlreadyPaid) => {
            console.say("Payment is already completed. Returning to the main menu.")
        }
        Err(CoreError::PaymentDeclined { reason }) => {
            console.say(format!("{}. Payment failed.", reason))
        }
        Err(err) => Err(err.into()),
    }
}

fn render_customer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    customer: &Customer,
) -> AppResult<()> {
    console.say("Customer Details:")?;
    console.say(format!("Name: {}", customer.name))?;
    console.say(format!("Contact Number: {}", customer.contact_number))?;
    console.say(format!("Email: {}", customer.email))?;
    console.say(format!("Customer ID: {}", customer.customer_id))
}

/// Reservation block: customer, date/slot, table, order, amount, status.
///
/// Lines for fields that are not set are left out.
pub(crate) fn render_summary<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &ConfigState,
    summary: &ReservationSummary,
) -> AppResult<()> {
    console.say("--- Reservation Summary ---")?;
    if let Some(customer) = &summary.customer {
        console.say(format!("Customer: {} ({})", customer.name, customer.customer_id))?;
    }

    let Some(date) = &summary.date else {
        console.say("No active reservation.")?;
        return console.say("---------------------------");
    };
    console.say(format!("Date: {}", date))?;
    if let Some(slot) = summary.slot {
        console.say(format!("Time Slot: {} ({})", slot.number(), slot.hours_label()))?;
    }
    if let Some(table) = summary.table {
        console.say(format!(
            "Reserved Table: {} (Good for {} people)",
            table.id, table.seats
        ))?;
    }

    if !summary.items.is_empty() {
        console.say("Menu Order:")?;
        for item in &summary.items {
            console.say(format!(
                "  {:<4}{:<25}{:>12}",
                item.id,
                item.name,
                config.format_currency(item.price.centavos())
            ))?;
        }
        console.say(format!(
            "Itemized Total: {}",
            config.format_currency(summary.itemized_subtotal.centavos())
        ))?;
    }

    console.say(format!(
        "Amount Due: {}",
        config.format_currency(summary.amount_due.centavos())
    ))?;
    let status = match summary.payment_status {
        PaymentStatus::Paid => "Paid",
        PaymentStatus::Unpaid => "Unpaid",
    };
    console.say(format!("Payment Status: {}", status))?;
    console.say("---------------------------")
}
