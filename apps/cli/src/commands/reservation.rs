//! # Make a Reservation
//!
//! The wizard behind main-menu option 4.
//!
//! ## Wizard Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Customer details   name → ID (uniqueness) → contact → email        │
//! │  2. Save to log        failure is reported, the wizard goes on         │
//! │  3. Mode               Reservation Only | Reservation + Food Order     │
//! │  4. Date               re-prompt until valid                           │
//! │  5. Table              re-prompt until 1-10                            │
//! │  6. Slot               taken → wizard abandoned                        │
//! │  7. Menu order         only for Reservation + Food Order               │
//! │  8. Summary                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::{info, warn};

use super::dates::{prompt_date, render_availability};
use super::menu::{render_full_menu, take_orders};
use super::tables::select_table;
use super::update::render_summary;
use crate::console::Console;
use crate::error::AppResult;
use crate::state::{ConfigState, LogState};
use sinaing_core::validation::{validate_contact, validate_customer_name};
use sinaing_core::{
    CoreError, Customer, ReservationMode, ReservationPhase, ReservationSession, ValidationError,
};

pub fn make_reservation<R: BufRead, W: Write>(
    session: &mut ReservationSession,
    log: &LogState,
    config: &ConfigState,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    session.start_reservation();

    let customer = input_customer_details(session, console)?;
    match log.save_customer(&customer) {
        Ok(_) => console.say("Customer details saved to file successfully.")?,
        Err(err) => {
            warn!(code = ?err.code, "{}", err.message);
            console.say("Error: Unable to open file for writing.")?;
        }
    }
    console.pause()?;
    session.attach_customer(customer)?;

    let mode = choose_mode(console)?;
    session.choose_mode(mode)?;

    console.clear()?;
    console.heading("CHOOSE DATE")?;
    let (date, ()) = prompt_date(console, |date| session.choose_date(date))?;

    select_table(console, |number| session.choose_table(number))?;

    if !choose_slot(session, console, &date)? {
        return Ok(());
    }

    if session.phase() == ReservationPhase::OrderingMenu {
        console.clear()?;
        render_full_menu(console, config)?;
        take_orders(session, console)?;
    }

    console.clear()?;
    render_summary(console, config, &session.summary())?;
    console.pause()
}

/// Collects and validates the four customer fields.
///
/// The ID is claimed as soon as it is accepted, before contact and email.
fn input_customer_details<R: BufRead, W: Write>(
    session: &mut ReservationSession,
    console: &mut Console<R, W>,
) -> AppResult<Customer> {
    console.clear()?;
    console.heading("INPUT CUSTOMER DETAILS")?;

    let name = loop {
        let name = console.prompt("Enter Name: ")?;
        match validate_customer_name(&name) {
            Ok(()) => break name,
            Err(_) => console.say("Invalid name. It should only contain letters and spaces.")?,
        }
    };

    let customer_id = loop {
        let id = console.prompt("Enter Customer ID: ")?;
        match session.register_customer_id(&id) {
            Ok(()) => break id,
            Err(CoreError::Validation(ValidationError::Duplicate { .. })) => {
                console.say("Customer ID already exists. Please enter a unique ID.")?;
            }
            Err(CoreError::Validation(_)) => {
                console.say("Customer ID cannot be empty. Please enter a valid ID.")?;
            }
            Err(err) => return Err(err.into()),
        }
    };

    let contact = loop {
        let contact = console.prompt_token("Enter Contact Number: ")?;
        match validate_contact(&contact) {
            Ok(()) => break contact,
            Err(_) => console.say("Invalid contact number. It should be exactly 11 digits.")?,
        }
    };

    let email = console.prompt_token("Enter Email: ")?;

    let customer = Customer::new(name, contact, email, customer_id)?;
    info!(customer_id = %customer.customer_id, "customer details entered");
    Ok(customer)
}

fn choose_mode<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<ReservationMode> {
    loop {
        console.clear()?;
        console.heading("RESERVATION MENU")?;
        console.say("1. Reservation Only")?;
        console.say("2. Reservation + Food Order")?;
        console.blank()?;

        match console.prompt_number::<u32>("Enter your choice: ")? {
            Some(1) => return Ok(ReservationMode::ReservationOnly),
            Some(2) => return Ok(ReservationMode::ReservationWithMenu),
            _ => {
                console.say("Invalid choice. Please select a valid option.")?;
                console.pause()?;
            }
        }
    }
}

/// `false` when the slot was taken and the wizard was abandoned.
fn choose_slot<R: BufRead, W: Write>(
    session: &mut ReservationSession,
    console: &mut Console<R, W>,
    date: &str,
) -> AppResult<bool> {
    loop {
        console.clear()?;
        console.heading("CHOOSE TIME")?;
        let day = session.check_availability(date);
        render_availability(console, &day)?;
        console.blank()?;

        let number = console.prompt_number::<usize>("Enter slot number (1-5): ")?;
        let Some(index) = number.and_then(|n| n.checked_sub(1)) else {
            console.say("Invalid input. Please enter a number between 1 to 5 only.")?;
            console.pause()?;
            continue;
        };

        match session.choose_slot(index) {
            Ok(slot) => {
                console.say(format!(
                    "Reservation successful for Slot {} ({}) on {}.",
                    slot.number(),
                    slot.hours_label(),
                    date
                ))?;
                console.pause()?;
                return Ok(true);
            }
            Err(CoreError::AlreadyReserved { .. }) => {
                console.say("Slot already reserved.")?;
                console.say("Unable to reserve slot. Please try again.")?;
                console.pause()?;
                return Ok(false);
            }
            Err(CoreError::InvalidSlotIndex { .. }) => {
                console.say("Invalid input. Please enter a number between 1 to 5 only.")?;
                console.pause()?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}
