//! End-to-end runs of the main menu with scripted input.

use std::io::Cursor;
use std::path::Path;

use chrono::NaiveDate;
use sinaing_cli::console::Console;
use sinaing_cli::error::ErrorCode;
use sinaing_cli::run_console;
use sinaing_cli::state::{AppState, ConfigState};
use sinaing_core::{Customer, ReservationPhase, ReservationSession};
use sinaing_store::CustomerLog;

fn app(log_path: &Path) -> AppState {
    let config = ConfigState {
        customer_log_path: log_path.to_path_buf(),
        interactive: false,
        ..ConfigState::default()
    };
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    AppState::with_session(config, ReservationSession::new().with_today(today))
}

/// Runs `script` and returns the result plus everything printed.
fn drive(state: &mut AppState, script: &[&str]) -> (Result<(), ErrorCode>, String) {
    let mut input = script.join("\n");
    input.push('\n');
    let mut console = Console::new(Cursor::new(input.into_bytes()), Vec::new()).interactive(false);
    let result = run_console(state, &mut console).map_err(|err| err.code);
    (result, String::from_utf8(console.into_output()).unwrap())
}

const JUAN: [&str; 4] = ["Juan Dela Cruz", "ID001", "12345678901", "juan@example.com"];

#[test]
fn test_reserve_pay_and_pay_again() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("customers.jsonl");
    let mut state = app(&log_path);

    let mut script = vec!["4"];
    script.extend(JUAN);
    script.extend(["1", "2099-01-01", "5", "3"]);
    script.extend(["5", "ID001", "1", "4", "1", "4111111111111"]);
    script.extend(["5", "ID001", "1", "4"]);
    script.push("6");

    let (result, out) = drive(&mut state, &script);
    assert_eq!(result, Ok(()));

    assert!(out.contains("Welcome to Sinaing Society Reservation System!"));
    assert!(out.contains("Customer details saved to file successfully."));
    assert!(out.contains("You have successfully reserved Table 5."));
    assert!(out.contains("Reservation successful for Slot 3 (14:00 - 16:00) on 2099-01-01."));
    assert!(out.contains("Amount due: P500.00"));
    assert!(out.contains("Payment successful using Credit Card!"));
    assert!(out.contains("Payment is already completed. Returning to the main menu."));
    assert!(out.contains("Thank you for using Sinaing Society Reservation System. Goodbye!"));

    assert!(state.session.reservation().is_paid());
    assert!(state.session.availability().is_reserved("2099-01-01", 2));

    let saved = CustomerLog::new(&log_path).find_by_customer_id("ID001").unwrap();
    assert_eq!(saved.unwrap().customer.email, "juan@example.com");
}

#[test]
fn test_menu_reservation_with_retries_then_cancel() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = app(&dir.path().join("customers.jsonl"));

    let script = [
        "4",
        "Juan 3rd",
        "Juan Dela Cruz",
        "",
        "ID001",
        "0917",
        "12345678901",
        "juan@example.com",
        "3",
        "2",
        "2020-01-01",
        "2099-01-01",
        "11",
        "2",
        "9",
        "1",
        "5",
        "Y",
        "11",
        "N",
        "5",
        "ID001",
        "1",
        "5",
        "5",
        "ID001",
        "1",
        "4",
        "6",
    ];
    let (result, out) = drive(&mut state, &script);
    assert_eq!(result, Ok(()));

    assert!(out.contains("Invalid name. It should only contain letters and spaces."));
    assert!(out.contains("Customer ID cannot be empty. Please enter a valid ID."));
    assert!(out.contains("Invalid contact number. It should be exactly 11 digits."));
    assert!(out.contains("Invalid date format or the date is in the past."));
    assert!(out.contains("Invalid table number. Try again."));
    assert!(out.contains("Invalid input. Please enter a number between 1 to 5 only."));
    assert!(out.contains("Order added successfully! (Adobo)"));
    assert!(out.contains("Itemized Total: P600.00"));
    assert!(out.contains("Amount Due: P1500.00"));
    assert!(out.contains("Your reservation has been cancelled."));
    assert!(out.contains("No active reservation."));
    assert!(out.contains("Error: No confirmed reservation to update"));

    assert_eq!(state.session.phase(), ReservationPhase::Idle);
    assert!(state.session.availability().is_reserved("2099-01-01", 0));
}

#[test]
fn test_duplicate_id_and_taken_slot() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = app(&dir.path().join("customers.jsonl"));

    let mut script = vec!["4"];
    script.extend(JUAN);
    script.extend(["1", "2099-01-01", "5", "3"]);
    script.extend([
        "4",
        "Maria Clara",
        "ID001",
        "ID002",
        "09171234567",
        "maria@example.com",
        "1",
        "2099-01-01",
        "2",
        "3",
    ]);
    script.push("6");

    let (result, out) = drive(&mut state, &script);
    assert_eq!(result, Ok(()));

    assert!(out.contains("Customer ID already exists. Please enter a unique ID."));
    assert!(out.contains("Slot already reserved."));
    assert_eq!(state.session.customers().len(), 2);
    assert_eq!(state.session.phase(), ReservationPhase::Idle);
    assert!(state.session.reservation().date.is_none());
}

#[test]
fn test_lookup_falls_back_to_log() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("customers.jsonl");
    let earlier = Customer::new("Jose Rizal", "09998887777", "jose@example.com", "OLD1").unwrap();
    CustomerLog::new(&log_path).append(&earlier).unwrap();

    let mut state = app(&log_path);
    let script = ["3", "1", "N", "2", "5", "OLD1", "2", "5", "NOPE", "6"];
    let (result, out) = drive(&mut state, &script);
    assert_eq!(result, Ok(()));

    assert!(out.contains("Calamares"));
    assert!(out.contains("Table 9: Good for 10 people"));
    assert!(out.contains("Customer found in file:"));
    assert!(out.contains("Name: Jose Rizal"));
    assert!(out.contains("Reservation ID not found: NOPE"));
}

#[test]
fn test_browsing_menu_does_not_restrict_orders() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = app(&dir.path().join("customers.jsonl"));

    let mut script = vec!["3", "4", "N", "4"];
    script.extend(JUAN);
    script.extend(["2", "2099-01-01", "5", "3", "16", "N", "6"]);

    let (result, out) = drive(&mut state, &script);
    assert_eq!(result, Ok(()));

    assert!(out.contains("Mango Shake"));
    assert!(out.contains("Order added successfully! (Mango Shake)"));
    assert!(!out.contains("Invalid Menu ID. Try again."));
    assert!(out.contains("Amount Due: P1500.00"));

    let reservation = state.session.reservation();
    assert_eq!(reservation.orders, vec![16]);
    assert!(reservation.with_menu);
}

#[test]
fn test_end_of_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = app(&dir.path().join("customers.jsonl"));

    let (result, out) = drive(&mut state, &["abc", "1", "2099-01-01"]);
    assert_eq!(result, Err(ErrorCode::InputClosed));
    assert!(out.contains("Invalid choice. Please select a valid option."));
    assert!(out.contains("2099-01-01 is available for reservation!"));
}

#[test]
fn test_unwritable_log_does_not_stop_the_wizard() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = app(&dir.path().join("missing").join("customers.jsonl"));

    let mut script = vec!["4"];
    script.extend(JUAN);
    script.extend(["1", "2099-01-01", "1", "1", "6"]);

    let (result, out) = drive(&mut state, &script);
    assert_eq!(result, Ok(()));
    assert!(out.contains("Error: Unable to open file for writing."));
    assert_eq!(state.session.phase(), ReservationPhase::Confirmed);
}
