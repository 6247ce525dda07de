//! # Date Screens
//!
//! "Check Available Dates" and the date prompt shared with the wizard.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::Console;
use crate::error::AppResult;
use sinaing_core::{CoreError, CoreResult, DayAvailability, ReservationSession, ValidationError};

pub(crate) const INVALID_DATE: &str =
    "Invalid date format or the date is in the past. Please follow the format (YYYY-MM-DD).";
pub(crate) const DATE_NOT_AVAILABLE: &str =
    "The entered date is not available for reservation. Try another date.";

/// Asks for a date until one is a valid reservation date, then shows the
/// slot board for it.
pub fn check_dates<R: BufRead, W: Write>(
    session: &mut ReservationSession,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.heading("CHECK AVAILABLE DATES")?;

    let (date, ()) = prompt_date(console, |date| session.validate_date(date))?;
    let day = session.check_availability(&date);
    render_availability(console, &day)?;

    if day.is_fully_booked() {
        console.say(format!("All slots on {} are reserved. Try another date.", date))?;
    } else {
        console.say(format!("{} is available for reservation!", date))?;
    }
    console.pause()
}

/// Prompts until `accept` takes the date. Validation failures re-prompt;
/// any other error is returned.
pub(crate) fn prompt_date<R, W, T>(
    console: &mut Console<R, W>,
    mut accept: impl FnMut(&str) -> CoreResult<T>,
) -> AppResult<(String, T)>
where
    R: BufRead,
    W: Write,
{
    loop {
        let date = console.prompt_token("Enter date (YYYY-MM-DD): ")?;
        match accept(&date) {
            Ok(value) => return Ok((date, value)),
            Err(CoreError::Validation(err)) => {
                debug!(date = %date, error = %err, "date rejected");
                console.say(date_error_message(&err))?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

pub(crate) fn date_error_message(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::NotOnCalendar { .. } => DATE_NOT_AVAILABLE,
        _ => INVALID_DATE,
    }
}

pub(crate) fn render_availability<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    day: &DayAvailability,
) -> AppResult<()> {
    console.say(format!("Time slots for {}:", day.date))?;
    for status in &day.slots {
        console.say(format!(
            "  Slot {} ({})  {}",
            status.slot.number(),
            status.slot.hours_label(),
            if status.reserved { "Reserved" } else { "Available" }
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sinaing_core::AvailabilityStore;
    use std::io::Cursor;

    fn session() -> ReservationSession {
        ReservationSession::new().with_today(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    fn run(session: &mut ReservationSession, script: &str) -> String {
        let mut console =
            Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new()).interactive(false);
        check_dates(session, &mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_check_dates_reprompts_then_shows_board() {
        let mut s = session();
        let out = run(&mut s, "2020-01-01\n2030-13-01\n01/02/2030\n2030-01-15\n");

        assert_eq!(out.matches(INVALID_DATE).count(), 2);
        assert_eq!(out.matches(DATE_NOT_AVAILABLE).count(), 1);
        assert!(out.contains("Slot 1 (10:00 - 12:00)  Available"));
        assert!(out.contains("Slot 5 (18:00 - 20:00)  Available"));
        assert!(out.contains("2030-01-15 is available for reservation!"));
    }

    #[test]
    fn test_check_dates_fully_booked() {
        let mut board = AvailabilityStore::new();
        for index in 0..sinaing_core::SLOTS_PER_DAY {
            board.reserve_slot("2030-01-15", index).unwrap();
        }
        let mut s = session().with_availability(board);
        let out = run(&mut s, "2030-01-15\n");
        assert!(out.contains("Slot 3 (14:00 - 16:00)  Reserved"));
        assert!(out.contains("All slots on 2030-01-15 are reserved."));
    }
}
