//! # Table Screens

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::AppResult;
use sinaing_core::tables::tables;
use sinaing_core::{CoreResult, Table};

/// "View Available Table Areas": the fixed layout.
pub fn view_tables<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<()> {
    console.heading("VIEW AVAILABLE TABLE AREAS")?;
    render_tables(console)?;
    console.pause()
}

pub(crate) fn render_tables<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<()> {
    for table in tables() {
        console.say(table.description())?;
    }
    Ok(())
}

/// Prompts until `choose` accepts a table number.
///
/// Out-of-range numbers re-prompt; other errors are returned.
pub(crate) fn select_table<R, W>(
    console: &mut Console<R, W>,
    mut choose: impl FnMut(i64) -> CoreResult<Table>,
) -> AppResult<Table>
where
    R: BufRead,
    W: Write,
{
    loop {
        console.clear()?;
        console.heading("AVAILABLE TABLES")?;
        render_tables(console)?;
        console.blank()?;

        let Some(number) = console.prompt_number::<i64>("Enter table number (1-10): ")? else {
            console.say("Invalid input. Please enter a table number.")?;
            console.pause()?;
            continue;
        };

        match choose(number) {
            Ok(table) => {
                console.say(format!("You have successfully reserved Table {}.", table.id))?;
                console.pause()?;
                return Ok(table);
            }
            Err(err) if err.is_capacity() => {
                console.say("Invalid table number. Try again.")?;
                console.pause()?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sinaing_core::tables::reserve_table;
    use sinaing_core::CoreError;
    use std::io::Cursor;

    fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new()).interactive(false)
    }

    #[test]
    fn test_view_tables_lists_layout() {
        let mut c = console("");
        view_tables(&mut c).unwrap();
        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("Table 1: Good for 2 people"));
        assert!(out.contains("Table 10: Good for 10 people"));
        assert_eq!(out.matches("Good for").count(), 10);
    }

    #[test]
    fn test_select_table_reprompts() {
        let mut c = console("eleven\n11\n-1\n5\n");
        let table = select_table(&mut c, reserve_table).unwrap();
        assert_eq!(table.seats, 6);

        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out.matches("Invalid table number. Try again.").count(), 2);
        assert!(out.contains("You have successfully reserved Table 5."));
    }

    #[test]
    fn test_select_table_passes_through_business_errors() {
        let mut c = console("3\n");
        let err = select_table(&mut c, |_| Err(CoreError::NoActiveReservation)).unwrap_err();
        assert_eq!(err.message, "No confirmed reservation to update");
    }
}
