//! # Menu Screens
//!
//! Browsing by category and the ordering round.
//!
//! ## Ordering Round
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Enter Menu ID ──► not a number ──► "Invalid input..." ─┐               │
//! │       │                                                 │               │
//! │       ▼                                                 │               │
//! │  session.add_order(id)                                  │               │
//! │       ├── Ok  → "Order added successfully!"             │               │
//! │       └── Err → "Invalid Menu ID. Try again."           │               │
//! │       │                                                 │               │
//! │       ▼                                                 │               │
//! │  "Order another item? (Y/N)" ── Y ──────────────────────┘               │
//! │       │ anything else                                                   │
//! │       ▼                                                                 │
//! │  session.finish_ordering() → order summary                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::Console;
use crate::error::AppResult;
use crate::state::ConfigState;
use sinaing_core::{MenuCatalog, MenuCategory, ReservationSession};

/// Width of the menu box.
const MENU_WIDTH: usize = 45;

/// "View Menu": pick categories until the operator is done.
///
/// Display only. Ordering never depends on what was browsed here.
pub fn view_menu<R: BufRead, W: Write>(
    config: &ConfigState,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    loop {
        console.clear()?;
        console.heading("VIEW MENU")?;
        for (number, category) in MenuCategory::ALL.iter().enumerate() {
            console.say(format!("{}. {}", number + 1, category.name()))?;
        }
        console.blank()?;

        let choice = console.prompt_number::<usize>("Choose a category (1-4): ")?;
        let category = choice
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| MenuCategory::ALL.get(index).copied());

        match category {
            Some(category) => {
                debug!(category = category.name(), "browsing menu category");
                console.clear()?;
                render_catalog(console, config, &MenuCatalog::for_category(category))?;
            }
            None => console.say("Invalid choice. Please select a valid option.")?,
        }

        if !console.prompt_yes_no("Would you like to view other menu categories? (Y/N): ")? {
            return Ok(());
        }
    }
}

pub(crate) fn render_catalog<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &ConfigState,
    catalog: &MenuCatalog,
) -> AppResult<()> {
    let title = catalog.category().map_or("", |c| c.name());
    console.say("-".repeat(MENU_WIDTH))?;
    console.say(format!("{:^width$}", title, width = MENU_WIDTH))?;
    console.say("-".repeat(MENU_WIDTH))?;
    console.say(format!("{:<6}{:<25}{:>14}", "ID", "Name", "Price"))?;
    for item in catalog.items() {
        console.say(format!(
            "{:<6}{:<25}{:>14}",
            item.id,
            item.name,
            config.format_currency(item.price.centavos())
        ))?;
    }
    console.say("-".repeat(MENU_WIDTH))
}

/// Every category, one box each.
pub(crate) fn render_full_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &ConfigState,
) -> AppResult<()> {
    console.heading("RESTAURANT MENU")?;
    for category in MenuCategory::ALL {
        render_catalog(console, config, &MenuCatalog::for_category(category))?;
        console.blank()?;
    }
    Ok(())
}

/// Runs one ordering round on a session in the ordering phase.
pub(crate) fn take_orders<R: BufRead, W: Write>(
    session: &mut ReservationSession,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.say("What would you like to order?")?;
    loop {
        let Some(id) = console.prompt_number::<i64>("Enter Menu ID: ")? else {
            console.say("Invalid input. Please enter a valid Menu ID.")?;
            continue;
        };

        match session.add_order(id) {
            Ok(item) => console.say(format!("Order added successfully! ({})", item.name))?,
            Err(err) => {
                debug!(error = %err, "order rejected");
                console.say("Invalid Menu ID. Try again.")?;
            }
        }

        if !console.prompt_continue("Would you like to order another item? (Y/N): ")? {
            break;
        }
    }

    session.finish_ordering()?;

    console.blank()?;
    console.say("Your Order Summary:")?;
    for item in session.ordered_items() {
        console.say(format!("- Item ID: {} ({})", item.id, item.name))?;
    }
    console.pause()
}
