//! # Sinaing Console Library
//!
//! The reservation console: main menu loop, screens, and startup.
//!
//! ## Module Organization
//! ```text
//! sinaing_cli/
//! ├── lib.rs          ◄─── You are here (startup & main loop)
//! ├── console.rs      ◄─── Prompts and output over BufRead/Write
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState
//! │   ├── config.rs   ◄─── ConfigState (env + defaults)
//! │   └── log.rs      ◄─── LogState (customer log + lookup)
//! ├── commands/       ◄─── One screen per main-menu option
//! └── error.rs        ◄─── AppError for screens
//! ```
//!
//! ## Main Menu
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Welcome to Sinaing Society Reservation System!                        │
//! │                                                                         │
//! │  1. Check Available Dates        → commands::dates                      │
//! │  2. View Available Table Areas   → commands::tables                     │
//! │  3. View Menu                    → commands::menu                       │
//! │  4. Make a Reservation           → commands::reservation                │
//! │  5. View Reservation             → commands::update                     │
//! │  6. Exit                         → goodbye, exit code 0                 │
//! │                                                                         │
//! │  End of input anywhere           → exit code 1                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod console;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use console::Console;
use error::AppResult;
use state::{AppState, ConfigState};

/// Runs the console against stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration                                                  │
/// │     • SINAING_* environment variables over defaults                     │
/// │     • Create the customer log directory                                 │
/// │                                                                         │
/// │  3. Build State                                                         │
/// │     • Empty ReservationSession, CustomerLog at the configured path      │
/// │                                                                         │
/// │  4. Main Loop until Exit or end of input                                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    init_tracing();

    let config = ConfigState::from_env();
    if let Err(err) = config.prepare_data_dir() {
        warn!(
            path = %config.customer_log_path.display(),
            error = %err,
            "could not create customer log directory"
        );
    }
    info!(
        restaurant = %config.restaurant_name,
        log_path = %config.customer_log_path.display(),
        "starting reservation console"
    );

    let interactive = config.interactive;
    let mut state = AppState::new(config);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock()).interactive(interactive);

    match run_console(&mut state, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = ?err.code, "{}", err.message);
            ExitCode::FAILURE
        }
    }
}

/// Main menu loop. Returns `Ok` when the operator picks Exit.
///
/// Screen errors are printed and the loop goes on; end of input and
/// terminal failures end the run.
pub fn run_console<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let AppState {
        session,
        log,
        config,
    } = state;

    loop {
        console.clear()?;
        console.say(format!(
            "Welcome to {} Reservation System!",
            config.restaurant_name
        ))?;
        console.blank()?;
        console.say("1. Check Available Dates")?;
        console.say("2. View Available Table Areas")?;
        console.say("3. View Menu")?;
        console.say("4. Make a Reservation")?;
        console.say("5. View Reservation")?;
        console.say("6. Exit")?;
        console.blank()?;

        let choice = console.prompt_number::<u32>("Enter your choice: ")?;
        console.clear()?;

        let result = match choice {
            Some(1) => commands::dates::check_dates(session, console),
            Some(2) => commands::tables::view_tables(console),
            Some(3) => commands::menu::view_menu(config, console),
            Some(4) => commands::reservation::make_reservation(session, log, config, console),
            Some(5) => commands::update::view_reservation(session, log, config, console),
            Some(6) => {
                console.say(format!(
                    "Thank you for using {} Reservation System. Goodbye!",
                    config.restaurant_name
                ))?;
                info!("console exited by operator");
                return Ok(());
            }
            _ => {
                console.say("Invalid choice. Please select a valid option.")?;
                console.pause()
            }
        };

        if let Err(err) = result {
            if err.is_fatal() {
                return Err(err);
            }
            warn!(code = ?err.code, "{}", err.message);
            console.say(format!("Error: {}", err.message))?;
            console.pause()?;
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with the screens on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=info` - Customer saves, reservations, payments
/// - `RUST_LOG=sinaing_core=debug` - Wizard phase changes
/// - Default: WARN
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
