//! # Sinaing Society Reservation Console
//!
//! Entry point. The setup and the main loop live in lib.rs.

use std::process::ExitCode;

fn main() -> ExitCode {
    sinaing_cli::run()
}
