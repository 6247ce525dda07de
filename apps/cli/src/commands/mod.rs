//! # Screens Module
//!
//! One function per main-menu option, plus the helpers they share.
//!
//! ## Screen Organization
//! ```text
//! commands/
//! ├── mod.rs          ◄─── You are here (exports)
//! ├── dates.rs        ◄─── 1. Check Available Dates
//! ├── tables.rs       ◄─── 2. View Available Table Areas
//! ├── menu.rs         ◄─── 3. View Menu (+ ordering)
//! ├── reservation.rs  ◄─── 4. Make a Reservation
//! └── update.rs       ◄─── 5. View Reservation (+ update, payment)
//! ```
//!
//! ## How Screens Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  fn screen(session / log / config ◄── only the state it needs,          │
//! │            console)              ◄── prompts + output                   │
//! │      -> AppResult<()>                                                   │
//! │                                                                         │
//! │  Bad input        → message + re-prompt inside the screen               │
//! │  Business error   → AppError, printed by the main loop                  │
//! │  End of input     → AppError(InputClosed), ends the run                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod dates;
pub mod menu;
pub mod reservation;
pub mod tables;
pub mod update;
