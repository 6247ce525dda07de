//! # State Module
//!
//! Everything one console run holds on to.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐  ┌──────────────┐  ┌──────────────────┐       │
//! │  │ ReservationSession   │  │   LogState   │  │   ConfigState    │       │
//! │  │ (sinaing-core)       │  │              │  │                  │       │
//! │  │  slots, customers,   │  │ CustomerLog  │  │ restaurant_name  │       │
//! │  │  active reservation  │  │ + lookup     │  │ log path, money  │       │
//! │  └──────────────────────┘  └──────────────┘  └──────────────────┘       │
//! │                                                                         │
//! │  Screens borrow only the parts they need.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod log;

pub use config::ConfigState;
pub use log::{LogState, LookupOutcome};

use sinaing_core::ReservationSession;
use sinaing_store::CustomerLog;

/// State for one run of the console.
#[derive(Debug)]
pub struct AppState {
    pub session: ReservationSession,
    pub log: LogState,
    pub config: ConfigState,
}

impl AppState {
    pub fn new(config: ConfigState) -> Self {
        Self::with_session(config, ReservationSession::new())
    }

    /// Uses a prepared session, e.g. one with a fixed "today".
    pub fn with_session(config: ConfigState, session: ReservationSession) -> Self {
        let log = LogState::new(CustomerLog::new(config.customer_log_path.clone()));
        AppState {
            session,
            log,
            config,
        }
    }
}
