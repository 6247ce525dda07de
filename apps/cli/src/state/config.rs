//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SINAING_*`)
//! 2. Defaults (this file)
//!
//! Read-only after startup.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// Shown in the welcome and goodbye banners
    pub restaurant_name: String,

    /// Where customer records are appended
    pub customer_log_path: PathBuf,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Clear the screen between views and wait for Enter after results.
    /// Off when the console is driven by a script.
    pub interactive: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Restaurant: "Sinaing Society"
    /// - Log: `<data dir>/customers.jsonl`, else `./customers.jsonl`
    /// - Currency: PHP (P), two decimals
    /// - Interactive: on
    fn default() -> Self {
        ConfigState {
            restaurant_name: "Sinaing Society".to_string(),
            customer_log_path: default_log_path(),
            currency_symbol: sinaing_core::money::PESO_SIGN.to_string(),
            currency_decimals: 2,
            interactive: true,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SINAING_RESTAURANT_NAME`: Override restaurant name
    /// - `SINAING_LOG_PATH`: Override customer log location
    /// - `SINAING_INTERACTIVE`: `0`/`false`/`no` turns off clearing and pauses
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("SINAING_RESTAURANT_NAME").filter(|n| !n.trim().is_empty()) {
            config.restaurant_name = name;
        }

        if let Some(path) = lookup("SINAING_LOG_PATH").filter(|p| !p.is_empty()) {
            config.customer_log_path = PathBuf::from(path);
        }

        if let Some(flag) = lookup("SINAING_INTERACTIVE") {
            config.interactive = !matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }

        config
    }

    /// Creates the directory holding the customer log.
    pub fn prepare_data_dir(&self) -> std::io::Result<()> {
        match self.customer_log_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir),
            _ => Ok(()),
        }
    }

    /// Formats a centavo amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use sinaing_cli::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(150_000), "P1500.00");
    /// ```
    pub fn format_currency(&self, centavos: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = (centavos / divisor).abs();
        let frac = (centavos % divisor).abs();
        let sign = if centavos < 0 { "-" } else { "" };

        if self.currency_decimals == 0 {
            return format!("{}{}{}", sign, self.currency_symbol, whole);
        }
        format!(
            "{}{}{}.{:0width$}",
            sign,
            self.currency_symbol,
            whole,
            frac,
            width = self.currency_decimals as usize
        )
    }
}

/// Platform data directory, falling back to the working directory.
///
/// - **Linux**: `~/.local/share/sinaing-society/customers.jsonl`
/// - **macOS**: `~/Library/Application Support/com.sinaing.sinaing-society/customers.jsonl`
fn default_log_path() -> PathBuf {
    ProjectDirs::from("com", "sinaing", "sinaing-society")
        .map(|dirs| dirs.data_dir().join("customers.jsonl"))
        .unwrap_or_else(|| PathBuf::from("customers.jsonl"))
}
