//! Centralized constants for the vendor assistant
//!
//! Single source of truth for default values shared by the settings
//! loader, the catalogue and the response renderer.

/// Settings defaults
pub mod defaults {
    /// City selected when nothing is configured
    pub const LOCATION: &str = "Chennai";

    /// Artificial "thinking" delay before the assistant replies
    pub const REPLY_DELAY_MS: u64 = 1500;

    /// Upper bound for the reply delay
    pub const MAX_REPLY_DELAY_MS: u64 = 10_000;

    pub const LOG_LEVEL: &str = "info";
}

/// Market lookup behaviour
pub mod markets {
    /// City whose market list is used when the selected city has none
    pub const FALLBACK_CITY: &str = "Chennai";

    /// Market count reported for a city with no known markets
    pub const UNKNOWN_CITY_COUNT: usize = 3;

    /// How many markets a market reply lists
    pub const LISTED: usize = 3;
}

/// Environment variable handling
pub mod env {
    /// Prefix for settings overrides, e.g. `VENDOR_ASSIST_REPLY_DELAY_MS`
    pub const PREFIX: &str = "VENDOR_ASSIST";

    /// Selects `config/{env}` on top of `config/default`
    pub const ENV_SELECTOR: &str = "VENDOR_ASSIST_ENV";
}
