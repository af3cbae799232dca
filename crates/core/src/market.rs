//! Reference data types: commodity prices, locations and wholesale markets
//!
//! All of these are static, read-only tables at runtime. They are loaded
//! once (built-in or from a catalogue file) and handed to the renderer as
//! borrowed snapshots.

use serde::{Deserialize, Serialize};

use crate::language::{Language, LocalizedText};

/// Direction of a commodity's predicted price movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Derive the trend from a current and a predicted price
    pub fn between(current: u32, predicted: u32) -> Self {
        match predicted.cmp(&current) {
            std::cmp::Ordering::Greater => Self::Up,
            std::cmp::Ordering::Less => Self::Down,
            std::cmp::Ordering::Equal => Self::Stable,
        }
    }

    /// Glyph shown next to a forecast line
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Up => "🔺",
            Self::Down => "🔻",
            Self::Stable => "➡️",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the price table. Prices are whole rupees per kg.
///
/// The trend is never stored: it is always derived from `current` and
/// `predicted` so the two can't disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub name: LocalizedText,
    pub current: u32,
    pub predicted: u32,
    pub wholesale: u32,
}

impl PriceEntry {
    pub fn new(name: LocalizedText, current: u32, predicted: u32, wholesale: u32) -> Self {
        Self {
            name,
            current,
            predicted,
            wholesale,
        }
    }

    pub fn trend(&self) -> Trend {
        Trend::between(self.current, self.predicted)
    }

    /// Signed movement from current to predicted
    pub fn change(&self) -> i64 {
        i64::from(self.predicted) - i64::from(self.current)
    }

    /// Retail margin per kg over the wholesale price
    pub fn margin(&self) -> u32 {
        self.current.saturating_sub(self.wholesale)
    }

    pub fn display_name(&self, language: Language) -> &str {
        self.name.get(language)
    }
}

/// A city the vendor can operate in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: LocalizedText,
    pub state: LocalizedText,
}

impl Location {
    pub fn new(city: LocalizedText, state: LocalizedText) -> Self {
        Self { city, state }
    }

    /// English city name, used as the key into the market table
    pub fn key(&self) -> &str {
        &self.city.en
    }

    pub fn display_city(&self, language: Language) -> &str {
        self.city.get(language)
    }

    pub fn display_state(&self, language: Language) -> &str {
        self.state.get(language)
    }
}

/// A wholesale market near a city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    pub name: LocalizedText,
    /// Display distance, e.g. "2.5 km"
    pub distance: String,
    pub contact: String,
}

impl Market {
    pub fn new(name: LocalizedText, distance: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name,
            distance: distance.into(),
            contact: contact.into(),
        }
    }

    pub fn display_name(&self, language: Language) -> &str {
        self.name.get(language)
    }
}
