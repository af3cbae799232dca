//! Reference data catalogue
//!
//! Holds the price table, the selectable locations and the wholesale
//! markets grouped by city. The built-in tables are the demo data; a
//! catalogue file (JSON or TOML) can replace them wholesale.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use vendor_assist_core::{LocalizedText, Location, Market, PriceEntry};

use crate::constants::markets;
use crate::ConfigError;

/// Prices, locations and markets consumed by the response renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Commodity price table, in display order
    pub prices: Vec<PriceEntry>,

    /// Selectable locations, in display order
    pub locations: Vec<Location>,

    /// Wholesale markets keyed by English city name
    #[serde(default)]
    pub markets_by_city: HashMap<String, Vec<Market>>,

    /// City whose markets are shown when the selected city has none
    #[serde(default = "default_city")]
    pub default_city: String,
}

fn default_city() -> String {
    markets::FALLBACK_CITY.to_string()
}

fn text(en: &str, ta: &str) -> LocalizedText {
    LocalizedText::new(en, ta)
}

static BUILTIN: Lazy<ReferenceData> = Lazy::new(|| {
    let tamil_nadu = || text("Tamil Nadu", "தமிழ்நாடு");

    let prices = vec![
        PriceEntry::new(text("Onion", "வெங்காயம்"), 45, 48, 38),
        PriceEntry::new(text("Tomato", "தக்காளி"), 35, 32, 28),
        PriceEntry::new(text("Potato", "உருளைக்கிழங்கு"), 25, 26, 20),
        PriceEntry::new(text("Spinach", "கீரை"), 15, 16, 12),
        PriceEntry::new(text("Carrot", "கேரட்"), 30, 28, 24),
        PriceEntry::new(text("Cabbage", "முட்டைகோஸ்"), 20, 22, 16),
    ];

    let locations = [
        ("Chennai", "சென்னை"),
        ("Coimbatore", "கோயம்புத்தூர்"),
        ("Madurai", "மதுரை"),
        ("Tiruchirappalli", "திருச்சிராப்பள்ளி"),
        ("Salem", "சேலம்"),
        ("Tirunelveli", "திருநெல்வேலி"),
    ]
    .into_iter()
    .map(|(en, ta)| Location::new(text(en, ta), tamil_nadu()))
    .collect();

    let market = |en: &str, ta: &str, distance: &str, contact: &str| {
        Market::new(text(en, ta), distance, contact)
    };

    let mut markets_by_city = HashMap::new();
    markets_by_city.insert(
        "Chennai".to_string(),
        vec![
            market("Koyambedu Market", "கோயம்பேடு சந்தை", "2.5 km", "98765 43210"),
            market("Thiruvallikeni Market", "திருவல்லிக்கேணி சந்தை", "4.1 km", "98765 43211"),
            market("Mylapore Market", "மைலாப்பூர் சந்தை", "6.2 km", "98765 43212"),
        ],
    );
    markets_by_city.insert(
        "Coimbatore".to_string(),
        vec![
            market("Ukkadam Market", "உக்கடம் சந்தை", "3.2 km", "98765 43213"),
            market("Gandhipuram Market", "காந்திபுரம் சந்தை", "5.1 km", "98765 43214"),
            market("Peelamedu Market", "பீளமேடு சந்தை", "7.3 km", "98765 43215"),
        ],
    );
    markets_by_city.insert(
        "Madurai".to_string(),
        vec![
            market("Mattuthavani Market", "மட்டுத்தவணி சந்தை", "2.8 km", "98765 43216"),
            market("Periyar Market", "பெரியார் சந்தை", "4.5 km", "98765 43217"),
            market("Anna Nagar Market", "அண்ணா நகர் சந்தை", "6.1 km", "98765 43218"),
        ],
    );

    ReferenceData {
        prices,
        locations,
        markets_by_city,
        default_city: default_city(),
    }
});

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceData {
    /// The built-in demo tables
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Load a catalogue from a JSON or TOML file (chosen by extension)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

        let data: ReferenceData = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?
            },
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
            other => {
                return Err(ConfigError::ParseError(format!(
                    "Unsupported catalogue format: {}",
                    other.unwrap_or("<none>")
                )))
            },
        };

        data.validate()?;
        tracing::info!(
            prices = data.prices.len(),
            locations = data.locations.len(),
            cities_with_markets = data.markets_by_city.len(),
            "Loaded reference data from {}",
            path.display()
        );
        Ok(data)
    }

    /// Check the catalogue is usable by the renderer
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locations.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "locations".to_string(),
                message: "At least one location is required".to_string(),
            });
        }

        if self.prices.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "prices".to_string(),
                message: "At least one price entry is required".to_string(),
            });
        }

        match self.markets_by_city.get(&self.default_city) {
            Some(list) if !list.is_empty() => Ok(()),
            _ => Err(ConfigError::InvalidValue {
                field: "default_city".to_string(),
                message: format!("No markets listed for default city {}", self.default_city),
            }),
        }
    }

    /// Find a location by English city name (case-insensitive)
    pub fn find_location(&self, city: &str) -> Option<&Location> {
        let city = city.trim();
        self.locations
            .iter()
            .find(|loc| loc.key().eq_ignore_ascii_case(city))
    }

    /// Markets for a city, falling back to the default city's list
    pub fn markets_for(&self, city: &str) -> &[Market] {
        match self.markets_by_city.get(city) {
            Some(list) if !list.is_empty() => return list,
            _ => {},
        }

        tracing::warn!(
            city = %city,
            fallback = %self.default_city,
            "No markets known for city, using default city's markets"
        );
        self.markets_by_city
            .get(&self.default_city)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of markets known for a city, `None` if it has none listed
    pub fn market_count(&self, city: &str) -> Option<usize> {
        self.markets_by_city
            .get(city)
            .filter(|list| !list.is_empty())
            .map(Vec::len)
    }
}
