//! Bilingual reply templates
//!
//! Each non-general intent has one template per language. Templates read
//! the selected location and the reference tables from an explicit
//! [`ResponseContext`] snapshot; nothing here touches UI state.

use std::fmt::Write;

use vendor_assist_config::constants::markets as market_defaults;
use vendor_assist_config::ReferenceData;
use vendor_assist_core::{Intent, Language, Location, Market, PriceEntry, Trend};

use crate::fallback::FallbackSelector;

/// Read-only inputs a reply is rendered against
#[derive(Debug, Clone, Copy)]
pub struct ResponseContext<'a> {
    pub selected_location: &'a Location,
    pub reference: &'a ReferenceData,
}

impl<'a> ResponseContext<'a> {
    pub fn new(selected_location: &'a Location, reference: &'a ReferenceData) -> Self {
        Self {
            selected_location,
            reference,
        }
    }

    pub fn prices(&self) -> &'a [PriceEntry] {
        &self.reference.prices
    }

    /// Markets for the selected city, or the default city's list
    pub fn markets(&self) -> &'a [Market] {
        self.reference.markets_for(self.selected_location.key())
    }

    /// Known market count for the selected city, or the fixed default
    pub fn market_count(&self) -> usize {
        self.reference
            .market_count(self.selected_location.key())
            .unwrap_or(market_defaults::UNKNOWN_CITY_COUNT)
    }
}

/// Greeting seeded as the first assistant message of a fresh log
pub fn welcome(language: Language) -> &'static str {
    match language {
        Language::English => {
            "Hello! I am your street food business assistant. I can help with price \
             predictions, market information, and profit-loss calculations. How can I help you?"
        },
        Language::Tamil => {
            "வணக்கம்! நான் உங்கள் தெருவோர உணவு வியாபார உதவியாளர். நான் விலை முன்னறிவிப்பு, \
             சந்தை தகவல், மற்றும் லாப நஷ்ட கணக்கீடு ஆகியவற்றில் உதவ முடியும். எப்படி உதவலாம்?"
        },
    }
}

/// Render the template for an intent; `None` for `General`
pub fn render_template(intent: Intent, language: Language, ctx: &ResponseContext<'_>) -> Option<String> {
    let text = match intent {
        Intent::Onion => onion(language, ctx),
        Intent::Tomato => tomato(language),
        Intent::Market => market(language, ctx),
        Intent::Price => price(language, ctx),
        Intent::Profit => profit(language),
        Intent::Group => group(language),
        Intent::Location => location(language, ctx),
        Intent::General => return None,
    };
    Some(text)
}

/// Renders templates, delegating `General` to the fallback selector
#[derive(Debug, Clone, Default)]
pub struct ResponseRenderer {
    fallback: FallbackSelector,
}

impl ResponseRenderer {
    pub fn new(fallback: FallbackSelector) -> Self {
        Self { fallback }
    }

    pub fn render(&self, intent: Intent, language: Language, ctx: &ResponseContext<'_>) -> String {
        render_template(intent, language, ctx)
            .unwrap_or_else(|| self.fallback.select(language).to_string())
    }
}

fn onion(language: Language, ctx: &ResponseContext<'_>) -> String {
    let city = ctx.selected_location.display_city(language);
    match language {
        Language::English => format!(
            "You have sold an average of 5 kg onions in the last 7 days. Today's price is high \
             (₹45/kg), so I recommend buying 4 kg. Wholesale price is ₹38/kg at {} market.",
            city
        ),
        Language::Tamil => format!(
            "நீங்கள் கடந்த 7 நாட்களில் சராசரியாக 5 கிலோ வெங்காயம் விற்றுள்ளீர்கள். இன்று விலை \
             உயர்ந்துள்ளது (₹45/கிலோ), எனவே 4 கிலோ வாங்க பரிந்துரைக்கிறேன். மொத்த விலை ₹38/கிலோ - {} சந்தையில்.",
            city
        ),
    }
}

fn tomato(language: Language) -> String {
    match language {
        Language::English => "Tomato price is predicted to decrease tomorrow (₹35 to ₹32). \
                              Buy only 3 kg today. You can buy more tomorrow."
            .to_string(),
        Language::Tamil => "தக்காளி விலை நாளை குறையும் என்ற முன்னறிவிப்பு உள்ளது (₹35லிருந்து ₹32). \
                            இன்று 3 கிலோ மட்டும் வாங்குங்கள். நாளை அதிகமாக வாங்கலாம்."
            .to_string(),
    }
}

fn market(language: Language, ctx: &ResponseContext<'_>) -> String {
    let markets = ctx.markets();

    let mut out = match language {
        Language::English => "Nearby wholesale markets:\n".to_string(),
        Language::Tamil => "உங்களுக்கு அருகில் உள்ள மொத்த சந்தைகள்:\n".to_string(),
    };

    for (i, m) in markets.iter().take(market_defaults::LISTED).enumerate() {
        let _ = write!(out, "\n{}. {} - {}", i + 1, m.display_name(language), m.distance);
    }

    match (markets.first(), language) {
        (Some(cheapest), Language::English) => {
            let _ = write!(out, "\n\nBest prices today at {}!", cheapest.display_name(language));
        },
        (Some(cheapest), Language::Tamil) => {
            let _ = write!(out, "\n\n{} சந்தையில் இன்று விலை குறைவு!", cheapest.display_name(language));
        },
        (None, Language::English) => out.push_str("\nNo wholesale markets are listed for your area yet."),
        (None, Language::Tamil) => out.push_str("\nஉங்கள் பகுதியில் இன்னும் மொத்த சந்தைகள் பட்டியலிடப்படவில்லை."),
    }

    out
}

fn signed_rupees(change: i64) -> String {
    match change {
        c if c > 0 => format!("+₹{}", c),
        c if c < 0 => format!("-₹{}", c.unsigned_abs()),
        _ => "±₹0".to_string(),
    }
}

fn price(language: Language, ctx: &ResponseContext<'_>) -> String {
    let prices = ctx.prices();

    let mut out = match language {
        Language::English => "Tomorrow's price prediction:\n".to_string(),
        Language::Tamil => "நாளை விலை முன்னறிவிப்பு:\n".to_string(),
    };

    for entry in prices {
        let _ = write!(
            out,
            "\n{} {}: ₹{} → ₹{} ({})",
            entry.trend().glyph(),
            entry.display_name(language),
            entry.current,
            entry.predicted,
            signed_rupees(entry.change())
        );
    }

    let falling = prices.iter().find(|entry| entry.trend() == Trend::Down);
    let hint = match (falling, language) {
        (Some(entry), Language::English) => {
            format!("{} prices will drop, be ready to buy more!", entry.display_name(language))
        },
        (Some(entry), Language::Tamil) => format!(
            "{} விலை குறையும், அதிகமாக வாங்க தயாராக இருங்கள்!",
            entry.display_name(language)
        ),
        (None, Language::English) => {
            "No prices are dropping tomorrow, buy only what you need today.".to_string()
        },
        (None, Language::Tamil) => {
            "நாளை எந்த விலையும் குறையவில்லை, இன்று தேவையானதை மட்டும் வாங்குங்கள்.".to_string()
        },
    };

    let _ = write!(out, "\n\n{}", hint);
    out
}

fn profit(language: Language) -> String {
    match language {
        Language::English => "Last week's account:\n\n\
                              💰 Total Sales: ₹2,850\n\
                              💸 Expenses: ₹1,950\n\
                              ✅ Profit: ₹900 (31.6%)\n\n\
                              Best seller: Dosa mix (45% profit)\n\
                              Highest expense: Onions (₹450)\n\n\
                              Best time: Evening 6-8 PM"
            .to_string(),
        Language::Tamil => "கடந்த வாரம் உங்கள் கணக்கு:\n\n\
                            💰 மொத்த விற்பனை: ₹2,850\n\
                            💸 செலவு: ₹1,950\n\
                            ✅ லாபம்: ₹900 (31.6%)\n\n\
                            சிறந்த விற்பனை: தோசை மிக்ஸ் (45% லாபம்)\n\
                            அதிக செலவு: வெங்காயம் (₹450)\n\n\
                            சிறந்த நேரம்: மாலை 6-8 மணி"
            .to_string(),
    }
}

fn group(language: Language) -> String {
    match language {
        Language::English => "Group buying interest from 3 vendors in your area:\n\n\
                              👥 Rajesh - 200m away\n\
                              👥 Priya - 350m away\n\
                              👥 Kumar - 500m away\n\n\
                              Group buying can save 15-20% on prices!"
            .to_string(),
        Language::Tamil => "கூட்டு வாங்குவதற்கு உங்கள் பகுதியில் 3 விற்பனையாளர்கள் ஆர்வம் காட்டியுள்ளனர்:\n\n\
                            👥 ராஜேஷ் - 200மீ தூரத்தில்\n\
                            👥 பிரியா - 350மீ தூரத்தில்\n\
                            👥 குமார் - 500மீ தூரத்தில்\n\n\
                            கூட்டாக வாங்கினால் 15-20% விலை குறைவு கிடைக்கும்!"
            .to_string(),
    }
}

fn location(language: Language, ctx: &ResponseContext<'_>) -> String {
    let loc = ctx.selected_location;
    let count = ctx.market_count();
    match language {
        Language::English => format!(
            "You are currently in {}, {}. There are {} wholesale markets in this area. \
             You can change your location from settings.",
            loc.display_city(language),
            loc.display_state(language),
            count
        ),
        Language::Tamil => format!(
            "நீங்கள் தற்போது {}, {} இல் உள்ளீர்கள். இந்த பகுதியில் {} மொத்த சந்தைகள் உள்ளன. \
             அமைப்புகளில் இருந்து உங்கள் இடத்தை மாற்றலாம்.",
            loc.display_city(language),
            loc.display_state(language),
            count
        ),
    }
}
