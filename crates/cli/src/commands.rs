//! Slash commands understood by the terminal chat

use vendor_assist_config::ReferenceData;
use vendor_assist_core::{Language, Location, Message};

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain chat text
    Say(String),
    Language(Language),
    /// Switch to the other language
    ToggleLanguage,
    Location(String),
    Prices,
    Markets,
    Analysis,
    History,
    Quit,
    /// Blank line
    Nothing,
    /// Malformed command with a usage hint
    Invalid(String),
}

pub const HELP: &str =
    "Commands: /lang [en|ta], /location <city>, /prices, /markets, /analysis, /history, /quit";

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Nothing;
        }
        let Some(rest) = line.strip_prefix('/') else {
            return Command::Say(line.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name.to_lowercase().as_str() {
            "lang" | "language" if arg.is_empty() => Command::ToggleLanguage,
            "lang" | "language" => match arg.parse::<Language>() {
                Ok(language) => Command::Language(language),
                Err(e) => Command::Invalid(format!("{} (use /lang en or /lang ta)", e)),
            },
            "location" | "loc" if !arg.is_empty() => Command::Location(arg.to_string()),
            "location" | "loc" => Command::Invalid("Usage: /location <city>".to_string()),
            "prices" => Command::Prices,
            "markets" => Command::Markets,
            "analysis" => Command::Analysis,
            "history" => Command::History,
            "quit" | "exit" => Command::Quit,
            _ => Command::Invalid(HELP.to_string()),
        }
    }
}

/// Price table with trend glyph and margin over wholesale
pub fn format_prices(data: &ReferenceData, language: Language) -> String {
    data.prices
        .iter()
        .map(|entry| {
            format!(
                "{} {}: ₹{} → ₹{} (wholesale ₹{}, margin ₹{})",
                entry.trend().glyph(),
                entry.display_name(language),
                entry.current,
                entry.predicted,
                entry.wholesale,
                entry.margin()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Markets for the selected city with contact numbers, then the group purchase on offer
pub fn format_markets(data: &ReferenceData, location: &Location, language: Language) -> String {
    let mut lines: Vec<String> = data
        .markets_for(location.key())
        .iter()
        .map(|m| format!("{} - {} ({})", m.display_name(language), m.distance, m.contact))
        .collect();

    lines.push(String::new());
    lines.extend(group_purchase(language).iter().map(|line| line.to_string()));
    lines.join("\n")
}

fn group_purchase(language: Language) -> [&'static str; 3] {
    match language {
        Language::English => [
            "👥 Available Group Purchase Today",
            "4 vendors in your area want to buy onions together",
            "Total: 50 kg • Savings: ₹150",
        ],
        Language::Tamil => [
            "👥 இன்று கிடைக்கும் கூட்டு வாங்குதல்",
            "உங்கள் பகுதியில் 4 விற்பனையாளர்கள் வெங்காயம் கூட்டாக வாங்க விரும்புகின்றனர்",
            "மொத்தம்: 50 கிலோ • சேமிப்பு: ₹150",
        ],
    }
}

/// Sales summary: today's sales, weekly profit, best item and sales by time of day
pub fn format_analysis(language: Language) -> String {
    let lines: &[&str] = match language {
        Language::English => &[
            "💰 Today's Sales: ₹1,240 (Yesterday +12%)",
            "📈 Weekly Profit: ₹4,850 (Profit Margin: 32%)",
            "🏆 Best Item: Dosa Mix (45% Profit)",
            "",
            "Sales Analysis",
            "Morning (6-10 AM): ₹930",
            "Afternoon (12-2 PM): ₹1,120",
            "Evening (6-9 PM): ₹1,050",
        ],
        Language::Tamil => &[
            "💰 இன்றைய விற்பனை: ₹1,240 (நேற்றை விட +12%)",
            "📈 வாராந்திர லாபம்: ₹4,850 (லாப வரம்பு: 32%)",
            "🏆 சிறந்த பொருள்: தோசை மிக்ஸ் (45% லாபம்)",
            "",
            "விற்பனை பகுப்பாய்வு",
            "காலை (6-10 மணி): ₹930",
            "மதியம் (12-2 மணி): ₹1,120",
            "மாலை (6-9 மணி): ₹1,050",
        ],
    };
    lines.join("\n")
}

pub fn format_message(message: &Message) -> String {
    format!(
        "[{}] {}: {}",
        message.timestamp.format("%H:%M:%S"),
        message.origin,
        message.content
    )
}
