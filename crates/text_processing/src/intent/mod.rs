//! Keyword Intent Matching
//!
//! Classifies vendor messages into one of a fixed set of intents by
//! substring search over ordered keyword groups. Each group carries the
//! English and Tamil terms for the same topic.
//!
//! Groups are checked in priority order and the first hit wins. Keyword
//! sets overlap in practice ("tomato market", "market price"), so the
//! order is part of the behaviour:
//!
//! onion, tomato, market, price, profit, group, location, then general.
//!
//! # Example
//!
//! ```
//! use vendor_assist_core::Intent;
//! use vendor_assist_text_processing::intent::match_intent;
//!
//! assert_eq!(match_intent("I want to buy onion"), Intent::Onion);
//! assert_eq!(match_intent("what about market prices"), Intent::Market);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use vendor_assist_core::Intent;

/// Keywords that select one intent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub intent: Intent,
    pub keywords: Vec<String>,
}

impl KeywordGroup {
    pub fn new(intent: Intent, keywords: &[&str]) -> Self {
        Self {
            intent,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Default groups in priority order
fn default_groups() -> Vec<KeywordGroup> {
    vec![
        KeywordGroup::new(Intent::Onion, &["வெங்காயம்", "onion"]),
        KeywordGroup::new(Intent::Tomato, &["தக்காளி", "tomato"]),
        KeywordGroup::new(Intent::Market, &["சந்தை", "market", "wholesale"]),
        KeywordGroup::new(Intent::Price, &["விலை", "price", "நாளை", "tomorrow"]),
        KeywordGroup::new(Intent::Profit, &["லாபம்", "profit", "நஷ்டம்", "loss"]),
        KeywordGroup::new(Intent::Group, &["கூட்டு", "group", "together"]),
        KeywordGroup::new(Intent::Location, &["location", "இடம்", "எங்கே"]),
    ]
}

static DEFAULT_MATCHER: Lazy<IntentMatcher> = Lazy::new(IntentMatcher::new);

/// Classify input with the default keyword table
pub fn match_intent(input: &str) -> Intent {
    DEFAULT_MATCHER.matches(input)
}

/// Ordered keyword matcher
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    groups: Vec<KeywordGroup>,
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentMatcher {
    /// Matcher with the built-in English/Tamil keyword table
    pub fn new() -> Self {
        Self::with_groups(default_groups())
    }

    /// Matcher with custom groups, checked in the given order.
    ///
    /// Keywords are lowercased; empty keywords are dropped since they
    /// would match every input.
    pub fn with_groups(groups: Vec<KeywordGroup>) -> Self {
        let groups = groups
            .into_iter()
            .map(|group| KeywordGroup {
                intent: group.intent,
                keywords: group
                    .keywords
                    .into_iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect(),
            })
            .collect();
        Self { groups }
    }

    pub fn groups(&self) -> &[KeywordGroup] {
        &self.groups
    }

    /// Classify input; `General` when no group matches
    pub fn matches(&self, input: &str) -> Intent {
        match self.keyword_for(input) {
            Some((intent, keyword)) => {
                tracing::debug!(intent = %intent, keyword = %keyword, "Matched intent");
                intent
            },
            None => {
                tracing::debug!("No keyword matched, using general intent");
                Intent::General
            },
        }
    }

    /// First matching group's intent and the keyword that fired
    pub fn keyword_for(&self, input: &str) -> Option<(Intent, &str)> {
        let normalized = input.to_lowercase();

        self.groups.iter().find_map(|group| {
            group
                .keywords
                .iter()
                .find(|keyword| normalized.contains(keyword.as_str()))
                .map(|keyword| (group.intent, keyword.as_str()))
        })
    }
}
