//! Language definitions for the two supported reply languages
//!
//! Replies are produced in English or Tamil. Every piece of user-visible
//! text carries both renditions via [`LocalizedText`].

use serde::{Deserialize, Serialize};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "en")]
    English,
    #[serde(alias = "ta")]
    Tamil,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Tamil => "ta",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Tamil => "Tamil",
        }
    }

    /// Name of the language written in its own script
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Tamil => "தமிழ்",
        }
    }

    /// Get script used by this language
    pub fn script(&self) -> Script {
        match self {
            Self::English => Script::Latin,
            Self::Tamil => Script::Tamil,
        }
    }

    /// The other supported language (used by the UI language toggle)
    pub fn toggled(&self) -> Self {
        match self {
            Self::English => Self::Tamil,
            Self::Tamil => Self::English,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "ta" | "tam" | "tamil" | "தமிழ்" => Some(Self::Tamil),
            _ => None,
        }
    }

    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[Self::English, Self::Tamil]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Language {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| crate::Error::UnknownLanguage(s.to_string()))
    }
}

/// Script systems relevant to the supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Tamil,
}

impl Script {
    /// Get Unicode range for this script (first block only)
    pub fn unicode_range(&self) -> (u32, u32) {
        match self {
            Self::Latin => (0x0000, 0x024F),
            Self::Tamil => (0x0B80, 0x0BFF),
        }
    }

    /// Check if a character belongs to this script
    pub fn contains_char(&self, c: char) -> bool {
        let code = c as u32;
        let (start, end) = self.unicode_range();
        code >= start && code <= end
    }

    /// Classify a single character, `None` for anything outside both blocks
    pub fn of(c: char) -> Option<Self> {
        [Self::Tamil, Self::Latin]
            .into_iter()
            .find(|script| script.contains_char(c))
    }
}

/// A piece of text available in both supported languages
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub ta: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ta: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ta: ta.into(),
        }
    }

    /// Get the rendition for a language
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::English => &self.en,
            Language::Tamil => &self.ta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(Language::Tamil.code(), "ta");
        assert_eq!(Language::English.code(), "en");
    }

    #[test]
    fn test_language_script() {
        assert_eq!(Language::Tamil.script(), Script::Tamil);
        assert_eq!(Language::English.script(), Script::Latin);
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::from_str_loose("ta"), Some(Language::Tamil));
        assert_eq!(Language::from_str_loose("TAMIL"), Some(Language::Tamil));
        assert_eq!(Language::from_str_loose(" English "), Some(Language::English));
        assert_eq!(Language::from_str_loose("hindi"), None);

        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Language::English.toggled(), Language::Tamil);
        assert_eq!(Language::Tamil.toggled().toggled(), Language::Tamil);
    }

    #[test]
    fn test_script_of() {
        assert_eq!(Script::of('a'), Some(Script::Latin));
        assert_eq!(Script::of('வ'), Some(Script::Tamil));
        assert_eq!(Script::of('न'), None);
    }

    #[test]
    fn test_localized_text() {
        let text = LocalizedText::new("Chennai", "சென்னை");
        assert_eq!(text.get(Language::English), "Chennai");
        assert_eq!(text.get(Language::Tamil), "சென்னை");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Language::Tamil).unwrap();
        assert_eq!(json, "\"tamil\"");

        let parsed: Language = serde_json::from_str("\"ta\"").unwrap();
        assert_eq!(parsed, Language::Tamil);
    }
}
