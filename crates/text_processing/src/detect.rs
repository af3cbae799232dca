//! Script and response-language detection

use std::collections::HashMap;
use vendor_assist_core::{Language, Script};

/// Pick the language a reply should be written in.
///
/// Any Tamil-block character in the input forces Tamil; otherwise the
/// configured UI language is kept. Empty input keeps the configured language.
pub fn detect_response_language(input: &str, configured: Language) -> Language {
    if ScriptDetector.contains_script(input, Script::Tamil) {
        Language::Tamil
    } else {
        configured
    }
}

/// Script-based detector
#[derive(Debug, Clone, Default)]
pub struct ScriptDetector;

impl ScriptDetector {
    pub fn new() -> Self {
        Self
    }

    /// Language to answer in for this input
    pub fn response_language(&self, input: &str, configured: Language) -> Language {
        let language = detect_response_language(input, configured);
        if language != configured {
            tracing::debug!(
                configured = %configured,
                effective = %language,
                "Input script overrides configured language"
            );
        }
        language
    }

    /// True if any character of `text` belongs to `script`
    pub fn contains_script(&self, text: &str, script: Script) -> bool {
        text.chars().any(|c| script.contains_char(c))
    }

    /// Detect dominant script in text
    pub fn detect_script(&self, text: &str) -> Option<Script> {
        let mut counts: HashMap<Script, usize> = HashMap::new();

        for c in text.chars() {
            if c.is_whitespace() || c.is_ascii_punctuation() || c.is_ascii_digit() {
                continue;
            }
            if let Some(script) = Script::of(c) {
                *counts.entry(script).or_insert(0) += 1;
            }
        }

        counts
            .into_iter()
            .max_by_key(|(script, count)| (*count, *script == Script::Tamil))
            .map(|(script, _)| script)
    }

    /// Detect if text mixes Latin and Tamil letters
    pub fn is_code_switched(&self, text: &str) -> bool {
        let mut latin = false;
        let mut tamil = false;

        for c in text.chars() {
            match Script::of(c) {
                Some(Script::Latin) if c.is_alphabetic() => latin = true,
                Some(Script::Tamil) => tamil = true,
                _ => {},
            }
            if latin && tamil {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tamil_overrides_configured() {
        assert_eq!(
            detect_response_language("வெங்காயம் வேண்டும்", Language::English),
            Language::Tamil
        );
        assert_eq!(
            detect_response_language("onion விலை?", Language::English),
            Language::Tamil
        );
        assert_eq!(
            detect_response_language("தக்காளி", Language::Tamil),
            Language::Tamil
        );
    }

    #[test]
    fn test_non_tamil_keeps_configured() {
        for configured in Language::all() {
            assert_eq!(detect_response_language("onion price", *configured), *configured);
            assert_eq!(detect_response_language("", *configured), *configured);
            assert_eq!(detect_response_language("प्याज", *configured), *configured);
            assert_eq!(detect_response_language("₹45 🔺", *configured), *configured);
        }
    }

    #[test]
    fn test_tamil_block_edges() {
        let first = char::from_u32(0x0B80).unwrap();
        let last = char::from_u32(0x0BFF).unwrap();
        let before = char::from_u32(0x0B7F).unwrap();
        let after = char::from_u32(0x0C00).unwrap();

        assert_eq!(detect_response_language(&first.to_string(), Language::English), Language::Tamil);
        assert_eq!(detect_response_language(&last.to_string(), Language::English), Language::Tamil);
        assert_eq!(detect_response_language(&before.to_string(), Language::English), Language::English);
        assert_eq!(detect_response_language(&after.to_string(), Language::English), Language::English);
    }

    #[test]
    fn test_detect_script() {
        let detector = ScriptDetector::new();
        assert_eq!(detector.detect_script("Hello world"), Some(Script::Latin));
        assert_eq!(detector.detect_script("வணக்கம்"), Some(Script::Tamil));
        assert_eq!(detector.detect_script("123 ..."), None);
    }

    #[test]
    fn test_contains_script() {
        let detector = ScriptDetector::new();
        assert!(detector.contains_script("onion விலை", Script::Tamil));
        assert!(detector.contains_script("onion விலை", Script::Latin));
        assert!(!detector.contains_script("onion", Script::Tamil));
    }

    #[test]
    fn test_code_switching() {
        let detector = ScriptDetector::new();
        assert!(detector.is_code_switched("onion வெங்காயம்"));
        // Digits and punctuation are Latin-range but not letters
        assert!(!detector.is_code_switched("₹45, 2 கிலோ!"));
        // Tamil vowel signs count as Tamil
        assert!(detector.is_code_switched("a\u{0BBE}"));
        assert!(!detector.is_code_switched("onion price"));
        assert!(!detector.is_code_switched("வெங்காயம் விலை"));
    }
}
