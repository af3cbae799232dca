//! Fallback replies for input that matched no intent
//!
//! Three canned sentences per language, picked uniformly at random.
//! The random source is injectable so tests can pin the sequence.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use vendor_assist_core::Language;

const FALLBACK_EN: [&str; 3] = [
    "I can help with price predictions, market information, and profit-loss calculations. What do you need?",
    "Which vegetable or item would you like to know about? You can ask about onions, tomatoes, potatoes, etc.",
    "How can I help your business? Price predictions, market info, or profit analysis?",
];

const FALLBACK_TA: [&str; 3] = [
    "நான் விலை முன்னறிவிப்பு, சந்தை தகவல், லாப நஷ்ட கணக்கீடு ஆகியவற்றில் உதவ முடியும். என்ன தேவை?",
    "எந்த காய்கறி அல்லது பொருளைப் பற்றி கேட்க விரும்புகிறீர்கள்? வெங்காயம், தக்காளி, உருளை என்று சொல்லுங்கள்.",
    "உங்கள் வியாபாரத்திற்கு எப்படி உதவலாம்? விலை, சந்தை, அல்லது லாப கணக்கீடு?",
];

/// The fixed fallback sentences for a language
pub fn fallback_sentences(language: Language) -> &'static [&'static str; 3] {
    match language {
        Language::English => &FALLBACK_EN,
        Language::Tamil => &FALLBACK_TA,
    }
}

/// Source of uniform indices
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..upper`; `upper` is never zero
    fn next_index(&self, upper: usize) -> usize;
}

/// Thread-local OS-seeded generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Deterministic generator for reproducible runs
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&self, upper: usize) -> usize {
        self.rng.lock().gen_range(0..upper)
    }
}

/// Picks one of the fallback sentences
#[derive(Clone)]
pub struct FallbackSelector {
    source: Arc<dyn RandomSource>,
}

impl std::fmt::Debug for FallbackSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackSelector").finish_non_exhaustive()
    }
}

impl Default for FallbackSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackSelector {
    /// Selector backed by the thread RNG
    pub fn new() -> Self {
        Self::with_source(Arc::new(ThreadRandom))
    }

    pub fn with_source(source: Arc<dyn RandomSource>) -> Self {
        Self { source }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_source(Arc::new(SeededRandom::new(seed)))
    }

    pub fn select(&self, language: Language) -> &'static str {
        let sentences = fallback_sentences(language);
        // Guard against a misbehaving source
        let index = self.source.next_index(sentences.len()) % sentences.len();
        sentences[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns 0, 1, 2, ... in turn
    struct Counter(AtomicUsize);

    impl RandomSource for Counter {
        fn next_index(&self, upper: usize) -> usize {
            self.0.fetch_add(1, Ordering::SeqCst) % upper
        }
    }

    #[test]
    fn test_fixed_source_exact_output() {
        let selector = FallbackSelector::with_source(Arc::new(Counter(AtomicUsize::new(0))));
        assert_eq!(selector.select(Language::English), FALLBACK_EN[0]);
        assert_eq!(selector.select(Language::English), FALLBACK_EN[1]);
        assert_eq!(selector.select(Language::Tamil), FALLBACK_TA[2]);
        assert_eq!(selector.select(Language::Tamil), FALLBACK_TA[0]);
    }

    #[test]
    fn test_only_own_language_sentences() {
        let selector = FallbackSelector::new();
        for language in Language::all() {
            let allowed = fallback_sentences(*language);
            for _ in 0..200 {
                assert!(allowed.contains(&selector.select(*language)));
            }
        }
    }

    #[test]
    fn test_uses_all_three() {
        let selector = FallbackSelector::with_seed(7);
        for language in Language::all() {
            let seen: HashSet<&str> = (0..300).map(|_| selector.select(*language)).collect();
            assert_eq!(seen.len(), 3);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = FallbackSelector::with_seed(42);
        let b = FallbackSelector::with_seed(42);
        let seq_a: Vec<&str> = (0..20).map(|_| a.select(Language::Tamil)).collect();
        let seq_b: Vec<&str> = (0..20).map(|_| b.select(Language::Tamil)).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_out_of_range_source_is_clamped() {
        struct Broken;
        impl RandomSource for Broken {
            fn next_index(&self, _upper: usize) -> usize {
                10
            }
        }
        let selector = FallbackSelector::with_source(Arc::new(Broken));
        assert_eq!(selector.select(Language::English), FALLBACK_EN[1]);
    }
}
