//! Text processing for the vendor assistant
//!
//! This crate provides:
//! - **Script Detection**: pick the reply language from the input's script
//! - **Intent Matching**: classify a message by ordered bilingual keywords
//!
//! # Example
//!
//! ```
//! use vendor_assist_core::{Intent, Language};
//! use vendor_assist_text_processing::{detect_response_language, match_intent};
//!
//! let input = "தக்காளி விலை";
//! assert_eq!(detect_response_language(input, Language::English), Language::Tamil);
//! assert_eq!(match_intent(input), Intent::Tomato);
//! ```

pub mod detect;
pub mod intent;

pub use detect::{detect_response_language, ScriptDetector};
pub use intent::{match_intent, IntentMatcher, KeywordGroup};
