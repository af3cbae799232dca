//! Street vendor assistant engine
//!
//! Features:
//! - Bilingual (English/Tamil) reply templates per intent
//! - Randomised fallback replies with an injectable random source
//! - Single-turn reply computation over a reference catalogue
//! - Conversation log with deferred assistant replies

pub mod assistant;
pub mod conversation;
pub mod fallback;
pub mod response;

pub use assistant::{Reply, VendorAssistant};
pub use conversation::{Conversation, ConversationConfig, ConversationEvent, ConversationLog};
pub use fallback::{fallback_sentences, FallbackSelector, RandomSource, SeededRandom, ThreadRandom};
pub use response::{render_template, welcome, ResponseContext, ResponseRenderer};

// Re-export the matcher types for callers that customise keyword tables
pub use vendor_assist_text_processing::{IntentMatcher, KeywordGroup};
