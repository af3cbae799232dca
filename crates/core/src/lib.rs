//! Core types for the street vendor assistant
//!
//! This crate provides foundational types used across all other crates:
//! - Language and script definitions (English, Tamil)
//! - Reference data types (prices, locations, wholesale markets)
//! - Conversation types (messages, intents)
//! - Error types

pub mod conversation;
pub mod error;
pub mod language;
pub mod market;

pub use conversation::{Intent, Message, MessageOrigin};
pub use error::{Error, Result};
pub use language::{Language, LocalizedText, Script};
pub use market::{Location, Market, PriceEntry, Trend};
