//! Conversation types: messages, their origin, and classified intents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classified purpose of a user message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Onion stock recommendation
    Onion,
    /// Tomato stock recommendation
    Tomato,
    /// Nearby wholesale markets
    Market,
    /// Tomorrow's price forecast
    Price,
    /// Weekly profit/loss summary
    Profit,
    /// Group buying with nearby vendors
    Group,
    /// Current location info
    Location,
    /// Nothing matched
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Onion => "onion",
            Intent::Tomato => "tomato",
            Intent::Market => "market",
            Intent::Price => "price",
            Intent::Profit => "profit",
            Intent::Group => "group",
            Intent::Location => "location",
            Intent::General => "general",
        }
    }

    /// All intents, in matching priority order
    pub fn all() -> &'static [Intent] {
        &[
            Intent::Onion,
            Intent::Tomato,
            Intent::Market,
            Intent::Price,
            Intent::Profit,
            Intent::Group,
            Intent::Location,
            Intent::General,
        ]
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageOrigin {
    /// Vendor typed it
    User,
    /// Assistant reply
    Assistant,
}

impl MessageOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageOrigin::User => "user",
            MessageOrigin::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for MessageOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique id
    pub id: Uuid,
    /// Position in the log, assigned on append
    pub seq: u64,
    /// Who sent it
    pub origin: MessageOrigin,
    /// Text content
    pub content: String,
    /// When it was created
    pub timestamp: DateTime<Utc>,
    /// Intent the reply was rendered for (assistant messages only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
}

impl Message {
    /// Create a new message; `seq` is set by the log on append
    pub fn new(origin: MessageOrigin, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            seq: 0,
            origin,
            content: content.into(),
            timestamp: Utc::now(),
            intent: None,
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageOrigin::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageOrigin::Assistant, content)
    }

    /// Record the intent this reply answers
    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }

    pub fn with_seq(mut self, seq: u64) -> Self {
        self.seq = seq;
        self
    }

    pub fn is_user(&self) -> bool {
        self.origin == MessageOrigin::User
    }
}
