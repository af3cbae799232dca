//! Conversation Management
//!
//! Owns the message log, the UI language and the selected location, and
//! turns each submission into a user message followed by a deferred
//! assistant reply.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

use vendor_assist_config::Settings;
use vendor_assist_core::{Error, Intent, Language, Location, Message, MessageOrigin, Result};

use crate::assistant::{Reply, VendorAssistant};
use crate::response::welcome;

/// Append-only message log with sequence numbering
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
    next_seq: u64,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh log holding only the localized welcome message
    pub fn with_welcome(language: Language) -> Self {
        let mut log = Self::new();
        log.push(Message::assistant(welcome(language)));
        log
    }

    /// Append a message, assigning the next sequence number
    pub fn push(&mut self, message: Message) -> &Message {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.messages.push(message.with_seq(seq));
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop every message; sequence numbers keep increasing
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn reset_with_welcome(&mut self, language: Language) {
        self.clear();
        self.push(Message::assistant(welcome(language)));
    }
}

/// Conversation configuration
#[derive(Debug, Clone)]
pub struct ConversationConfig {
    /// Initial UI language
    pub language: Language,
    /// English name of the initially selected city
    pub location: String,
    /// Delay before the assistant reply is appended; zero disables it
    pub reply_delay: Duration,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl ConversationConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            language: settings.language,
            location: settings.location.clone(),
            reply_delay: settings.reply_delay(),
        }
    }

    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }
}

/// Conversation event
#[derive(Debug, Clone)]
pub enum ConversationEvent {
    /// Message appended to the log
    MessageAppended {
        origin: MessageOrigin,
        seq: u64,
        intent: Option<Intent>,
    },
    /// UI language switched; the log was reset
    LanguageChanged { from: Language, to: Language },
    /// Selected location switched
    LocationChanged { city: String },
}

/// Chat session for one vendor
pub struct Conversation {
    /// Reply engine
    assistant: Arc<VendorAssistant>,
    /// Message log
    log: Mutex<ConversationLog>,
    /// Configured UI language
    language: Mutex<Language>,
    /// Selected location
    location: Mutex<Location>,
    /// Delay before replies
    reply_delay: Duration,
    /// Event sender
    event_tx: broadcast::Sender<ConversationEvent>,
}

impl std::fmt::Debug for Conversation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conversation")
            .field("language", &*self.language.lock())
            .field("location", &self.location.lock().key())
            .field("messages", &self.log.lock().len())
            .field("reply_delay", &self.reply_delay)
            .finish()
    }
}

impl Conversation {
    /// Create a conversation seeded with the welcome message.
    ///
    /// Fails with `UnknownLocation` when the configured city is not in the
    /// assistant's catalogue.
    pub fn new(assistant: Arc<VendorAssistant>, config: ConversationConfig) -> Result<Self> {
        let location = assistant
            .reference()
            .find_location(&config.location)
            .cloned()
            .ok_or_else(|| Error::UnknownLocation(config.location.clone()))?;

        let (event_tx, _) = broadcast::channel(100);

        tracing::info!(
            language = %config.language,
            city = %location.key(),
            reply_delay_ms = config.reply_delay.as_millis() as u64,
            "Conversation started"
        );

        Ok(Self {
            assistant,
            log: Mutex::new(ConversationLog::with_welcome(config.language)),
            language: Mutex::new(config.language),
            location: Mutex::new(location),
            reply_delay: config.reply_delay,
            event_tx,
        })
    }

    /// Subscribe to conversation events
    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.event_tx.subscribe()
    }

    pub fn language(&self) -> Language {
        *self.language.lock()
    }

    pub fn location(&self) -> Location {
        self.location.lock().clone()
    }

    pub fn assistant(&self) -> &VendorAssistant {
        &self.assistant
    }

    /// Snapshot of the log
    pub fn messages(&self) -> Vec<Message> {
        self.log.lock().messages().to_vec()
    }

    pub fn message_count(&self) -> usize {
        self.log.lock().len()
    }

    /// Submit a user message and append the assistant reply.
    ///
    /// The user message is appended at once. The reply is computed against
    /// the language and location in effect at submission time and appended
    /// after the configured delay. Blank input is rejected without touching
    /// the log.
    pub async fn submit(&self, text: &str) -> Result<Reply> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let language = self.language();
        let location = self.location();

        self.append(Message::user(text));

        if !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }

        let reply = self.assistant.respond(text, language, &location);
        self.append(Message::assistant(reply.text.clone()).with_intent(reply.intent));

        Ok(reply)
    }

    /// Switch the UI language and reset the log to its welcome message
    pub fn set_language(&self, language: Language) {
        let from = {
            let mut current = self.language.lock();
            std::mem::replace(&mut *current, language)
        };
        self.log.lock().reset_with_welcome(language);

        tracing::info!(from = %from, to = %language, "Language changed, log reset");
        let _ = self
            .event_tx
            .send(ConversationEvent::LanguageChanged { from, to: language });
    }

    /// Select a location by English city name (case-insensitive)
    pub fn select_location(&self, city: &str) -> Result<Location> {
        let location = self
            .assistant
            .reference()
            .find_location(city)
            .cloned()
            .ok_or_else(|| Error::UnknownLocation(city.trim().to_string()))?;

        *self.location.lock() = location.clone();

        tracing::info!(city = %location.key(), "Location changed");
        let _ = self.event_tx.send(ConversationEvent::LocationChanged {
            city: location.key().to_string(),
        });
        Ok(location)
    }

    fn append(&self, message: Message) {
        let (origin, seq, intent) = {
            let mut log = self.log.lock();
            let appended = log.push(message);
            (appended.origin, appended.seq, appended.intent)
        };
        let _ = self
            .event_tx
            .send(ConversationEvent::MessageAppended { origin, seq, intent });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversation() -> Conversation {
        let config = ConversationConfig::default().with_reply_delay(Duration::ZERO);
        Conversation::new(Arc::new(VendorAssistant::default()), config).unwrap()
    }

    #[test]
    fn test_log_sequence_numbers() {
        let mut log = ConversationLog::new();
        assert!(log.is_empty());
        log.push(Message::user("a"));
        log.push(Message::assistant("b"));
        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[1].seq, 1);

        log.reset_with_welcome(Language::Tamil);
        assert_eq!(log.len(), 1);
        assert_eq!(log.last().unwrap().content, welcome(Language::Tamil));
        assert_eq!(log.last().unwrap().seq, 2);
    }

    #[test]
    fn test_new_seeds_welcome() {
        let conv = conversation();
        let messages = conv.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].origin, MessageOrigin::Assistant);
        assert_eq!(messages[0].content, welcome(Language::English));
    }

    #[test]
    fn test_new_rejects_unknown_location() {
        let config = ConversationConfig {
            location: "Atlantis".to_string(),
            ..ConversationConfig::default()
        };
        let err = Conversation::new(Arc::new(VendorAssistant::default()), config).unwrap_err();
        assert_eq!(err, Error::UnknownLocation("Atlantis".to_string()));
    }

    #[tokio::test]
    async fn test_submit_appends_pair() {
        let conv = conversation();
        let reply = conv.submit("tomato").await.unwrap();
        assert_eq!(reply.intent, Intent::Tomato);

        let messages = conv.messages();
        assert_eq!(messages.len(), 3);
        assert!(messages[1].is_user());
        assert_eq!(messages[2].intent, Some(Intent::Tomato));
        assert_eq!(messages[2].content, reply.text);
    }

    #[tokio::test]
    async fn test_submit_blank_rejected() {
        let conv = conversation();
        assert_eq!(conv.submit(" \t\n").await.unwrap_err(), Error::EmptyInput);
        assert_eq!(conv.message_count(), 1);
    }

    #[test]
    fn test_select_location() {
        let conv = conversation();
        assert_eq!(conv.select_location("madurai").unwrap().key(), "Madurai");
        assert_eq!(conv.location().key(), "Madurai");
        assert!(matches!(conv.select_location("Mumbai"), Err(Error::UnknownLocation(_))));
        assert_eq!(conv.location().key(), "Madurai");
    }

    #[test]
    fn test_events() {
        let conv = conversation();
        let mut rx = conv.subscribe();

        conv.set_language(Language::Tamil);
        match rx.try_recv().unwrap() {
            ConversationEvent::LanguageChanged { from, to } => {
                assert_eq!(from, Language::English);
                assert_eq!(to, Language::Tamil);
            },
            other => panic!("unexpected event: {:?}", other),
        }

        conv.select_location("Salem").unwrap();
        assert!(matches!(
            rx.try_recv().unwrap(),
            ConversationEvent::LocationChanged { city } if city == "Salem"
        ));
    }
}
