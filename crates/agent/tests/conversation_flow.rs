//! End-to-end conversation flow tests

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use vendor_assist_agent::{
    fallback_sentences, welcome, Conversation, ConversationConfig, ConversationEvent,
    FallbackSelector, VendorAssistant,
};
use vendor_assist_config::Settings;
use vendor_assist_core::{Error, Intent, Language, MessageOrigin};

fn conversation(delay: Duration) -> Conversation {
    let assistant = VendorAssistant::default().with_fallback(FallbackSelector::with_seed(11));
    let config = ConversationConfig::default().with_reply_delay(delay);
    Conversation::new(Arc::new(assistant), config).unwrap()
}

#[tokio::test]
async fn test_blank_input_leaves_log_unchanged() {
    let conv = conversation(Duration::ZERO);
    let before = conv.messages();

    for input in ["", "   ", "\n\t"] {
        assert_eq!(conv.submit(input).await.unwrap_err(), Error::EmptyInput);
    }

    let after = conv.messages();
    assert_eq!(before.len(), after.len());
    assert_eq!(before[0].id, after[0].id);
}

#[tokio::test]
async fn test_user_then_assistant_with_intent() {
    let conv = conversation(Duration::ZERO);

    conv.submit("What is the onion price?").await.unwrap();
    conv.submit("லாபம் எவ்வளவு").await.unwrap();

    let messages = conv.messages();
    assert_eq!(messages.len(), 5);

    let origins: Vec<MessageOrigin> = messages.iter().map(|m| m.origin).collect();
    assert_eq!(
        origins,
        vec![
            MessageOrigin::Assistant,
            MessageOrigin::User,
            MessageOrigin::Assistant,
            MessageOrigin::User,
            MessageOrigin::Assistant,
        ]
    );

    assert_eq!(messages[2].intent, Some(Intent::Onion));
    assert!(messages[2].content.contains("Chennai"));
    assert_eq!(messages[4].intent, Some(Intent::Profit));
    assert!(messages[4].content.contains("₹2,850"));
    assert!(messages[4].content.contains("லாபம்"));

    let seqs: Vec<u64> = messages.iter().map(|m| m.seq).collect();
    assert_eq!(seqs, vec![0, 1, 2, 3, 4]);
}

#[tokio::test]
async fn test_general_reply_is_a_fallback_sentence() {
    let conv = conversation(Duration::ZERO);
    let reply = conv.submit("good morning").await.unwrap();
    assert_eq!(reply.intent, Intent::General);
    assert!(fallback_sentences(Language::English).contains(&reply.text.as_str()));
}

#[tokio::test]
async fn test_set_language_resets_to_welcome() {
    let conv = conversation(Duration::ZERO);
    conv.submit("tomato").await.unwrap();
    assert_eq!(conv.message_count(), 3);

    conv.set_language(Language::Tamil);

    let messages = conv.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, welcome(Language::Tamil));
    assert_eq!(conv.language(), Language::Tamil);

    // Latin input now answers in Tamil
    let reply = conv.submit("tomato").await.unwrap();
    assert_eq!(reply.language, Language::Tamil);
    assert!(reply.text.starts_with("தக்காளி"));
}

#[tokio::test(start_paused = true)]
async fn test_user_message_visible_before_reply() {
    let conv = Arc::new(conversation(Duration::from_millis(1500)));

    let task = tokio::spawn({
        let conv = conv.clone();
        async move { conv.submit("group buying").await }
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    let pending = conv.messages();
    assert_eq!(pending.len(), 2);
    assert!(pending[1].is_user());

    let reply = task.await.unwrap().unwrap();
    assert_eq!(reply.intent, Intent::Group);
    assert_eq!(conv.message_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_reply_uses_state_at_submission() {
    let conv = Arc::new(conversation(Duration::from_millis(1500)));

    let task = tokio::spawn({
        let conv = conv.clone();
        async move { conv.submit("where is my location").await }
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    conv.select_location("Madurai").unwrap();
    conv.set_language(Language::Tamil);

    let reply = task.await.unwrap().unwrap();
    assert_eq!(reply.language, Language::English);
    assert!(reply.text.contains("Chennai, Tamil Nadu"));

    // Tamil welcome from the reset, then the late English reply
    let messages = conv.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, welcome(Language::Tamil));
    assert_eq!(messages[1].content, reply.text);
}

#[tokio::test]
async fn test_concurrent_submissions() {
    let conv = Arc::new(conversation(Duration::ZERO));
    let inputs = ["onion", "tomato", "market", "price", "profit", "group", "location", "hi"];

    let replies = join_all(inputs.iter().map(|input| {
        let conv = conv.clone();
        async move { conv.submit(input).await }
    }))
    .await;

    assert!(replies.iter().all(|r| r.is_ok()));

    let messages = conv.messages();
    assert_eq!(messages.len(), 1 + inputs.len() * 2);
    let users = messages.iter().filter(|m| m.is_user()).count();
    assert_eq!(users, inputs.len());
    assert!(messages.windows(2).all(|w| w[0].seq < w[1].seq));
}

#[tokio::test]
async fn test_unknown_location_rejected() {
    let conv = conversation(Duration::ZERO);
    let err = conv.select_location("Bengaluru").unwrap_err();
    assert_eq!(err, Error::UnknownLocation("Bengaluru".to_string()));
    assert_eq!(conv.location().key(), "Chennai");
}

#[tokio::test]
async fn test_events_for_submission() {
    let conv = conversation(Duration::ZERO);
    let mut rx = conv.subscribe();

    conv.submit("market").await.unwrap();

    let first = rx.recv().await.unwrap();
    let second = rx.recv().await.unwrap();
    assert!(matches!(
        first,
        ConversationEvent::MessageAppended { origin: MessageOrigin::User, seq: 1, intent: None }
    ));
    assert!(matches!(
        second,
        ConversationEvent::MessageAppended {
            origin: MessageOrigin::Assistant,
            seq: 2,
            intent: Some(Intent::Market),
        }
    ));
}

#[test]
fn test_config_from_settings() {
    let mut settings = Settings::default();
    settings.language = Language::Tamil;
    settings.location = "Salem".to_string();
    settings.reply_delay_ms = 0;

    let config = ConversationConfig::from_settings(&settings);
    let conv = Conversation::new(Arc::new(VendorAssistant::default()), config).unwrap();
    assert_eq!(conv.language(), Language::Tamil);
    assert_eq!(conv.location().key(), "Salem");
    assert_eq!(conv.messages()[0].content, welcome(Language::Tamil));
}
