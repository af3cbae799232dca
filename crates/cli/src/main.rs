//! Street Vendor Assistant terminal chat
//!
//! Reads one message per line from stdin and prints the assistant reply.

mod commands;

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use commands::{format_analysis, format_markets, format_message, format_prices, Command, HELP};
use vendor_assist_agent::{Conversation, ConversationConfig, VendorAssistant};
use vendor_assist_config::constants::env as env_vars;
use vendor_assist_config::{load_settings, Settings};
use vendor_assist_core::{Error, Language};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Priority: env vars > config/{env} > config/default > defaults
    let env = std::env::var(env_vars::ENV_SELECTOR).ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        },
    };

    init_tracing(&settings);

    tracing::info!("Starting Street Vendor Assistant v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_env = env.as_deref().unwrap_or("default"),
        language = %settings.language,
        location = %settings.location,
        "Configuration loaded"
    );

    let assistant =
        Arc::new(VendorAssistant::from_settings(&settings).context("Failed to load reference data")?);
    let conversation = Conversation::new(assistant, ConversationConfig::from_settings(&settings))
        .context("Failed to start conversation")?;

    run(&conversation).await
}

async fn run(conversation: &Conversation) -> anyhow::Result<()> {
    print_last(conversation);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Nothing => continue,
            Command::Quit => break,
            Command::Say(text) => match conversation.submit(&text).await {
                Ok(reply) => println!("{}", reply.text),
                Err(Error::EmptyInput) => continue,
                Err(e) => println!("{}", e),
            },
            Command::Language(language) => switch_language(conversation, language),
            Command::ToggleLanguage => switch_language(conversation, conversation.language().toggled()),
            Command::Location(city) => match conversation.select_location(&city) {
                Ok(location) => println!(
                    "{}, {}",
                    location.display_city(conversation.language()),
                    location.display_state(conversation.language())
                ),
                Err(e) => println!("{}", e),
            },
            Command::Prices => {
                println!(
                    "{}",
                    format_prices(conversation.assistant().reference(), conversation.language())
                );
            },
            Command::Markets => {
                println!(
                    "{}",
                    format_markets(
                        conversation.assistant().reference(),
                        &conversation.location(),
                        conversation.language()
                    )
                );
            },
            Command::Analysis => println!("{}", format_analysis(conversation.language())),
            Command::History => {
                for message in conversation.messages() {
                    println!("{}", format_message(&message));
                }
            },
            Command::Invalid(hint) => println!("{}", hint),
        }
    }

    tracing::info!(messages = conversation.message_count(), "Session ended");
    Ok(())
}

fn switch_language(conversation: &Conversation, language: Language) {
    conversation.set_language(language);
    println!("[{}]", language.native_name());
    print_last(conversation);
}

fn print_last(conversation: &Conversation) {
    if let Some(message) = conversation.messages().last() {
        println!("{}", message.content);
    }
}

/// Initialize tracing (console only)
fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.observability.log_level;
        format!("vendor_assist={},warn", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };
    subscriber.with(fmt_layer).init();
}
