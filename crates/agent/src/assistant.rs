//! Single-turn reply computation
//!
//! Wires the language detector, intent matcher and renderer together.
//! Holds no conversation state; the orchestrator owns that.

use serde::Serialize;
use vendor_assist_config::{ConfigError, ReferenceData, Settings};
use vendor_assist_core::{Intent, Language, Location};
use vendor_assist_text_processing::{IntentMatcher, ScriptDetector};

use crate::fallback::FallbackSelector;
use crate::response::{ResponseContext, ResponseRenderer};

/// Assistant reply for one user message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    pub intent: Intent,
    /// Language the reply is written in
    pub language: Language,
}

/// Stateless reply engine over a reference catalogue
#[derive(Debug, Clone)]
pub struct VendorAssistant {
    reference: ReferenceData,
    detector: ScriptDetector,
    matcher: IntentMatcher,
    renderer: ResponseRenderer,
}

impl Default for VendorAssistant {
    fn default() -> Self {
        Self::new(ReferenceData::builtin())
    }
}

impl VendorAssistant {
    pub fn new(reference: ReferenceData) -> Self {
        Self {
            reference,
            detector: ScriptDetector::new(),
            matcher: IntentMatcher::new(),
            renderer: ResponseRenderer::default(),
        }
    }

    /// Assistant over the configured catalogue and keyword table
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let assistant = Self::new(settings.reference_data()?);
        Ok(match &settings.keywords {
            Some(groups) => {
                tracing::info!(groups = groups.len(), "Using configured keyword table");
                assistant.with_matcher(IntentMatcher::with_groups(groups.clone()))
            },
            None => assistant,
        })
    }

    /// Replace the fallback selector (e.g. a seeded one for tests)
    pub fn with_fallback(mut self, fallback: FallbackSelector) -> Self {
        self.renderer = ResponseRenderer::new(fallback);
        self
    }

    pub fn with_matcher(mut self, matcher: IntentMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Compute the reply for one input against the given UI language and location
    pub fn respond(&self, input: &str, configured: Language, location: &Location) -> Reply {
        let language = self.detector.response_language(input, configured);
        let intent = self.matcher.matches(input);
        let ctx = ResponseContext::new(location, &self.reference);
        let text = self.renderer.render(intent, language, &ctx);

        tracing::debug!(
            intent = %intent,
            language = %language,
            city = %location.key(),
            "Rendered reply"
        );

        Reply {
            text,
            intent,
            language,
        }
    }
}
