//! Plan-wide summary text.
//!
//! The summary comes from a `Summarizer`. By default that is the static
//! fallback text. The generative path wraps the raw plan in a coaching prompt
//! and hands it to a `TextGenerator`; no real backend is wired up, so the only
//! generator available is a placeholder.

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Summary used when no generation backend is configured
pub const FALLBACK_SUMMARY: &str = "This plan balances your topics across the available days based on \
difficulty and priority. Start with the hardest or most important topics each day, and use short review \
blocks in the evening to lock things in.";

/// Response of the placeholder generator
pub const PLACEHOLDER_RESPONSE: &str = "LLM summary would appear here.";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarySettings {
    /// Route the plan text through the generative summarizer
    pub use_generator: bool,
}

/// Turns the plain-text plan into a short summary
pub trait Summarizer {
    fn summarize(&self, raw_plan: &str) -> Result<String>;
}

/// Produces free text from a prompt
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Always returns `FALLBACK_SUMMARY`
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackSummarizer;

impl Summarizer for FallbackSummarizer {
    fn summarize(&self, _raw_plan: &str) -> Result<String> {
        Ok(FALLBACK_SUMMARY.to_string())
    }
}

/// Stand-in for a text generation service. Makes no external calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderGenerator;

impl TextGenerator for PlaceholderGenerator {
    fn generate(&self, prompt: &str) -> Result<String> {
        log::debug!("Placeholder generator received {} byte prompt", prompt.len());
        Ok(PLACEHOLDER_RESPONSE.to_string())
    }
}

/// Summarizes by prompting a `TextGenerator` as a study coach
pub struct GenerativeSummarizer<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> GenerativeSummarizer<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Build the coaching prompt around the raw plan
    pub fn build_prompt(raw_plan: &str) -> String {
        let mut prompt = String::new();
        prompt.push_str("You are a friendly study coach.\n");
        prompt.push_str("Here is a raw study plan:\n\n");
        prompt.push_str(raw_plan);
        prompt.push_str("\n\n");
        prompt.push_str("Write a short, encouraging summary (4-6 sentences) explaining how to use this plan.");
        prompt
    }
}

impl<G: TextGenerator> Summarizer for GenerativeSummarizer<G> {
    fn summarize(&self, raw_plan: &str) -> Result<String> {
        let prompt = Self::build_prompt(raw_plan);
        match self.generator.generate(&prompt) {
            Ok(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            Ok(_) => {
                log::warn!("Generator returned an empty summary, using fallback");
                Ok(FALLBACK_SUMMARY.to_string())
            }
            Err(PlannerError::Generation(reason)) => {
                log::warn!("Summary generation failed, using fallback: {}", reason);
                Ok(FALLBACK_SUMMARY.to_string())
            }
            Err(e) => Err(e),
        }
    }
}

/// Pick the summarizer for the given settings
pub fn summarizer_for(settings: &SummarySettings) -> Box<dyn Summarizer> {
    if settings.use_generator {
        log::info!("Using generative summarizer");
        Box::new(GenerativeSummarizer::new(PlaceholderGenerator))
    } else {
        Box::new(FallbackSummarizer)
    }
}
