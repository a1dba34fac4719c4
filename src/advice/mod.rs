//! Advisory text: per-topic tips and the plan-wide summary.

pub mod summary;
pub mod tips;

pub use summary::{
    FALLBACK_SUMMARY, FallbackSummarizer, GenerativeSummarizer, PlaceholderGenerator, Summarizer, SummarySettings,
    TextGenerator, summarizer_for,
};
pub use tips::{AdviceSettings, TipBand, tip_for};
