//! Rule-based study tips.
//!
//! Each topic falls into exactly one band based on whether its difficulty
//! and priority reach the "high" threshold. Difficulty is checked first.

use serde::{Deserialize, Serialize};

use crate::domain::{Rating, Topic};

/// Ratings at or above this value count as high by default
pub const DEFAULT_HIGH_THRESHOLD: u8 = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdviceSettings {
    pub high_threshold: u8,
}

impl Default for AdviceSettings {
    fn default() -> Self {
        Self {
            high_threshold: DEFAULT_HIGH_THRESHOLD,
        }
    }
}

/// The four mutually exclusive tip bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TipBand {
    /// Hard and important
    Critical,
    /// Hard only
    Challenging,
    /// Important only
    Important,
    /// Neither
    Steady,
}

impl TipBand {
    pub fn classify(difficulty: Rating, priority: Rating, threshold: u8) -> Self {
        let hard = difficulty.value() >= threshold;
        let important = priority.value() >= threshold;
        match (hard, important) {
            (true, true) => TipBand::Critical,
            (true, false) => TipBand::Challenging,
            (false, true) => TipBand::Important,
            (false, false) => TipBand::Steady,
        }
    }

    pub fn tip(self, name: &str) -> String {
        match self {
            TipBand::Critical => format!(
                "Start your session with {} while your focus is strongest. Break it into small chunks.",
                name
            ),
            TipBand::Challenging => format!(
                "{} is challenging. Try active recall and short review blocks instead of long passive reading.",
                name
            ),
            TipBand::Important => format!(
                "{} matters a lot. Make sure you review it briefly at the end of the day.",
                name
            ),
            TipBand::Steady => format!(
                "Keep {} steady and consistent. A little progress each day will stack up.",
                name
            ),
        }
    }
}

/// Tip text for a weighted topic
pub fn tip_for(topic: &Topic, settings: &AdviceSettings) -> String {
    TipBand::classify(topic.difficulty, topic.priority, settings.high_threshold).tip(&topic.name)
}
