//! Interactive input collection
//!
//! Asks for days, hours per day and the topic list, re-asking each field
//! until it validates. Only a closed input stream ends collection early.

pub mod parse;
pub mod prompter;

use std::io::{BufRead, Write};

pub use parse::{parse_days, parse_hours, parse_rating, parse_topic_count};
pub use prompter::Prompter;

use crate::domain::{PlanRequest, TopicInput};
use crate::error::Result;

const BANNER: &str = "🧠 AI Study Plan Generator";

/// Run the full questionnaire
pub fn collect_request<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<PlanRequest> {
    prompter.say(BANNER)?;
    prompter.say(&"-".repeat(26))?;

    let days = prompter.ask_until("How many days do you have to study? ", parse_days)?;
    let hours_per_day = prompter.ask_until("How many hours per day can you study on average? ", parse_hours)?;
    let count = prompter.ask_until("How many topics or courses do you want to study? ", parse_topic_count)?;

    prompter.say("\nNow enter your topics with difficulty and priority (1 = low, 5 = high).")?;
    let mut topics = Vec::new();
    for i in 1..=count {
        prompter.say(&format!("\nTopic {}:", i))?;
        let name = prompter.ask("  Name of topic (e.g., MATH2030 Chapter 3): ")?;
        let difficulty = prompter.ask_until("  Difficulty (1-5): ", parse_rating)?;
        let priority = prompter.ask_until("  Priority (1-5): ", parse_rating)?;
        topics.push(TopicInput::new(name, difficulty, priority));
    }

    log::info!(
        "Collected {} topics for {} days at {} hours per day",
        topics.len(),
        days,
        hours_per_day
    );

    Ok(PlanRequest {
        days,
        hours_per_day,
        topics,
    })
}
