//! Allocation engine
//!
//! Turns topic ratings into a daily time split. Each topic's weight is
//! `difficulty + priority`, its proportion is its share of the total weight,
//! and every day receives the same `hours_per_day × proportion` slices.
//! Slices under the minimum session length are dropped rather than
//! redistributed.

use serde::{Deserialize, Serialize};

use crate::domain::{DayPlan, Plan, PlanMeta, Session, Topic, TopicInput};

/// Sessions shorter than this many hours are dropped by default
pub const DEFAULT_MIN_SESSION_HOURS: f64 = 0.25;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationSettings {
    pub min_session_hours: f64,
}

impl Default for AllocationSettings {
    fn default() -> Self {
        Self {
            min_session_hours: DEFAULT_MIN_SESSION_HOURS,
        }
    }
}

/// Compute weight and proportion for every topic, keeping input order
pub fn calculate_weights(inputs: &[TopicInput]) -> Vec<Topic> {
    let total: u32 = inputs.iter().map(TopicInput::weight).sum();
    // unreachable with validated ratings, but keeps the division defined
    let total = total.max(1);

    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            let weight = input.weight();
            Topic {
                name: input.display_name(index),
                difficulty: input.difficulty,
                priority: input.priority,
                weight,
                proportion: f64::from(weight) / f64::from(total),
            }
        })
        .collect()
}

/// Round to two decimal places; exact halves go to the even hundredth
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round_ties_even() / 100.0
}

/// Build the plan: the same session list for each of `days` days
pub fn generate_daily_plan(days: u32, hours_per_day: f64, topics: &[Topic], settings: &AllocationSettings) -> Plan {
    let sessions: Vec<Session> = topics
        .iter()
        .enumerate()
        .filter_map(|(index, topic)| {
            let hours = round_hours(hours_per_day * topic.proportion);
            if hours < settings.min_session_hours {
                log::debug!("Dropping {} ({} hours below minimum)", topic.name, hours);
                return None;
            }
            Some(Session {
                topic: index,
                name: topic.name.clone(),
                hours,
            })
        })
        .collect();

    log::info!(
        "Allocated {} of {} topics across {} days",
        sessions.len(),
        topics.len(),
        days
    );

    Plan {
        meta: PlanMeta { days, hours_per_day },
        days: (1..=days)
            .map(|day| DayPlan {
                day,
                sessions: sessions.clone(),
            })
            .collect(),
    }
}
