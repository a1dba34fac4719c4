//! Domain types for studyplan
//!
//! - Topic: a study topic with difficulty/priority ratings and derived weight
//! - Plan: per-day session lists plus the run parameters (PlanMeta)
//! - PlanRequest: everything collected from the user for one run

pub mod plan;
pub mod topic;

pub use plan::{DayPlan, Plan, PlanMeta, Session};
pub use topic::{Rating, Topic, TopicInput};

/// Validated answers gathered by the input collector
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub days: u32,
    pub hours_per_day: f64,
    pub topics: Vec<TopicInput>,
}
