//! Plan types
//!
//! A plan is one list of sessions per day, plus the run parameters it was
//! built from.

use serde::Serialize;

/// Run-level parameters carried alongside the plan for reporting
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanMeta {
    pub days: u32,
    pub hours_per_day: f64,
}

/// Hours allocated to one topic on one day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    /// Index of the topic this session was allocated from
    pub topic: usize,
    pub name: String,
    pub hours: f64,
}

/// Sessions for a single day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    /// 1-based day index
    pub day: u32,
    pub sessions: Vec<Session>,
}

impl DayPlan {
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn total_hours(&self) -> f64 {
        self.sessions.iter().map(|s| s.hours).sum()
    }
}

/// The full study plan, days in ascending order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub meta: PlanMeta,
    pub days: Vec<DayPlan>,
}

impl Plan {
    /// Allocated hours on a single day. Every day carries the same split.
    pub fn total_hours_per_day(&self) -> f64 {
        self.days.first().map(DayPlan::total_hours).unwrap_or(0.0)
    }
}
