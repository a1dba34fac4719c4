//! studyplan - an interactive study planner
//!
//! Collects days, hours per day and rated topics, splits each day's hours
//! across topics by `difficulty + priority`, and prints the plan with
//! per-topic tips and a summary.

pub mod advice;
pub mod allocation;
pub mod domain;
pub mod error;
pub mod input;
pub mod planner;
pub mod render;

pub use error::{FieldError, PlannerError, Result};
pub use planner::{PlannedRun, PlannerSettings, plan_study};
