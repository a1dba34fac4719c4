//! One planning run: weights, allocation, summary and report.

use serde::{Deserialize, Serialize};

use crate::advice::{AdviceSettings, Summarizer, SummarySettings};
use crate::allocation::{AllocationSettings, calculate_weights, generate_daily_plan};
use crate::domain::{Plan, PlanRequest, Topic};
use crate::error::Result;
use crate::render::{PlanReport, build_raw_plan_text};

/// Tunables for allocation, tips and summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    pub allocation: AllocationSettings,
    pub advice: AdviceSettings,
    pub summary: SummarySettings,
}

/// Everything produced from a request
#[derive(Debug, Clone)]
pub struct PlannedRun {
    pub topics: Vec<Topic>,
    pub plan: Plan,
    pub report: PlanReport,
}

pub fn plan_study(request: &PlanRequest, settings: &PlannerSettings, summarizer: &dyn Summarizer) -> Result<PlannedRun> {
    let topics = calculate_weights(&request.topics);
    let plan = generate_daily_plan(request.days, request.hours_per_day, &topics, &settings.allocation);
    let summary = summarizer.summarize(&build_raw_plan_text(&plan))?;
    let report = PlanReport::new(&plan, &topics, &settings.advice, summary);
    Ok(PlannedRun { topics, plan, report })
}
