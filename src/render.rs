//! Presenter: formats a finished plan as text or JSON.

use colored::*;
use serde::Serialize;

use crate::advice::{AdviceSettings, tip_for};
use crate::allocation::round_hours;
use crate::domain::{Plan, PlanMeta, Topic};
use crate::error::Result;

const RULE: &str = "==============================";

/// Hours the way people write them: `3.33`, `0.5`, `4.0`. Magnitudes
/// below `1e-4` or from `1e16` up switch to exponent form (`1e+16`, `1e-05`).
pub fn format_hours(hours: f64) -> String {
    let magnitude = hours.abs();
    if hours.is_finite() && magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponent_form(hours);
    }
    if hours.fract() == 0.0 && hours.is_finite() {
        format!("{:.1}", hours)
    } else {
        format!("{}", hours)
    }
}

fn exponent_form(hours: f64) -> String {
    let formatted = format!("{:e}", hours);
    match formatted.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}

/// Plain-text plan used as input to the summarizer
pub fn build_raw_plan_text(plan: &Plan) -> String {
    let mut lines = vec![format!(
        "Study plan for {} days, about {} hours per day.",
        plan.meta.days,
        format_hours(plan.meta.hours_per_day)
    )];
    for day in &plan.days {
        lines.push(format!("\nDay {}:", day.day));
        if day.is_empty() {
            lines.push("  (No sessions)".to_string());
        }
        for s in &day.sessions {
            lines.push(format!("  - {}: {} hours", s.name, format_hours(s.hours)));
        }
    }
    lines.join("\n")
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSession {
    pub name: String,
    pub hours: f64,
    pub tip: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportDay {
    pub day: u32,
    pub sessions: Vec<ReportSession>,
}

/// Everything shown to the user for one run
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub meta: PlanMeta,
    pub topics: Vec<Topic>,
    pub days: Vec<ReportDay>,
    pub summary: String,
}

impl PlanReport {
    pub fn new(plan: &Plan, topics: &[Topic], advice: &AdviceSettings, summary: impl Into<String>) -> Self {
        let days = plan
            .days
            .iter()
            .map(|day| ReportDay {
                day: day.day,
                sessions: day
                    .sessions
                    .iter()
                    .map(|s| ReportSession {
                        name: s.name.clone(),
                        hours: s.hours,
                        tip: topics.get(s.topic).map(|t| tip_for(t, advice)),
                    })
                    .collect(),
            })
            .collect();

        Self {
            meta: plan.meta,
            topics: topics.to_vec(),
            days,
            summary: summary.into(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn heading(text: &str, styled: bool) -> String {
    if styled {
        text.bold().cyan().to_string()
    } else {
        text.to_string()
    }
}

/// The human-readable plan, tips and summary
pub fn render_text(report: &PlanReport, styled: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", RULE));
    out.push_str(&heading("📚 Your AI Generated Study Plan", styled));
    out.push_str(&format!("\n{}\n\n", RULE));

    for day in &report.days {
        out.push_str(&heading(&format!("Day {}:", day.day), styled));
        out.push('\n');
        if day.sessions.is_empty() {
            out.push_str("  (No sessions)\n");
        }
        for s in &day.sessions {
            out.push_str(&format!("  - {}: {} hours\n", s.name, format_hours(s.hours)));
            if let Some(tip) = s.tip.as_deref().filter(|t| !t.is_empty()) {
                out.push_str(&format!("    Tip: {}\n", tip));
            }
        }
        out.push('\n');
    }

    out.push_str(&heading("Overall AI style summary:", styled));
    out.push('\n');
    out.push_str(&report.summary);
    out.push_str("\n\nGood luck, you got this ✨\n");
    out
}

/// Weight breakdown printed in verbose mode
pub fn render_weights(topics: &[Topic], plan: &Plan) -> String {
    let mut out = String::from("Topic weights:\n");
    for t in topics {
        out.push_str(&format!(
            "  {}: weight {} ({:.1}%)\n",
            t.name,
            t.weight,
            t.proportion * 100.0
        ));
    }
    out.push_str(&format!(
        "Allocated {} of {} hours per day\n",
        format_hours(round_hours(plan.total_hours_per_day())),
        format_hours(plan.meta.hours_per_day)
    ));
    out
}
