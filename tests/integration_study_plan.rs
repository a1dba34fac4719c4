//! End-to-end planning runs
//!
//! Drives the questionnaire with scripted answers and checks the rendered plan.

use std::io::Cursor;

use studyplan::advice::{FALLBACK_SUMMARY, SummarySettings, summarizer_for};
use studyplan::domain::DayPlan;
use studyplan::error::{PlannerError, Result};
use studyplan::input::{Prompter, collect_request};
use studyplan::render::render_text;
use studyplan::{PlannedRun, PlannerSettings, plan_study};

fn run_script(script: &str, settings: &PlannerSettings) -> Result<(PlannedRun, String)> {
    let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let request = collect_request(&mut prompter)?;
    let summarizer = summarizer_for(&settings.summary);
    let run = plan_study(&request, settings, summarizer.as_ref())?;
    let prompts = String::from_utf8(prompter.into_output()).expect("prompts are utf-8");
    Ok((run, prompts))
}

/// Two days, two topics at opposite ends of the rating scale
#[test]
fn test_weighted_two_topic_plan() -> Result<()> {
    let (run, _) = run_script("2\n4\n2\nA\n5\n5\nB\n1\n1\n", &PlannerSettings::default())?;

    let weights: Vec<u32> = run.topics.iter().map(|t| t.weight).collect();
    assert_eq!(weights, vec![10, 2]);
    assert!((run.topics[0].proportion - 0.833).abs() < 1e-3);
    assert!((run.topics[1].proportion - 0.167).abs() < 1e-3);

    for day in &run.plan.days {
        let got: Vec<(&str, f64)> = day.sessions.iter().map(|s| (s.name.as_str(), s.hours)).collect();
        assert_eq!(got, vec![("A", 3.33), ("B", 0.67)]);
    }

    let text = render_text(&run.report, false);
    assert!(text.contains("Day 1:\n  - A: 3.33 hours\n"));
    assert!(text.contains("Day 2:\n  - A: 3.33 hours\n"));
    assert!(text.contains(FALLBACK_SUMMARY));
    Ok(())
}

/// A single short slot leaves every day empty
#[test]
fn test_tiny_day_has_no_sessions() -> Result<()> {
    let (run, _) = run_script("3\n0.2\n1\n\n1\n1\n", &PlannerSettings::default())?;

    assert_eq!(run.topics[0].name, "Topic 1");
    assert_eq!(run.topics[0].proportion, 1.0);
    assert_eq!(run.plan.days.len(), 3);
    assert!(run.plan.days.iter().all(DayPlan::is_empty));

    let text = render_text(&run.report, false);
    assert_eq!(text.matches("  (No sessions)\n").count(), 3);
    Ok(())
}

/// Bad answers are re-asked and never end the run
#[test]
fn test_recovers_from_invalid_answers() -> Result<()> {
    let script = "soon\n-1\n5\n0\nmany\n2\n-3\n3\nPhysics\n7\n4\n4\nHistory\n2\nlow\n2\n\n3\n5\n";
    let (run, prompts) = run_script(script, &PlannerSettings::default())?;

    assert_eq!(run.plan.meta.days, 5);
    assert_eq!(run.plan.meta.hours_per_day, 2.0);
    let names: Vec<&str> = run.topics.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Physics", "History", "Topic 3"]);

    assert_eq!(prompts.matches("Please enter a positive whole number for days.").count(), 2);
    assert_eq!(prompts.matches("Please enter a positive number for hours per day.").count(), 2);
    assert_eq!(prompts.matches("Please enter a positive whole number for number of topics.").count(), 1);
    assert_eq!(prompts.matches("Please enter a whole number from 1 to 5.").count(), 2);
    Ok(())
}

/// Identical answers give identical plans, and every day matches day one
#[test]
fn test_plan_is_deterministic() -> Result<()> {
    let script = "4\n3.5\n3\nA\n3\n4\nB\n2\n5\nC\n1\n2\n";
    let (first, _) = run_script(script, &PlannerSettings::default())?;
    let (second, _) = run_script(script, &PlannerSettings::default())?;

    assert_eq!(first.plan, second.plan);
    for day in &first.plan.days {
        assert_eq!(day.sessions, first.plan.days[0].sessions);
    }
    let sum: f64 = first.topics.iter().map(|t| t.proportion).sum();
    assert!((sum - 1.0).abs() < 1e-9);
    Ok(())
}

/// The generator switch swaps the fallback summary for the placeholder
#[test]
fn test_generator_switch() -> Result<()> {
    let settings = PlannerSettings {
        summary: SummarySettings { use_generator: true },
        ..Default::default()
    };
    let (run, _) = run_script("1\n2\n1\nA\n3\n3\n", &settings)?;
    assert_eq!(run.report.summary, "LLM summary would appear here.");
    Ok(())
}

/// Running out of input mid-questionnaire is an error, not a partial plan
#[test]
fn test_closed_input_is_an_error() {
    let result = run_script("2\n4\n", &PlannerSettings::default());
    assert!(matches!(result, Err(PlannerError::InputClosed)));
}

#[test]
fn test_json_report_shape() -> Result<()> {
    let (run, _) = run_script("1\n4\n2\nA\n5\n5\nB\n1\n1\n", &PlannerSettings::default())?;
    let json: serde_json::Value = serde_json::from_str(&run.report.to_json()?)?;

    assert_eq!(json["meta"]["hours_per_day"], 4.0);
    assert_eq!(json["days"][0]["sessions"][1]["name"], "B");
    assert!(json["days"][0]["sessions"][0]["tip"].as_str().unwrap().starts_with("Start your session"));
    assert_eq!(json["summary"], FALLBACK_SUMMARY);

    Ok(())
}

/// Exact halves round to the even hundredth
#[test]
fn test_quarter_hour_split_rounds_half_to_even() -> Result<()> {
    let (run, _) = run_script("1\n1.25\n2\nA\n1\n1\nB\n1\n1\n", &PlannerSettings::default())?;
    let hours: Vec<f64> = run.plan.days[0].sessions.iter().map(|s| s.hours).collect();
    assert_eq!(hours, vec![0.62, 0.62]);

    let text = render_text(&run.report, false);
    assert!(text.contains("  - A: 0.62 hours\n"));
    Ok(())
}

/// Undecodable bytes are an invalid answer, asked again like any other
#[test]
fn test_non_utf8_answer_is_reasked() -> Result<()> {
    let script = b"\xff\xfe\n1\n4\n1\nA\n1\n1\n".to_vec();
    let mut prompter = Prompter::new(Cursor::new(script), Vec::new());
    let request = collect_request(&mut prompter)?;

    assert_eq!(request.days, 1);
    assert_eq!(request.hours_per_day, 4.0);
    assert_eq!(request.topics.len(), 1);

    let prompts = String::from_utf8(prompter.into_output()).expect("prompts are utf-8");
    assert_eq!(prompts.matches("Please enter a positive whole number for days.").count(), 1);
    Ok(())
}
