use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

mod cli;
mod config;

use cli::{Cli, OutputFormat};
use config::Config;
use studyplan::advice::summarizer_for;
use studyplan::input::{Prompter, collect_request};
use studyplan::plan_study;
use studyplan::render::{render_text, render_weights};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("studyplan")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("studyplan.log");

    // Log to a file so log lines never interleave with the prompts
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

// Only an explicit log_level overrides the RUST_LOG filter
fn apply_log_level(config: &Config) {
    if let Some(level) = config.log_level.as_deref() {
        match level.parse::<log::LevelFilter>() {
            Ok(filter) => log::set_max_level(filter),
            Err(_) => log::warn!("Ignoring unknown log_level: {}", level),
        }
    }
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    let json = cli.format == OutputFormat::Json;
    let styled = !json && !cli.no_color && config.output.color;
    if !styled {
        colored::control::set_override(false);
    }

    // Keep stdout clean for JSON by prompting on stderr
    let prompt_out: Box<dyn Write> = if json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut prompter = Prompter::new(io::stdin().lock(), prompt_out);
    let request = collect_request(&mut prompter).context("Failed to collect study parameters")?;

    let settings = config.planner_settings();
    let summarizer = summarizer_for(&settings.summary);
    let run = plan_study(&request, &settings, summarizer.as_ref()).context("Failed to build study plan")?;

    if cli.is_verbose() {
        let mut notes = prompter.into_output();
        writeln!(notes, "\n{}", "Verbose mode enabled".yellow())?;
        write!(notes, "{}", render_weights(&run.topics, &run.plan))?;
        notes.flush()?;
    }

    let mut stdout = io::stdout().lock();

    match cli.format {
        OutputFormat::Text => write!(stdout, "{}", render_text(&run.report, styled))?,
        OutputFormat::Json => writeln!(stdout, "{}", run.report.to_json()?)?,
    }
    stdout.flush()?;

    info!("Plan printed for {} days", run.plan.meta.days);
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    apply_log_level(&config);

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
