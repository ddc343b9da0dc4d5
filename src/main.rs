//! tripwise - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tripwise::{
    agent::basic,
    automation,
    budget,
    cli::{Args, Commands, Config, Verbosity},
    production::{self, Credentials},
    research, specialized,
    travel::{demo_goals, SimpleTravelAgent},
    weather::{self, WeatherAssistant},
    DisplayMode,
};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref()).context("loading configuration")?;

    let verbosity = args.effective_verbosity(&config.display.verbosity);
    init_tracing(verbosity);

    let display = display_for(&args, &config, verbosity);
    let seed = args.seed.or(config.mock.seed);
    debug!(?seed, verbosity = verbosity.as_str(), "starting");

    match &args.command {
        Commands::Compare => automation::run_comparison(&display),
        Commands::Basic { cycles } => {
            basic::run_demo(
                &config.agent.name,
                cycles.unwrap_or(config.agent.max_cycles),
                display,
            );
        }
        Commands::Travel { max_steps, pace_ms } => {
            run_travel(&config, seed, *max_steps, *pace_ms, display)?;
        }
        Commands::Specialized => {
            specialized::run_demo(config.budget.total, config.budget.duration_days, display)?;
        }
        Commands::Research => {
            research::agent::run_demo(display);
        }
        Commands::Budget => {
            budget::run_demo(display)?;
        }
        Commands::Weather { chat: false } => {
            weather::run_demo(seed, display);
        }
        Commands::Weather { chat: true } => run_weather_chat(seed, display)?,
        Commands::Production => {
            production::run_demo(Credentials::from_env(), display)?;
        }
        Commands::Config => show_config(&args, &config, verbosity)?,
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise the filter follows the verbosity flags
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn display_for(args: &Args, config: &Config, verbosity: Verbosity) -> DisplayMode {
    if !verbosity.show_narration() {
        DisplayMode::quiet()
    } else if args.no_color || !config.display.color_output {
        DisplayMode::plain()
    } else {
        DisplayMode::cli()
    }
}

fn run_travel(
    config: &Config,
    seed: Option<u64>,
    max_steps: Option<usize>,
    pace_ms: Option<u64>,
    display: DisplayMode,
) -> Result<()> {
    display.heading("🤖 AGENTIC AI TRAVEL PLANNER DEMO");
    display.rule('=', 50);
    display.say("");

    let goals = demo_goals(config.budget.total, config.budget.duration_days);
    let mut agent = SimpleTravelAgent::new(goals, seed, display)
        .with_max_steps(max_steps.unwrap_or(config.agent.max_steps))
        .with_pace(Duration::from_millis(pace_ms.unwrap_or(config.agent.pace_ms)));

    let steps = agent.autonomous_planning_cycle()?;
    agent.explain_agent_behavior();
    info!(steps, "travel planning finished");
    Ok(())
}

/// Interactive weather conversation; empty line, `quit` or Ctrl-D exits
fn run_weather_chat(seed: Option<u64>, display: DisplayMode) -> Result<()> {
    let mut assistant = WeatherAssistant::new("WeatherGuru", seed, display.clone());
    let mut editor = DefaultEditor::new()?;

    display.say(&assistant.help_text());
    display.say("Type 'summary' for recent activity, 'quit' to exit.\n");

    loop {
        match editor.readline("🌤️ > ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() || matches!(input, "quit" | "exit") {
                    break;
                }
                if let Err(err) = editor.add_history_entry(input) {
                    debug!(error = %err, "could not record history entry");
                }

                let response = if input == "summary" {
                    assistant.memory_summary()
                } else {
                    assistant.converse(input)
                };
                display.say(&response);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }

    display.say(&assistant.memory_summary());
    Ok(())
}

fn show_config(args: &Args, config: &Config, verbosity: Verbosity) -> Result<()> {
    println!("{}", "tripwise configuration".bold());
    println!();

    let source = match (&args.config, Config::default_path()) {
        (Some(path), _) => path.display().to_string(),
        (None, Some(path)) if path.exists() => path.display().to_string(),
        _ => "built-in defaults".to_string(),
    };
    println!("Source: {}", source);
    println!();
    println!("{}", config.to_toml()?);

    println!("Effective:");
    println!("  Seed:        {}", args.seed.or(config.mock.seed).map_or("random".to_string(), |s| s.to_string()));
    println!("  Verbosity:   {}", verbosity.as_str());
    println!(
        "  Credentials: {}",
        if Credentials::from_env().is_some() { "configured" } else { "demo mode" }
    );
    Ok(())
}
