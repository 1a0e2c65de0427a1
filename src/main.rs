//! `skillroute` - terminal front end for the career roadmap dashboard.

use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use secrecy::Secret;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillroute::adapters::{render_dashboard, HttpCareerApi, StaticTokenProvider, TerminalNotifier};
use skillroute::application::{DashboardController, GenerateOutcome, ResetOutcome, WriteOutcome};
use skillroute::config::{AppConfig, LogFormat, LoggingConfig};
use skillroute::domain::profile::StudentProfile;

#[derive(Parser)]
#[command(name = "skillroute", version)]
#[command(about = "Career roadmap dashboard in the terminal")]
struct Cli {
    /// Career API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Bearer token for the career API
    #[arg(long, global = true, env = "SKILLROUTE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Print the dashboard view as JSON instead of text
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the dashboard (default)
    Dashboard {
        /// Show the classic phase checklist instead of the timeline
        #[arg(long, default_value_t = false)]
        classic: bool,

        /// Expand a phase card (1-based, repeatable)
        #[arg(long = "expand", value_name = "PHASE")]
        expand: Vec<usize>,
    },
    /// Toggle a phase between completed and pending (1-based)
    Toggle {
        #[arg(value_name = "PHASE")]
        phase: usize,
    },
    /// Ask the server to adapt the remaining roadmap
    Adapt,
    /// Generate a roadmap from your profile
    Generate,
    /// Delete the current career path
    Reset {
        /// Skip the confirmation prompt
        #[arg(long, short, default_value_t = false)]
        yes: bool,
    },
    /// Show the student profile
    Profile,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));
    match logging.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig, String> {
    let mut config = AppConfig::load().map_err(|e| e.to_string())?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(token) = &cli.token {
        config.api.token = Some(Secret::new(token.clone()));
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn print_dashboard(controller: &DashboardController, json: bool) -> ExitCode {
    let view = controller.view(Utc::now());
    if json {
        match serde_json::to_string_pretty(&view) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("{}", format!("failed to encode dashboard: {}", e).red());
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", render_dashboard(&view));
    }
    ExitCode::SUCCESS
}

fn print_profile(profile: &StudentProfile) {
    println!("{}", profile.display_name().bold());
    println!("  Goal: {}", profile.goal);
    println!(
        "  Time per week: {}h   Pace: {:?}",
        profile.time_per_week, profile.learning_pace
    );
    if !profile.interests.is_empty() {
        println!("  Interests: {}", profile.interests.join(", "));
    }
    for (skill, level) in &profile.skills {
        println!("  {}: {:?}", skill, level);
    }
    if let Err(e) = profile.validate() {
        println!("  {}", format!("Profile needs attention: {}", e).yellow());
    }
}

fn report_write(outcome: WriteOutcome, done: &str) -> bool {
    match outcome {
        WriteOutcome::Applied => {
            println!("{}", done.green());
            true
        }
        WriteOutcome::Skipped => {
            println!("{}", "Nothing to do.".dimmed());
            true
        }
        WriteOutcome::Failed(e) => {
            eprintln!("{}", e.to_string().red());
            false
        }
    }
}

async fn run(cli: &Cli, controller: &DashboardController) -> ExitCode {
    match &cli.command {
        None => print_dashboard(controller, cli.json),
        Some(Command::Dashboard { classic, expand }) => {
            if *classic {
                controller.toggle_display_mode();
            }
            for phase in expand.iter().filter(|p| **p > 0).map(|p| p - 1) {
                if !controller.snapshot().expansion.is_expanded(phase) {
                    controller.toggle_card(phase);
                }
            }
            print_dashboard(controller, cli.json)
        }
        Some(Command::Toggle { phase }) => {
            let Some(index) = phase.checked_sub(1) else {
                eprintln!("{}", "Phases are numbered from 1.".red());
                return ExitCode::FAILURE;
            };
            if !report_write(controller.toggle_phase(index).await, "Phase updated.") {
                return ExitCode::FAILURE;
            }
            print_dashboard(controller, cli.json)
        }
        Some(Command::Adapt) => {
            if !report_write(controller.adapt().await, "Roadmap adapted.") {
                return ExitCode::FAILURE;
            }
            print_dashboard(controller, cli.json)
        }
        Some(Command::Generate) => match controller.generate().await {
            GenerateOutcome::Generated => print_dashboard(controller, cli.json),
            GenerateOutcome::ProfileRequired => {
                eprintln!(
                    "{}",
                    "No student profile found. Complete your profile before generating a roadmap."
                        .yellow()
                );
                ExitCode::FAILURE
            }
            GenerateOutcome::Skipped => ExitCode::SUCCESS,
            GenerateOutcome::Failed(_) => ExitCode::FAILURE,
        },
        Some(Command::Reset { .. }) => match controller.reset().await {
            ResetOutcome::Reset | ResetOutcome::Skipped => ExitCode::SUCCESS,
            ResetOutcome::Declined => {
                println!("{}", "Reset cancelled.".dimmed());
                ExitCode::SUCCESS
            }
            ResetOutcome::Failed(_) => ExitCode::FAILURE,
        },
        Some(Command::Profile) => match controller.snapshot().profile {
            Some(profile) => {
                print_profile(&profile);
                ExitCode::SUCCESS
            }
            None => {
                println!("{}", "No student profile found.".yellow());
                ExitCode::FAILURE
            }
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format!("configuration error: {}", e).red());
            return ExitCode::from(2);
        }
    };
    init_tracing(&config.logging);

    let tokens = Arc::new(StaticTokenProvider::from_secret(config.api.token.clone()));
    let api = match HttpCareerApi::new(config.api.base_url.clone(), config.api.timeout(), tokens) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("{}", format!("failed to build HTTP client: {}", e).red());
            return ExitCode::FAILURE;
        }
    };
    let assume_yes = matches!(cli.command, Some(Command::Reset { yes: true }));
    let notifier = Arc::new(TerminalNotifier::new().assume_yes(assume_yes));
    let controller = DashboardController::new(Arc::new(api), notifier);

    controller.refresh().await;
    run(&cli, &controller).await
}
