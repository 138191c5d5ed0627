//! Coursegate CLI - evaluate progressive unlock policies over a course.

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use coursegate_core::{ContentKind, LockState, PeriodUnit, UnlockPolicyConfig};
use coursegate_progress::{CourseReport, ModuleReport};
use coursegate_storage::{CourseSource, JsonCourseSource};

#[derive(Parser)]
#[command(name = "coursegate")]
#[command(about = "Progressive content-unlock evaluation for courses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide which modules are unlocked
    Evaluate {
        /// Course JSON file
        course: PathBuf,
        /// Policy JSON file (overrides a policy embedded in the course)
        #[arg(long)]
        policy: Option<PathBuf>,
        /// Turn gating on or off
        #[arg(long)]
        enabled: Option<bool>,
        /// Previous-period completion required (0-100)
        #[arg(long)]
        threshold: Option<f64>,
        /// Period granularity (day, week, month, term)
        #[arg(long)]
        unit: Option<PeriodUnit>,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show per-period completion and content totals
    Summary {
        /// Course JSON file
        course: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Evaluate { course, policy, enabled, threshold, unit, json } => {
            let mut source = JsonCourseSource::new(&course);
            if let Some(path) = &policy {
                source = source.with_policy_file(path);
            }

            let modules = source
                .load_modules()
                .await
                .with_context(|| format!("Failed to load course {}", course.display()))?;
            let policy = apply_overrides(
                source.load_policy().await.context("Failed to load unlock policy")?,
                enabled,
                threshold,
                unit,
            )?;

            let report = CourseReport::build(&modules, policy);
            info!(
                modules = report.modules.len(),
                unlocked = report.states.unlocked,
                locked = report.states.locked_by_policy,
                empty = report.states.locked_by_empty_content,
                "Evaluated course"
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_decisions(&report);
            }
        }
        Commands::Summary { course } => {
            let source = JsonCourseSource::new(&course);
            let modules = source
                .load_modules()
                .await
                .with_context(|| format!("Failed to load course {}", course.display()))?;

            // Gating doesn't affect the summary.
            let report = CourseReport::build(&modules, UnlockPolicyConfig::default());
            print_summary(&report);
        }
    }

    Ok(())
}

fn apply_overrides(
    mut policy: UnlockPolicyConfig,
    enabled: Option<bool>,
    threshold: Option<f64>,
    unit: Option<PeriodUnit>,
) -> Result<UnlockPolicyConfig> {
    if let Some(enabled) = enabled {
        policy.enabled = enabled;
    }
    if let Some(threshold) = threshold {
        policy.threshold_percent = threshold;
    }
    if let Some(unit) = unit {
        policy.period_unit = unit;
    }
    policy.validate()?;
    Ok(policy)
}

fn print_decisions(report: &CourseReport) {
    let policy = &report.policy;
    println!(
        "Unlock policy: {} (threshold {}%, per {})",
        if policy.enabled { "enabled" } else { "disabled" },
        policy.threshold_percent,
        policy.period_unit.label()
    );
    println!("Modules ({})", report.modules.len());
    for module in &report.modules {
        println!("  {}", format_module(module));
    }
}

fn format_module(module: &ModuleReport) -> String {
    let mut line = format!(
        "{:>3} | {:<8} | {:>4} items | {}",
        module.period_number,
        format_state(&module.decision.state),
        module.item_count,
        module.title,
    );
    if let Some(reason) = &module.decision.reason {
        line.push_str(" - ");
        line.push_str(reason);
    }
    line
}

fn format_state(state: &LockState) -> &'static str {
    match state {
        LockState::Unlocked => "OPEN",
        LockState::LockedByPolicy { .. } => "LOCKED",
        LockState::LockedByEmptyContent => "EMPTY",
    }
}

fn print_summary(report: &CourseReport) {
    println!("Course summary");
    println!("  Modules: {}", report.modules.len());
    println!("  Items: {}", report.content.total());
    for kind in ContentKind::ALL {
        println!("    {}: {}", kind, report.content.get(kind));
    }

    println!("Periods ({})", report.periods.len());
    for period in &report.periods {
        println!(
            "  {:>3} | {} modules | {:>6.1}% complete | {} items",
            period.period_number, period.module_count, period.mean_completion, period.item_count
        );
    }
}
