//! `risk-scorer` — assess property inspections, classify scores and enforce a risk policy.
//!
//! `assess` exits `0` when every property is below `policy.fail_on` and `1`
//! otherwise; the single-score subcommands always exit `0` on success.

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use risk_scorer::assessment::{assess, classify};
use risk_scorer::config::load_config;
use risk_scorer::inspection::load_inspections;
use risk_scorer::models::ScoreScale;
use risk_scorer::report;
use risk_scorer::scoring::{
    normalize_to_risk_scale, risk_level_display, risk_to_safety_score, risk_trend,
    safety_to_risk_score,
};

mod cli;

use cli::{AssessArgs, Cli, Command, ReportFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.command);

    match cli.command {
        Command::Assess(args) => run_assess(args),
        Command::Classify { score, safety, json } => {
            let scale = if safety { ScoreScale::Safety } else { ScoreScale::Risk };
            let classification = classify(score, scale);
            if json {
                println!("{}", serde_json::to_string_pretty(&classification)?);
            } else {
                report::terminal::render_classification(&classification);
            }
            Ok(())
        }
        Command::Convert { score, to } => {
            let converted = match ScoreScale::from(to) {
                ScoreScale::Risk => safety_to_risk_score(score),
                ScoreScale::Safety => risk_to_safety_score(score),
            };
            println!("{}", converted);
            Ok(())
        }
        Command::Normalize { value, min, max } => {
            let normalized = normalize_to_risk_scale(value, min, max);
            println!("{}  ({})", normalized, risk_level_display(normalized));
            Ok(())
        }
        Command::Trend { current, previous } => {
            println!("{}", risk_trend(current, previous));
            Ok(())
        }
        Command::Levels => {
            report::terminal::render_levels();
            Ok(())
        }
    }
}

fn init_logging(command: &Command) {
    let default_level = match command {
        Command::Assess(args) if args.verbose => "debug",
        Command::Assess(args) if args.quiet => "error",
        _ => "warn",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run_assess(args: AssessArgs) -> Result<()> {
    // Config is looked up next to the inspection file
    let base_dir = args
        .file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let config = load_config(base_dir, args.config.as_deref())?;
    log::debug!(
        "{} categories configured, failing at {}",
        config.categories.len(),
        config.policy.fail_on
    );

    let inspections = load_inspections(&args.file)?;
    let assessment = assess(&config, &inspections);

    // Resolve effective report format: --pdf implies PDF format
    let report_format = match &args.pdf {
        Some(_) => ReportFormat::Pdf,
        None => args.report,
    };
    let pdf_path = args
        .pdf
        .unwrap_or_else(|| std::path::PathBuf::from("risk-report.pdf"));

    match report_format {
        ReportFormat::Terminal => {
            report::terminal::render(&assessment, &args.file, args.verbose, args.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        }
        ReportFormat::Pdf => {
            report::pdf::render(&assessment, &args.file, &pdf_path)?;
        }
    }

    // Exit code: 1 if any property reaches the policy level
    if assessment.fails(config.policy.fail_on) {
        if !args.quiet && matches!(report_format, ReportFormat::Terminal) {
            eprintln!(
                " {} at least one property is at or above {}",
                "[FAIL]".red().bold(),
                config.policy.fail_on
            );
        }
        std::process::exit(1);
    }

    Ok(())
}
