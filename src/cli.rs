use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use risk_scorer::models::ScoreScale;

#[derive(Parser, Debug)]
#[command(
    name = "risk-scorer",
    about = "Score property inspections and classify retail site risk",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assess every property in an inspection file
    Assess(AssessArgs),

    /// Classify a single score
    Classify {
        /// Score in [0, 100]
        #[arg(allow_negative_numbers = true)]
        score: f64,

        /// Treat the score as a safety score (higher is safer)
        #[arg(long)]
        safety: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Convert a score between the risk and safety scales
    Convert {
        #[arg(allow_negative_numbers = true)]
        score: f64,

        /// Scale to convert into
        #[arg(long, value_name = "SCALE")]
        to: ScaleArg,
    },

    /// Rescale a raw reading from [MIN, MAX] onto [0, 100]
    Normalize {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        #[arg(long, allow_negative_numbers = true)]
        min: f64,

        #[arg(long, allow_negative_numbers = true)]
        max: f64,
    },

    /// Compare two risk scores
    Trend {
        #[arg(allow_negative_numbers = true)]
        current: f64,

        #[arg(allow_negative_numbers = true)]
        previous: f64,
    },

    /// Show the risk level reference table
    Levels,
}

#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Inspection file (.toml or .json)
    pub file: PathBuf,

    /// Config file [default: <file dir>/.risk-scorer/config.toml, fallback ~/.config/risk-scorer/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// PDF output path; use without value to default to risk-report.pdf
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = "risk-report.pdf")]
    pub pdf: Option<PathBuf>,

    /// Show the per-category breakdown for every property
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
    Pdf,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ScaleArg {
    Risk,
    Safety,
}

impl From<ScaleArg> for ScoreScale {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::Risk => ScoreScale::Risk,
            ScaleArg::Safety => ScoreScale::Safety,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_assess() {
        let cli = Cli::try_parse_from(["risk-scorer", "assess", "sites.toml", "--pdf", "-q"]).unwrap();
        match cli.command {
            Command::Assess(args) => {
                assert_eq!(args.file, PathBuf::from("sites.toml"));
                assert_eq!(args.pdf, Some(PathBuf::from("risk-report.pdf")));
                assert!(args.quiet);
                assert!(matches!(args.report, ReportFormat::Terminal));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_score() {
        let cli = Cli::try_parse_from(["risk-scorer", "classify", "-5", "--safety"]).unwrap();
        match cli.command {
            Command::Classify { score, safety, json } => {
                assert_eq!(score, -5.0);
                assert!(safety);
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_convert_target() {
        let cli = Cli::try_parse_from(["risk-scorer", "convert", "30", "--to", "safety"]).unwrap();
        match cli.command {
            Command::Convert { score, to } => {
                assert_eq!(score, 30.0);
                assert_eq!(ScoreScale::from(to), ScoreScale::Safety);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
