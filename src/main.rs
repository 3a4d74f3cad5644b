use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use seoscore::error::RunError;
use seoscore::input::load_audit;
use seoscore::pipeline::run_audit;
use seoscore::pipeline::stage5_report::{ReportFormat, write_reports};
use seoscore::{classify_score, classify_vital_tag, difficulty_level, score_opportunity};

#[derive(Debug, Parser)]
#[command(name = "seoscore", version, about = "Deterministic SEO audit scoring")]
struct Cli {
    /// Default log level debug (RUST_LOG still takes precedence).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score an audit metrics file and write reports.
    Run(RunConfig),
    /// Classify one keyword's opportunity.
    Keyword {
        #[arg(long, allow_hyphen_values = true)]
        volume: i64,
        #[arg(long, allow_hyphen_values = true)]
        difficulty: i64,
        #[arg(long)]
        position: Option<u32>,
    },
    /// Rate one Core Web Vitals sample.
    Vital {
        #[arg(long)]
        metric: String,
        #[arg(long, allow_hyphen_values = true)]
        value: f64,
    },
    /// Band a 0..=100 score.
    Score {
        #[arg(long, allow_hyphen_values = true)]
        value: f64,
    },
}

#[derive(Debug, Clone, clap::Args)]
struct RunConfig {
    /// Audit metrics JSON (`.gz` accepted).
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = FormatArg::All)]
    format: FormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Json,
    Text,
    All,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => ReportFormat::Json,
            FormatArg::Text => ReportFormat::Text,
            FormatArg::All => ReportFormat::All,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    seoscore::logging::init(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), RunError> {
    match command {
        Command::Run(config) => {
            let audit = load_audit(&config.input)?;
            let report = run_audit(&audit)?;
            write_reports(&report, &config.out, config.format.into())?;
        }
        Command::Keyword {
            volume,
            difficulty,
            position,
        } => {
            let b = score_opportunity(volume, difficulty, position)?;
            let level = difficulty_level(difficulty)?;
            println!(
                "{} (volume={} difficulty={} position={} total={}; difficulty level {})",
                b.opportunity.as_str(),
                b.volume_score,
                b.difficulty_score,
                b.position_score,
                b.total,
                level.label()
            );
        }
        Command::Vital { metric, value } => {
            let rating = classify_vital_tag(&metric, value)?;
            println!("{}", rating.as_str());
        }
        Command::Score { value } => {
            let class = classify_score(value);
            println!("{} {} ({})", class.score, class.label, class.color_tag);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
