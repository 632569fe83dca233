use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "caremap")]
#[command(about = "Patient engagement risk analyzer for clinic practices", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the practice-wide engagement report
    Report {
        /// Path to the practice snapshot (JSON)
        snapshot: PathBuf,

        /// Practitioner whose practice to report on
        #[arg(short, long)]
        practitioner: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reference date for derived metrics (defaults to today)
        #[arg(long = "as-of")]
        as_of: Option<NaiveDate>,

        /// Report options file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Rank a practitioner's patients by engagement risk
    Rank {
        /// Path to the practice snapshot (JSON)
        snapshot: PathBuf,

        /// Practitioner whose patients to rank
        #[arg(short, long)]
        practitioner: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reference date for derived metrics (defaults to today)
        #[arg(long = "as-of")]
        as_of: Option<NaiveDate>,

        /// Show only the top N patients
        #[arg(long)]
        top: Option<usize>,
    },

    /// List open appointment slots for a practitioner on a date
    Slots {
        /// Path to the practice snapshot (JSON)
        snapshot: PathBuf,

        /// Practitioner whose schedule to check
        #[arg(short, long)]
        practitioner: i64,

        /// Calendar date to check
        #[arg(short, long)]
        date: NaiveDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_report_invocation() {
        let cli = Cli::try_parse_from([
            "caremap",
            "report",
            "snapshot.json",
            "--practitioner",
            "3",
            "--as-of",
            "2026-06-01",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Report {
                practitioner,
                as_of,
                format,
                ..
            } => {
                assert_eq!(practitioner, 3);
                assert_eq!(as_of, Some(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_an_unparseable_as_of_date() {
        let result = Cli::try_parse_from([
            "caremap",
            "rank",
            "snapshot.json",
            "--practitioner",
            "1",
            "--as-of",
            "junk",
        ]);
        assert!(result.is_err());
    }
}
