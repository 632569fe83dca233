use anyhow::{Context, Result};
use caremap::cli::{Cli, Commands};
use caremap::{
    available_slots, generate_practice_report, rank_patients, PracticeSnapshot, PractitionerId,
    ReportOptions,
};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            snapshot,
            practitioner,
            format,
            output,
            as_of,
            config,
        } => {
            let store = PracticeSnapshot::from_file(&snapshot)?;
            let options = load_options(config.as_deref())?;
            let report = generate_practice_report(
                &store,
                PractitionerId(practitioner),
                resolve_as_of(as_of),
                &options,
            );
            let mut writer = caremap::create_writer(format.into(), open_output(output)?);
            writer.write_report(&report)
        }
        Commands::Rank {
            snapshot,
            practitioner,
            format,
            output,
            as_of,
            top,
        } => {
            let store = PracticeSnapshot::from_file(&snapshot)?;
            let mut ranked =
                rank_patients(&store, PractitionerId(practitioner), resolve_as_of(as_of));
            if let Some(top) = top {
                ranked.truncate(top);
            }
            let mut writer = caremap::create_writer(format.into(), open_output(output)?);
            writer.write_ranking(&ranked)
        }
        Commands::Slots {
            snapshot,
            practitioner,
            date,
        } => {
            let store = PracticeSnapshot::from_file(&snapshot)?;
            let open = available_slots(&store, PractitionerId(practitioner), date);
            let mut stdout = std::io::stdout();
            for slot in open {
                writeln!(stdout, "{slot}")?;
            }
            Ok(())
        }
    }
}

fn resolve_as_of(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| Local::now().date_naive())
}

fn load_options(path: Option<&Path>) -> Result<ReportOptions> {
    match path {
        Some(path) => Ok(ReportOptions::from_toml_file(path)?),
        None => Ok(ReportOptions::default()),
    }
}

fn open_output(path: Option<PathBuf>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
