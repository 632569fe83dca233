//! Report and ranking writers for the CLI surface.

use crate::engine::ranking::RiskRecord;
use crate::engine::tiers::RiskTier;
use crate::report::PracticeReport;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &PracticeReport) -> anyhow::Result<()>;
    fn write_ranking(&mut self, records: &[RiskRecord]) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &PracticeReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_ranking(&mut self, records: &[RiskRecord]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_stats(&mut self, report: &PracticeReport) -> anyhow::Result<()> {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Active patients", "Sessions", "Completed", "Attendance"]);
        table.add_row(vec![
            Cell::new(report.stats.active_patients),
            Cell::new(report.stats.total_sessions),
            Cell::new(report.stats.completed_sessions),
            Cell::new(format!("{:.2}%", report.stats.attendance_rate)),
        ]);
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_distributions(&mut self, report: &PracticeReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "SESSION STATUS".bold())?;
        for slice in &report.status_data {
            writeln!(self.writer, "  {:<14} {}", slice.name, slice.value)?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", "PATIENTS".bold())?;
        for slice in &report.patient_data {
            writeln!(self.writer, "  {:<14} {}", slice.name, slice.value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_frequency(&mut self, report: &PracticeReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "COMPLETED SESSIONS BY MONTH".bold())?;
        for point in &report.frequency_data {
            writeln!(self.writer, "  {:<4} {}", point.month, point.sessions)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_alerts(&mut self, report: &PracticeReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "RISK ALERTS".bold())?;
        if report.risk_alerts.is_empty() {
            writeln!(self.writer, "  none")?;
            return Ok(());
        }
        for alert in &report.risk_alerts {
            writeln!(
                self.writer,
                "  [{}] {} (last seen {})",
                tier_label(alert.risk),
                alert.patient,
                alert.date
            )?;
            writeln!(self.writer, "      {}", alert.reason)?;
        }
        Ok(())
    }
}

fn tier_label(tier: RiskTier) -> String {
    match tier {
        RiskTier::High => tier.label().red().bold().to_string(),
        RiskTier::Moderate => tier.label().yellow().to_string(),
        RiskTier::Low => tier.label().green().to_string(),
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &PracticeReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "PRACTICE ENGAGEMENT REPORT".bold())?;
        writeln!(self.writer)?;
        self.write_stats(report)?;
        writeln!(self.writer)?;
        self.write_distributions(report)?;
        self.write_frequency(report)?;
        self.write_alerts(report)?;
        Ok(())
    }

    fn write_ranking(&mut self, records: &[RiskRecord]) -> anyhow::Result<()> {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["#", "Patient", "Score", "Tier", "Reason"]);
        for (i, record) in records.iter().enumerate() {
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(&record.patient),
                Cell::new(record.score),
                Cell::new(record.tier.label()),
                Cell::new(&record.reason),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportOptions;
    use crate::core::{Appointment, AppointmentStatus, Patient, PatientId, PractitionerId};
    use crate::report::generate_practice_report;
    use crate::store::PracticeSnapshot;
    use chrono::NaiveDate;

    fn sample_report() -> PracticeReport {
        let snapshot = PracticeSnapshot {
            patients: vec![Patient {
                id: PatientId(1),
                name: "Ana".into(),
                practitioner_id: PractitionerId(1),
            }],
            appointments: vec![Appointment {
                id: 1,
                patient_id: PatientId(1),
                practitioner_id: PractitionerId(1),
                date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
                time: None,
                status: AppointmentStatus::Completed,
            }],
        };
        generate_practice_report(
            &snapshot,
            PractitionerId(1),
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            &ReportOptions::default(),
        )
    }

    #[test]
    fn json_writer_emits_parseable_output() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["stats"]["total_sessions"], 1);
        assert_eq!(value["risk_alerts"][0]["risk"], "High");
    }

    #[test]
    fn terminal_writer_includes_alert_reason() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer).write_report(&sample_report()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("RISK ALERTS"));
        assert!(text.contains("absent >45 days"));
    }
}
