use crate::model::{Origin, Schedule, ScheduleEntry};
use crate::scheduler::AssignReport;
use std::fmt::Write;

/// Permet de customiser le rendu du planning (console, mail, etc.).
pub trait ReportRenderer {
    fn render(&self, schedule: &Schedule, report: &AssignReport) -> String;
}

/// Rendu texte : une ligne par employé, puis les avertissements.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport {
    /// Ajoute la provenance des affectations obtenues par repli ou complément.
    pub with_origin: bool,
}

impl TextReport {
    fn entry(&self, entry: &ScheduleEntry) -> String {
        if self.with_origin && entry.origin != Origin::Preferred {
            format!("{} {} ({})", entry.day, entry.shift, entry.origin.label())
        } else {
            format!("{} {}", entry.day, entry.shift)
        }
    }
}

impl ReportRenderer for TextReport {
    fn render(&self, schedule: &Schedule, report: &AssignReport) -> String {
        let mut out = String::new();

        for (name, entries) in schedule.iter() {
            let line = if entries.is_empty() {
                "-".to_string()
            } else {
                entries
                    .iter()
                    .map(|e| self.entry(e))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let _ = writeln!(out, "{name}: {line}");
        }

        for violation in &report.violations {
            let _ = writeln!(out, "warning: {violation}");
        }
        for dropped in &report.dropped {
            let _ = writeln!(
                out,
                "warning: preference dropped: {} {}",
                dropped.employee, dropped.slot
            );
        }
        for slot in &report.understaffed {
            let _ = writeln!(
                out,
                "warning: understaffed: {} {} ({}/{})",
                slot.day, slot.shift, slot.staffed, slot.cap
            );
        }

        out
    }
}
