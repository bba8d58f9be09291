use crate::model::{Day, Employee, PreferenceStore, Schedule, ShiftKind, Slot};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PreferenceDocument {
    #[serde(default)]
    employees: Vec<Employee>,
}

impl PreferenceDocument {
    fn into_store(self) -> anyhow::Result<PreferenceStore> {
        if self.employees.iter().any(|e| e.name.as_str().trim().is_empty()) {
            bail!("invalid employee (empty name)");
        }
        PreferenceStore::try_from(self.employees).map_err(anyhow::Error::msg)
    }
}

/// Import JSON: `{"employees":[{"name":"alice","preferences":[{"day":"Mon","time":"morning"}]}]}`
pub fn import_preferences_json<P: AsRef<Path>>(path: P) -> anyhow::Result<PreferenceStore> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    parse_preferences_json(&data).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_preferences_json(data: &[u8]) -> anyhow::Result<PreferenceStore> {
    let doc: PreferenceDocument = serde_json::from_slice(data)?;
    doc.into_store()
}

/// Import YAML, même structure que le JSON :
/// `employees: [{name: alice, preferences: [{day: Mon, time: morning}]}]`
pub fn import_preferences_yaml<P: AsRef<Path>>(path: P) -> anyhow::Result<PreferenceStore> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    parse_preferences_yaml(&data).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_preferences_yaml(data: &[u8]) -> anyhow::Result<PreferenceStore> {
    let doc: PreferenceDocument = serde_yaml::from_slice(data)?;
    doc.into_store()
}

/// Import CSV: header `name,day,shift`, une ligne par préférence.
/// Les lignes d'un même nom sont regroupées dans l'ordre de première apparition ;
/// `day` et `shift` vides inscrivent l'employé sans préférence.
pub fn import_preferences_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<PreferenceStore> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut employees: Vec<Employee> = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        let day = rec.get(1).context("missing day")?.trim();
        let shift = rec.get(2).context("missing shift")?.trim();
        if name.is_empty() {
            bail!("invalid preference row (empty name)");
        }

        let pos = match employees.iter().position(|e| e.name.as_str() == name) {
            Some(pos) => pos,
            None => {
                employees.push(Employee::new(name, Vec::new()));
                employees.len() - 1
            }
        };
        if day.is_empty() && shift.is_empty() {
            continue;
        }

        let slot = Slot::new(
            day.parse::<Day>()
                .with_context(|| format!("invalid day for employee {name}"))?,
            shift
                .parse::<ShiftKind>()
                .with_context(|| format!("invalid shift for employee {name}"))?,
        );
        employees[pos].preferences.push(slot);
    }
    PreferenceStore::try_from(employees).map_err(anyhow::Error::msg)
}

/// Planning en JSON (jolie mise en forme) : `{"alice":[{"day":"MON","shift":"morning"}]}`
pub fn render_schedule_json(schedule: &Schedule) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(schedule)?)
}

/// Planning en YAML, mêmes clés que le JSON
pub fn render_schedule_yaml(schedule: &Schedule) -> anyhow::Result<String> {
    Ok(serde_yaml::to_string(schedule)?)
}

/// Export CSV du planning: header `name,day,shift`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["name", "day", "shift"])?;
    for (name, entries) in schedule.iter() {
        for entry in entries {
            w.write_record([
                name.as_str(),
                entry.day.short_label(),
                entry.shift.label(),
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}
