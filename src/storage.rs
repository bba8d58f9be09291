use crate::io;
use crate::model::{PreferenceStore, Schedule};
use anyhow::{bail, Context};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Format de fichier, déduit de l'extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
    Csv,
}

impl FileFormat {
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(FileFormat::Json),
            Some("yaml" | "yml") => Ok(FileFormat::Yaml),
            Some("csv") => Ok(FileFormat::Csv),
            _ => bail!("unsupported file extension: {}", path.display()),
        }
    }
}

pub trait PreferenceSource {
    /// Charge les préférences de tous les employés.
    fn load(&self) -> anyhow::Result<PreferenceStore>;
}

pub trait ScheduleSink {
    /// Écrit le planning complet.
    fn save(&self, schedule: &Schedule) -> anyhow::Result<()>;
}

pub struct PreferenceFile {
    path: PathBuf,
    format: FileFormat,
}

impl PreferenceFile {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let format = FileFormat::from_path(&path)?;
        Ok(Self {
            path: path.as_ref().to_path_buf(),
            format,
        })
    }
}

impl PreferenceSource for PreferenceFile {
    fn load(&self) -> anyhow::Result<PreferenceStore> {
        match self.format {
            FileFormat::Json => io::import_preferences_json(&self.path),
            FileFormat::Yaml => io::import_preferences_yaml(&self.path),
            FileFormat::Csv => io::import_preferences_csv(&self.path)
                .with_context(|| format!("reading {}", self.path.display())),
        }
    }
}

pub struct ScheduleFile {
    path: PathBuf,
    format: FileFormat,
}

impl ScheduleFile {
    pub fn create<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let format = FileFormat::from_path(&path)?;
        Ok(Self::with_format(path, format))
    }

    /// Format imposé, quelle que soit l'extension du chemin.
    pub fn with_format<P: AsRef<Path>>(path: P, format: FileFormat) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format,
        }
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    fn write_atomic(&self, text: &str) -> anyhow::Result<()> {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(parent).with_context(|| "creating temp file")?;
        tmp.write_all(text.as_bytes())?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}

impl ScheduleSink for ScheduleFile {
    fn save(&self, schedule: &Schedule) -> anyhow::Result<()> {
        match self.format {
            FileFormat::Json => self.write_atomic(&io::render_schedule_json(schedule)?),
            FileFormat::Yaml => self.write_atomic(&io::render_schedule_yaml(schedule)?),
            FileFormat::Csv => io::export_schedule_csv(&self.path, schedule)
                .with_context(|| format!("writing {}", self.path.display())),
        }
    }
}
