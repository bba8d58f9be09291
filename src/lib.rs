#![forbid(unsafe_code)]
//! Shiftplan — planification hebdomadaire des équipes à partir des préférences (sans BD).
//!
//! - Lecture des préférences (JSON/YAML/CSV), écriture du planning (JSON/YAML/CSV).
//! - Placement glouton avec repli sur le même jour puis les jours suivants.
//! - Complément aléatoire (graine reproductible) des créneaux en sous-effectif.
//! - Logs `tracing` via la feature `logging`.

// Événements `tracing` ; ne compilent en rien sans la feature `logging`.
macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! log_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        tracing::warn!($($arg)*);
    };
}

#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod report;
pub mod scheduler;
#[cfg(feature = "serde")]
pub mod storage;

pub use model::{
    Day, Employee, EmployeeId, Origin, ParseError, PreferenceStore, Schedule, ScheduleEntry,
    ShiftKind, Slot,
};
pub use report::{ReportRenderer, TextReport};
pub use scheduler::{
    AssignOptions, AssignReport, CandidateSelector, FirstInPool, RandomSelector, SchedError,
    Scheduler, ShiftCounts, StaffingCounters, ValidationPolicy,
};
#[cfg(feature = "serde")]
pub use storage::{FileFormat, PreferenceFile, PreferenceSource, ScheduleFile, ScheduleSink};
