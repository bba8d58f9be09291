use crate::model::{Day, EmployeeId, ShiftKind, Slot};
use std::fmt;
use thiserror::Error;

/// Que faire quand un employé enfreint les règles de préférences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Valide chaque employé et écarte tous les fautifs.
    #[default]
    CollectAll,
    /// Arrête le contrôle au premier fautif ; les suivants ne sont pas vérifiés.
    HaltOnFirst,
}

/// Options d'assignation
#[derive(Debug, Clone, Copy)]
pub struct AssignOptions {
    pub max_work_days: u8,
    pub staffing_cap: u8,
    pub validation: ValidationPolicy,
    pub backfill: bool,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self {
            max_work_days: 5,
            staffing_cap: 2,
            validation: ValidationPolicy::default(),
            backfill: true,
        }
    }
}

impl AssignOptions {
    pub fn validate(&self) -> Result<(), SchedError> {
        if !(1..=7).contains(&self.max_work_days) {
            return Err(SchedError::InvalidOptions(
                "max_work_days must be between 1 and 7",
            ));
        }
        if self.staffing_cap == 0 {
            return Err(SchedError::InvalidOptions("staffing_cap must be > 0"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    SeveralShiftsSameDay { day: Day },
    TooManyPreferences { count: usize, max: u8 },
}

/// Employé écarté à la validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub employee: EmployeeId,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::SeveralShiftsSameDay { day } => write!(
                f,
                "employee {} has more than one preference shift on {day}",
                self.employee
            ),
            ViolationKind::TooManyPreferences { count, max } => write!(
                f,
                "employee {} prefers {count} days, more than the {max} allowed",
                self.employee
            ),
        }
    }
}

/// Préférence qu'aucun repli n'a pu placer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedPreference {
    pub employee: EmployeeId,
    pub slot: Slot,
}

/// Créneau resté sous le plafond après le complément.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Understaffed {
    pub day: Day,
    pub shift: ShiftKind,
    pub staffed: u8,
    pub cap: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignReport {
    pub violations: Vec<Violation>,
    pub dropped: Vec<DroppedPreference>,
    pub understaffed: Vec<Understaffed>,
    pub backfilled: usize,
}

impl AssignReport {
    pub fn has_warnings(&self) -> bool {
        !self.violations.is_empty() || !self.dropped.is_empty() || !self.understaffed.is_empty()
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid options: {0}")]
    InvalidOptions(&'static str),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
