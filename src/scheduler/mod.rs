mod assignment;
mod backfill;
mod staffing;
mod types;
mod validation;

pub use backfill::{CandidateSelector, FirstInPool, RandomSelector};
pub use staffing::{ShiftCounts, StaffingCounters};
pub use types::{
    AssignOptions, AssignReport, DroppedPreference, SchedError, Understaffed, ValidationPolicy,
    Violation, ViolationKind,
};

use crate::model::{EmployeeId, PreferenceStore, Schedule};

/// Scheduler : compteurs d'effectif et planning en cours de construction
#[derive(Debug, Default)]
pub struct Scheduler {
    options: AssignOptions,
    counters: StaffingCounters,
    schedule: Schedule,
}

impl Scheduler {
    pub fn new(options: AssignOptions) -> Result<Self, SchedError> {
        options.validate()?;
        Ok(Self {
            options,
            counters: StaffingCounters::new(),
            schedule: Schedule::default(),
        })
    }

    pub fn options(&self) -> AssignOptions {
        self.options
    }
    pub fn counters(&self) -> &StaffingCounters {
        &self.counters
    }
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
    pub fn into_schedule(self) -> Schedule {
        self.schedule
    }

    /// Contrôle les préférences (un créneau par jour, maximum hebdomadaire).
    pub fn validate(&self, store: &PreferenceStore) -> Vec<Violation> {
        validation::validate(store, self.options)
    }

    /// Placement glouton des préférences ; les employés de `rejected` sont ignorés.
    pub fn assign_preferences(
        &mut self,
        store: &PreferenceStore,
        rejected: &[EmployeeId],
    ) -> Vec<DroppedPreference> {
        assignment::assign_preferences(self, store, rejected)
    }

    pub fn backfill(&mut self, selector: &mut dyn CandidateSelector) -> usize {
        backfill::backfill(self, selector)
    }

    /// Exécution complète : validation, placement, complément.
    /// Les compteurs et le planning repartent de zéro à chaque appel.
    pub fn run(
        &mut self,
        store: &PreferenceStore,
        selector: &mut dyn CandidateSelector,
    ) -> Result<AssignReport, SchedError> {
        self.counters = StaffingCounters::new();
        self.schedule = Schedule::default();

        let violations = self.validate(store);
        let rejected: Vec<EmployeeId> = violations.iter().map(|v| v.employee.clone()).collect();

        let dropped = self.assign_preferences(store, &rejected);
        let backfilled = if self.options.backfill {
            self.backfill(selector)
        } else {
            0
        };

        let understaffed = self.counters.below_cap(self.options.staffing_cap);
        #[cfg(feature = "logging")]
        for slot in &understaffed {
            log_warn!(day = %slot.day, shift = %slot.shift, staffed = slot.staffed, cap = slot.cap, "understaffed");
        }

        Ok(AssignReport {
            violations,
            dropped,
            understaffed,
            backfilled,
        })
    }
}
