use super::{DroppedPreference, Scheduler};
use crate::model::{EmployeeId, Origin, PreferenceStore, ScheduleEntry, Slot};

/// Placement glouton : chaque préférence, dans l'ordre donné, avec repli
/// sur le même jour puis sur les jours suivants.
pub(super) fn assign_preferences(
    scheduler: &mut Scheduler,
    store: &PreferenceStore,
    rejected: &[EmployeeId],
) -> Vec<DroppedPreference> {
    let mut dropped = Vec::new();

    for employee in store.iter() {
        if rejected.contains(&employee.name) {
            continue;
        }
        scheduler.schedule.register(&employee.name);

        for &slot in &employee.preferences {
            if scheduler.place(&employee.name, slot).is_none() {
                log_warn!(employee = %employee.name, %slot, "preference dropped: no shift available");
                dropped.push(DroppedPreference {
                    employee: employee.name.clone(),
                    slot,
                });
            }
        }
    }

    dropped
}

impl Scheduler {
    pub(super) fn place(&mut self, name: &EmployeeId, slot: Slot) -> Option<ScheduleEntry> {
        let entry = self.find_placement(name, slot)?;
        self.commit(name, entry);
        log_debug!(employee = %name, day = %entry.day, shift = %entry.shift, origin = entry.origin.label(), "placed");
        Some(entry)
    }

    fn find_placement(&self, name: &EmployeeId, slot: Slot) -> Option<ScheduleEntry> {
        if !self.below_weekly_max(name) {
            return None;
        }

        let cap = self.options.staffing_cap;
        if self.counters.has_room(slot.day, slot.shift, cap) {
            return Some(ScheduleEntry::new(slot.day, slot.shift, Origin::Preferred));
        }

        if let Some(shift) = self.counters.first_open_shift(slot.day, cap) {
            return Some(ScheduleEntry::new(slot.day, shift, Origin::SameDayFallback));
        }

        slot.day.following().find_map(|day| {
            self.counters
                .first_open_shift(day, cap)
                .map(|shift| ScheduleEntry::new(day, shift, Origin::NextDayFallback))
        })
    }

    pub(super) fn below_weekly_max(&self, name: &EmployeeId) -> bool {
        self.schedule.assigned_count(name) < usize::from(self.options.max_work_days)
    }

    pub(super) fn commit(&mut self, name: &EmployeeId, entry: ScheduleEntry) {
        self.counters.record_assignment(entry.day, entry.shift);
        self.schedule.push(name, entry);
    }
}
