use super::{AssignOptions, ValidationPolicy, Violation, ViolationKind};
use crate::model::{Employee, PreferenceStore};

pub(super) fn validate(store: &PreferenceStore, opts: AssignOptions) -> Vec<Violation> {
    let mut out = Vec::new();

    for employee in store.iter() {
        let mut found = employee_violations(employee, opts.max_work_days);
        if found.is_empty() {
            continue;
        }
        #[cfg(feature = "logging")]
        for violation in &found {
            log_warn!(employee = %violation.employee, "{violation}");
        }
        if opts.validation == ValidationPolicy::HaltOnFirst {
            found.truncate(1);
            out.extend(found);
            break;
        }
        out.extend(found);
    }

    out
}

fn employee_violations(employee: &Employee, max_work_days: u8) -> Vec<Violation> {
    let mut out = Vec::new();

    if let Some(day) = employee.repeated_day() {
        out.push(Violation {
            employee: employee.name.clone(),
            kind: ViolationKind::SeveralShiftsSameDay { day },
        });
    }

    let count = employee.preferences.len();
    if count > usize::from(max_work_days) {
        out.push(Violation {
            employee: employee.name.clone(),
            kind: ViolationKind::TooManyPreferences {
                count,
                max: max_work_days,
            },
        });
    }

    out
}
