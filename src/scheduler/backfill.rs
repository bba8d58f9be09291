use super::Scheduler;
use crate::model::{Day, EmployeeId, Origin, ScheduleEntry, ShiftKind};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// Choix du candidat pour compléter un créneau en sous-effectif.
///
/// `pool` ne contient que des employés encore sous leur maximum hebdomadaire.
/// Renvoyer `None` laisse le créneau en sous-effectif.
pub trait CandidateSelector {
    fn select_candidate<'a>(
        &mut self,
        pool: &'a [EmployeeId],
        day: Day,
        shift: ShiftKind,
    ) -> Option<&'a EmployeeId>;
}

/// Tirage uniforme dans le pool, reproductible à graine égale.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: Pcg64Mcg,
}

impl RandomSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg64Mcg::from_entropy(),
        }
    }
}

impl CandidateSelector for RandomSelector {
    fn select_candidate<'a>(
        &mut self,
        pool: &'a [EmployeeId],
        _day: Day,
        _shift: ShiftKind,
    ) -> Option<&'a EmployeeId> {
        pool.choose(&mut self.rng)
    }
}

/// Toujours le premier du pool (ordre de traitement) : utile pour les tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstInPool;

impl CandidateSelector for FirstInPool {
    fn select_candidate<'a>(
        &mut self,
        pool: &'a [EmployeeId],
        _day: Day,
        _shift: ShiftKind,
    ) -> Option<&'a EmployeeId> {
        pool.first()
    }
}

/// Complète les créneaux sous le plafond, jour par jour puis créneau par créneau.
/// Renvoie le nombre d'affectations ajoutées.
pub(super) fn backfill(scheduler: &mut Scheduler, selector: &mut dyn CandidateSelector) -> usize {
    let cap = scheduler.options.staffing_cap;
    let mut pool: Vec<EmployeeId> = scheduler
        .schedule
        .iter()
        .map(|(name, _)| name)
        .filter(|name| scheduler.below_weekly_max(name))
        .cloned()
        .collect();
    let mut assigned = 0usize;

    for day in Day::ALL {
        for shift in ShiftKind::ALL {
            while scheduler.counters.has_room(day, shift, cap) {
                let Some(name) = selector.select_candidate(&pool, day, shift).cloned() else {
                    break;
                };
                let Some(pos) = pool.iter().position(|n| n == &name) else {
                    break;
                };

                scheduler.commit(&name, ScheduleEntry::new(day, shift, Origin::Backfill));
                assigned += 1;
                log_debug!(employee = %name, %day, %shift, "backfilled");

                if !scheduler.below_weekly_max(&name) {
                    pool.remove(pos);
                }
            }
        }
    }

    assigned
}
