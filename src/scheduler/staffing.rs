use super::Understaffed;
use crate::model::{Day, ShiftKind};

/// Effectifs d'une journée, un compteur par créneau.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftCounts {
    pub morning: u8,
    pub afternoon: u8,
    pub evening: u8,
}

impl ShiftCounts {
    pub fn get(&self, shift: ShiftKind) -> u8 {
        match shift {
            ShiftKind::Morning => self.morning,
            ShiftKind::Afternoon => self.afternoon,
            ShiftKind::Evening => self.evening,
        }
    }

    fn slot_mut(&mut self, shift: ShiftKind) -> &mut u8 {
        match shift {
            ShiftKind::Morning => &mut self.morning,
            ShiftKind::Afternoon => &mut self.afternoon,
            ShiftKind::Evening => &mut self.evening,
        }
    }

    pub fn total(&self) -> u32 {
        u32::from(self.morning) + u32::from(self.afternoon) + u32::from(self.evening)
    }
}

/// Compteurs d'effectif pour les sept jours, tous à zéro au départ.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffingCounters {
    days: [ShiftCounts; 7],
}

impl StaffingCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self, day: Day) -> ShiftCounts {
        self.days[day.index()]
    }

    pub fn get(&self, day: Day, shift: ShiftKind) -> u8 {
        self.days[day.index()].get(shift)
    }

    /// Incrémente le compteur de (jour, créneau) et renvoie la nouvelle valeur.
    pub fn record_assignment(&mut self, day: Day, shift: ShiftKind) -> u8 {
        let slot = self.days[day.index()].slot_mut(shift);
        *slot = slot.saturating_add(1);
        *slot
    }

    pub fn has_room(&self, day: Day, shift: ShiftKind, cap: u8) -> bool {
        self.get(day, shift) < cap
    }

    /// Premier créneau du jour encore sous le plafond (matin, après-midi, soir).
    pub fn first_open_shift(&self, day: Day, cap: u8) -> Option<ShiftKind> {
        ShiftKind::ALL
            .into_iter()
            .find(|shift| self.has_room(day, *shift, cap))
    }

    pub fn below_cap(&self, cap: u8) -> Vec<Understaffed> {
        Day::ALL
            .into_iter()
            .flat_map(|day| ShiftKind::ALL.into_iter().map(move |shift| (day, shift)))
            .filter(|(day, shift)| self.has_room(*day, *shift, cap))
            .map(|(day, shift)| Understaffed {
                day,
                shift,
                staffed: self.get(day, shift),
                cap,
            })
            .collect()
    }
}
