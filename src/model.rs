use chrono::Weekday;
#[cfg(feature = "serde")]
use serde::{ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Erreur de lecture d'un libellé de jour ou de créneau.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid day: {0}")]
    UnknownDay(String),
    #[error("invalid shift: {0}")]
    UnknownShift(String),
}

/// Jour de la semaine (lundi → dimanche).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Libellé de sortie : `MON`..`SUN`.
    pub fn short_label(self) -> &'static str {
        match self {
            Day::Monday => "MON",
            Day::Tuesday => "TUE",
            Day::Wednesday => "WED",
            Day::Thursday => "THU",
            Day::Friday => "FRI",
            Day::Saturday => "SAT",
            Day::Sunday => "SUN",
        }
    }

    pub fn weekday(self) -> Weekday {
        match self {
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
            Day::Sunday => Weekday::Sun,
        }
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        Day::ALL[weekday.num_days_from_monday() as usize]
    }

    /// Jour suivant (dimanche → lundi).
    pub fn succ(self) -> Self {
        Day::from_weekday(self.weekday().succ())
    }

    /// Les six autres jours, dans l'ordre de rotation à partir de `self`.
    pub fn following(self) -> impl Iterator<Item = Day> {
        let mut current = self;
        (0..6).map(move |_| {
            current = current.succ();
            current
        })
    }
}

impl FromStr for Day {
    type Err = ParseError;

    /// Accepte l'abréviation (`Mon`) ou le nom complet (`Monday`), sans tenir compte de la casse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let day = match s.trim().to_ascii_lowercase().as_str() {
            "mon" | "monday" => Day::Monday,
            "tue" | "tuesday" => Day::Tuesday,
            "wed" | "wednesday" => Day::Wednesday,
            "thu" | "thursday" => Day::Thursday,
            "fri" | "friday" => Day::Friday,
            "sat" | "saturday" => Day::Saturday,
            "sun" | "sunday" => Day::Sunday,
            _ => return Err(ParseError::UnknownDay(s.to_string())),
        };
        Ok(day)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_label())
    }
}

/// Créneau de la journée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShiftKind {
    Morning,
    Afternoon,
    Evening,
}

impl ShiftKind {
    /// Ordre fixe utilisé pour chercher un créneau libre.
    pub const ALL: [ShiftKind; 3] = [ShiftKind::Morning, ShiftKind::Afternoon, ShiftKind::Evening];

    pub fn label(self) -> &'static str {
        match self {
            ShiftKind::Morning => "morning",
            ShiftKind::Afternoon => "afternoon",
            ShiftKind::Evening => "evening",
        }
    }
}

impl FromStr for ShiftKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(ShiftKind::Morning),
            "afternoon" => Ok(ShiftKind::Afternoon),
            "evening" => Ok(ShiftKind::Evening),
            _ => Err(ParseError::UnknownShift(s.to_string())),
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(feature = "serde")]
macro_rules! label_serde {
    ($ty:ty, $label:ident) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.$label())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

#[cfg(feature = "serde")]
label_serde!(Day, short_label);
#[cfg(feature = "serde")]
label_serde!(ShiftKind, label);

/// Identifiant fort pour un employé (son nom, unique).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Couple (jour, créneau) : une préférence exprimée par un employé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot {
    pub day: Day,
    #[cfg_attr(feature = "serde", serde(rename = "time", alias = "shift"))]
    pub shift: ShiftKind,
}

impl Slot {
    pub fn new(day: Day, shift: ShiftKind) -> Self {
        Self { day, shift }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.shift)
    }
}

/// Employé et ses préférences, dans l'ordre où il les a listées.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Employee {
    pub name: EmployeeId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferences: Vec<Slot>,
}

impl Employee {
    pub fn new<N: AsRef<str>>(name: N, preferences: Vec<Slot>) -> Self {
        Self {
            name: EmployeeId::new(name),
            preferences,
        }
    }

    /// Premier jour demandé deux fois, s'il y en a un.
    pub fn repeated_day(&self) -> Option<Day> {
        self.preferences
            .iter()
            .enumerate()
            .find(|(idx, slot)| {
                self.preferences
                    .iter()
                    .skip(idx + 1)
                    .any(|other| other.day == slot.day)
            })
            .map(|(_, slot)| slot.day)
    }
}

/// Préférences de tous les employés, dans l'ordre de traitement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceStore {
    employees: Vec<Employee>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute un employé ; un nom déjà présent est refusé.
    pub fn insert(&mut self, employee: Employee) -> Result<(), String> {
        if self.get(&employee.name).is_some() {
            return Err(format!("duplicate employee: {}", employee.name));
        }
        self.employees.push(employee);
        Ok(())
    }

    pub fn get(&self, name: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| &e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl TryFrom<Vec<Employee>> for PreferenceStore {
    type Error = String;

    fn try_from(employees: Vec<Employee>) -> Result<Self, Self::Error> {
        let mut store = PreferenceStore::new();
        for employee in employees {
            store.insert(employee)?;
        }
        Ok(store)
    }
}

/// Provenance d'une affectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Preferred,
    SameDayFallback,
    NextDayFallback,
    Backfill,
}

impl Origin {
    pub fn label(self) -> &'static str {
        match self {
            Origin::Preferred => "preferred",
            Origin::SameDayFallback => "same-day fallback",
            Origin::NextDayFallback => "next-day fallback",
            Origin::Backfill => "backfill",
        }
    }
}

/// Affectation confirmée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScheduleEntry {
    pub day: Day,
    pub shift: ShiftKind,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub origin: Origin,
}

impl ScheduleEntry {
    pub fn new(day: Day, shift: ShiftKind, origin: Origin) -> Self {
        Self { day, shift, origin }
    }

    pub fn slot(&self) -> Slot {
        Slot::new(self.day, self.shift)
    }
}

/// Planning de la semaine : affectations par employé, dans l'ordre d'insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<(EmployeeId, Vec<ScheduleEntry>)>,
}

impl Schedule {
    /// Inscrit un employé (planning vide) s'il ne l'est pas déjà.
    pub fn register(&mut self, name: &EmployeeId) {
        if !self.contains(name) {
            self.entries.push((name.clone(), Vec::new()));
        }
    }

    pub fn contains(&self, name: &EmployeeId) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn push(&mut self, name: &EmployeeId, entry: ScheduleEntry) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, list)) => list.push(entry),
            None => self.entries.push((name.clone(), vec![entry])),
        }
    }

    pub fn entries_for(&self, name: &EmployeeId) -> &[ScheduleEntry] {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, list)| list.as_slice())
            .unwrap_or(&[])
    }

    /// Nombre d'affectations (jours travaillés) d'un employé.
    pub fn assigned_count(&self, name: &EmployeeId) -> usize {
        self.entries_for(name).len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EmployeeId, &[ScheduleEntry])> {
        self.entries.iter().map(|(n, list)| (n, list.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(feature = "serde")]
impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, list) in &self.entries {
            map.serialize_entry(name, list)?;
        }
        map.end()
    }
}
