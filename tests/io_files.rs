#![forbid(unsafe_code)]
use shiftplan::io;
use shiftplan::model::{Day, EmployeeId, Origin, Schedule, ScheduleEntry, ShiftKind, Slot};
use shiftplan::storage::{FileFormat, PreferenceFile, PreferenceSource, ScheduleFile, ScheduleSink};
use std::fs;
use tempfile::tempdir;

const PREFS_JSON: &str = r#"{
  "employees": [
    {"name": "alice", "preferences": [{"day": "Mon", "time": "morning"}, {"day": "Tuesday", "time": "evening"}]},
    {"name": "bob", "preferences": [{"day": "sat", "shift": "Afternoon"}]},
    {"name": "carol"}
  ]
}"#;

#[test]
fn json_preferences_keep_order_and_accept_both_labels() {
    let store = io::parse_preferences_json(PREFS_JSON.as_bytes()).unwrap();
    let names: Vec<&str> = store.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["alice", "bob", "carol"]);

    let alice = store.get(&EmployeeId::new("alice")).unwrap();
    assert_eq!(
        alice.preferences,
        vec![
            Slot::new(Day::Monday, ShiftKind::Morning),
            Slot::new(Day::Tuesday, ShiftKind::Evening),
        ]
    );
    let bob = store.get(&EmployeeId::new("bob")).unwrap();
    assert_eq!(bob.preferences, vec![Slot::new(Day::Saturday, ShiftKind::Afternoon)]);
    assert!(store.get(&EmployeeId::new("carol")).unwrap().preferences.is_empty());
}

#[test]
fn unknown_labels_and_duplicate_names_are_fatal() {
    let bad_day = r#"{"employees":[{"name":"a","preferences":[{"day":"Funday","time":"morning"}]}]}"#;
    let err = io::parse_preferences_json(bad_day.as_bytes()).unwrap_err();
    assert!(format!("{err:#}").contains("invalid day"));

    let bad_shift = r#"{"employees":[{"name":"a","preferences":[{"day":"Mon","time":"night"}]}]}"#;
    let err = io::parse_preferences_json(bad_shift.as_bytes()).unwrap_err();
    assert!(format!("{err:#}").contains("invalid shift"));

    let dup = r#"{"employees":[{"name":"a"},{"name":"a"}]}"#;
    let err = io::parse_preferences_json(dup.as_bytes()).unwrap_err();
    assert!(format!("{err:#}").contains("duplicate employee"));
}

#[test]
fn csv_rows_are_grouped_per_employee() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prefs.csv");
    fs::write(
        &path,
        "name,day,shift\nalice,Mon,morning\nbob,Wed,evening\nalice,Fri,afternoon\ncarol,,\n",
    )
    .unwrap();

    let store = PreferenceFile::open(&path).unwrap().load().unwrap();
    assert_eq!(store.len(), 3);
    let alice = store.get(&EmployeeId::new("alice")).unwrap();
    assert_eq!(
        alice.preferences,
        vec![
            Slot::new(Day::Monday, ShiftKind::Morning),
            Slot::new(Day::Friday, ShiftKind::Afternoon),
        ]
    );
    assert!(store.get(&EmployeeId::new("carol")).unwrap().preferences.is_empty());

    fs::write(&path, "name,day,shift\nalice,Someday,morning\n").unwrap();
    let err = PreferenceFile::open(&path).unwrap().load().unwrap_err();
    assert!(format!("{err:#}").contains("invalid day"));
}

fn sample_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    let alice = EmployeeId::new("alice");
    let bob = EmployeeId::new("bob");
    schedule.push(&alice, ScheduleEntry::new(Day::Monday, ShiftKind::Morning, Origin::Preferred));
    schedule.push(&alice, ScheduleEntry::new(Day::Sunday, ShiftKind::Evening, Origin::Backfill));
    schedule.register(&bob);
    schedule
}

#[test]
fn schedule_json_uses_upper_case_days() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    ScheduleFile::create(&path)
        .unwrap()
        .save(&sample_schedule())
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(value["alice"][0]["day"], "MON");
    assert_eq!(value["alice"][0]["shift"], "morning");
    assert_eq!(value["alice"][1]["day"], "SUN");
    assert!(value["alice"][1].get("origin").is_none());
    assert_eq!(value["bob"].as_array().unwrap().len(), 0);

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, io::render_schedule_json(&sample_schedule()).unwrap());
}

#[test]
fn schedule_csv_has_one_row_per_shift() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.csv");
    ScheduleFile::create(&path)
        .unwrap()
        .save(&sample_schedule())
        .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "name,day,shift\nalice,MON,morning\nalice,SUN,evening\n"
    );
}

#[test]
fn file_format_comes_from_extension() {
    assert_eq!(FileFormat::from_path("a/b.JSON").unwrap(), FileFormat::Json);
    assert_eq!(FileFormat::from_path("prefs.csv").unwrap(), FileFormat::Csv);
    assert_eq!(FileFormat::from_path("prefs.yaml").unwrap(), FileFormat::Yaml);
    assert_eq!(FileFormat::from_path("prefs.YML").unwrap(), FileFormat::Yaml);
    assert!(FileFormat::from_path("prefs.toml").is_err());
    assert!(ScheduleFile::create("out.txt").is_err());
    assert_eq!(
        ScheduleFile::with_format("out.txt", FileFormat::Csv).format(),
        FileFormat::Csv
    );
}

const PREFS_YAML: &str = "\
employees:
  - name: alice
    preferences:
      - day: Mon
        time: morning
      - day: Sunday
        time: evening
  - name: bob
    preferences:
      - day: wed
        time: Afternoon
  - name: carol
";

#[test]
fn yaml_preferences_load_and_schedule_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prefs.yml");
    fs::write(&path, PREFS_YAML).unwrap();

    let store = PreferenceFile::open(&path).unwrap().load().unwrap();
    let names: Vec<&str> = store.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["alice", "bob", "carol"]);
    assert_eq!(
        store.get(&EmployeeId::new("alice")).unwrap().preferences,
        vec![
            Slot::new(Day::Monday, ShiftKind::Morning),
            Slot::new(Day::Sunday, ShiftKind::Evening),
        ]
    );
    assert_eq!(
        store.get(&EmployeeId::new("bob")).unwrap().preferences,
        vec![Slot::new(Day::Wednesday, ShiftKind::Afternoon)]
    );
    assert!(store.get(&EmployeeId::new("carol")).unwrap().preferences.is_empty());

    let out = dir.path().join("schedule.yaml");
    ScheduleFile::create(&out)
        .unwrap()
        .save(&sample_schedule())
        .unwrap();
    let back: serde_yaml::Value = serde_yaml::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(back["alice"][0]["day"], "MON");
    assert_eq!(back["alice"][1]["shift"], "evening");
    assert!(back["alice"][1].get("origin").is_none());
    assert_eq!(back["bob"].as_sequence().unwrap().len(), 0);

    let err = io::parse_preferences_yaml(b"employees:\n  - name: a\n    preferences:\n      - day: Funday\n        time: morning\n")
        .unwrap_err();
    assert!(format!("{err:#}").contains("invalid day"));
}
