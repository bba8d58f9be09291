#![forbid(unsafe_code)]
use shiftplan::model::{Day, EmployeeId, Origin, Schedule, ScheduleEntry, ShiftKind, Slot};
use shiftplan::report::{ReportRenderer, TextReport};
use shiftplan::scheduler::{
    AssignReport, DroppedPreference, Understaffed, Violation, ViolationKind,
};

fn fixture() -> (Schedule, AssignReport) {
    let mut schedule = Schedule::default();
    let alice = EmployeeId::new("alice");
    schedule.push(&alice, ScheduleEntry::new(Day::Monday, ShiftKind::Morning, Origin::Preferred));
    schedule.push(&alice, ScheduleEntry::new(Day::Tuesday, ShiftKind::Evening, Origin::Backfill));
    schedule.register(&EmployeeId::new("bob"));

    let report = AssignReport {
        violations: vec![Violation {
            employee: EmployeeId::new("carol"),
            kind: ViolationKind::SeveralShiftsSameDay { day: Day::Wednesday },
        }],
        dropped: vec![DroppedPreference {
            employee: EmployeeId::new("dave"),
            slot: Slot::new(Day::Saturday, ShiftKind::Morning),
        }],
        understaffed: vec![Understaffed {
            day: Day::Sunday,
            shift: ShiftKind::Evening,
            staffed: 1,
            cap: 2,
        }],
        backfilled: 1,
    };
    (schedule, report)
}

#[test]
fn text_report_lists_schedule_then_warnings() {
    let (schedule, report) = fixture();
    let text = TextReport { with_origin: true }.render(&schedule, &report);
    insta::assert_snapshot!(text, @r###"
    alice: MON morning, TUE evening (backfill)
    bob: -
    warning: employee carol has more than one preference shift on WED
    warning: preference dropped: dave SAT morning
    warning: understaffed: SUN evening (1/2)
    "###);
}

#[test]
fn origin_is_hidden_by_default() {
    let (schedule, report) = fixture();
    let text = TextReport::default().render(&schedule, &report);
    assert!(text.starts_with("alice: MON morning, TUE evening\n"));
    assert!(report.has_warnings());
}
