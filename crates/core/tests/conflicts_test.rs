mod common;

use advisor_core::errors::{AdvisorError, Rejection};
use advisor_core::models::{Approval, Decision, EnrollmentStatus, Meeting, Schedule, SectionKey};
use common::{FALL, SPRING, SectionBuilder, dance_1400, schedule_with};
use pretty_assertions::assert_eq;
use rstest::rstest;
use uuid::Uuid;

#[rstest]
#[case(EnrollmentStatus::Open, None)]
#[case(EnrollmentStatus::Waitlisted, None)]
#[case(EnrollmentStatus::Closed, Some(Rejection::Closed))]
fn test_empty_schedule_gates_on_enrollment_status(
    #[case] status: EnrollmentStatus,
    #[case] expected: Option<Rejection>,
) {
    let schedule = Schedule::new(Uuid::new_v4());
    let candidate = SectionBuilder::new(20001, "CS", "2100")
        .status(status)
        .meets("TuTh", (9, 30), (10, 45))
        .build();

    assert_eq!(schedule.check_addition(&candidate).unwrap(), expected);
    assert_eq!(schedule.can_add(&candidate).unwrap(), expected.is_none());
}

#[test]
fn test_section_already_present_is_rejected() {
    let schedule = schedule_with(vec![dance_1400()]);

    assert_eq!(
        schedule.check_addition(&dance_1400()).unwrap(),
        Some(Rejection::AlreadyPresent)
    );
}

#[test]
fn test_closed_section_rejected_regardless_of_fit() {
    let schedule = schedule_with(vec![dance_1400()]);
    let candidate = SectionBuilder::new(20002, "MATH", "3350")
        .status(EnrollmentStatus::Closed)
        .meets("TuTh", (14, 0), (15, 15))
        .build();

    assert_eq!(
        schedule.check_addition(&candidate).unwrap(),
        Some(Rejection::Closed)
    );
}

#[test]
fn test_other_semester_rejected_even_without_overlap() {
    let schedule = schedule_with(vec![dance_1400()]);
    let candidate = SectionBuilder::new(30001, "ASTR", "1210")
        .semester(SPRING)
        .meets("TuTh", (14, 0), (15, 15))
        .build();

    assert_eq!(
        schedule.check_addition(&candidate).unwrap(),
        Some(Rejection::SemesterMismatch)
    );
}

#[test]
fn test_semester_mismatch_reported_before_time_conflict() {
    let schedule = schedule_with(vec![dance_1400()]);
    let candidate = SectionBuilder::new(30002, "ASTR", "1210")
        .semester(SPRING)
        .meets("Mo", (10, 30), (11, 0))
        .build();

    assert_eq!(
        schedule.check_addition(&candidate).unwrap(),
        Some(Rejection::SemesterMismatch)
    );
}

#[test]
fn test_touching_sections_do_not_conflict() {
    let schedule = schedule_with(vec![dance_1400()]);
    let candidate = SectionBuilder::new(10002, "DANC", "2220")
        .meets("MoWeFr", (10, 50), (11, 40))
        .build();

    assert_eq!(schedule.check_addition(&candidate).unwrap(), None);
}

#[test]
fn test_overlapping_monday_section_conflicts() {
    let schedule = schedule_with(vec![dance_1400()]);
    let candidate = SectionBuilder::new(10003, "DANC", "3640")
        .meets("Mo", (10, 30), (11, 0))
        .build();

    assert_eq!(
        schedule.check_addition(&candidate).unwrap(),
        Some(Rejection::TimeConflict)
    );
}

#[test]
fn test_second_lecture_of_same_course_rejected() {
    let schedule = schedule_with(vec![dance_1400()]);
    let candidate = SectionBuilder::new(10004, "DANC", "1400")
        .class_section("002")
        .meets("TuTh", (13, 0), (14, 0))
        .build();

    assert_eq!(
        schedule.check_addition(&candidate).unwrap(),
        Some(Rejection::DuplicateComponent)
    );
}

#[test]
fn test_lab_of_scheduled_course_is_allowed() {
    let schedule = schedule_with(vec![dance_1400()]);
    let candidate = SectionBuilder::new(10005, "DANC", "1400")
        .class_section("101")
        .component("LAB")
        .meets("Tu", (15, 0), (16, 50))
        .build();

    assert!(schedule.can_add(&candidate).unwrap());
}

#[test]
fn test_time_conflict_reported_before_duplicate_component() {
    let schedule = schedule_with(vec![dance_1400()]);
    let candidate = SectionBuilder::new(10006, "DANC", "1400")
        .class_section("003")
        .meets("We", (10, 0), (10, 50))
        .build();

    assert_eq!(
        schedule.check_addition(&candidate).unwrap(),
        Some(Rejection::TimeConflict)
    );
}

#[test]
fn test_sections_without_meetings_never_conflict_on_time() {
    let schedule = schedule_with(vec![dance_1400()]);
    let independent_study = SectionBuilder::new(10007, "DANC", "4993")
        .component("IND")
        .build();

    assert!(schedule.can_add(&independent_study).unwrap());
}

#[test]
fn test_add_resets_approval() {
    let mut schedule = schedule_with(vec![dance_1400()]);
    schedule.decide(Decision::Approve);
    assert_eq!(schedule.approval, Approval::Approved);

    let candidate = SectionBuilder::new(10002, "DANC", "2220")
        .meets("MoWeFr", (10, 50), (11, 40))
        .build();
    schedule.add_section(candidate).unwrap();

    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule.approval, Approval::Undecided);
}

#[test]
fn test_rejected_add_leaves_schedule_untouched() {
    let mut schedule = schedule_with(vec![dance_1400()]);
    schedule.decide(Decision::Reject);
    let before = schedule.clone();

    let candidate = SectionBuilder::new(10003, "DANC", "3640")
        .meets("Mo", (10, 30), (11, 0))
        .build();
    let err = schedule.add_section(candidate).unwrap_err();

    assert!(matches!(err, AdvisorError::AddRejected(Rejection::TimeConflict)));
    assert_eq!(err.rejection(), Some(Rejection::TimeConflict));
    assert_eq!(schedule, before);
}

#[test]
fn test_add_then_remove_round_trip() {
    let mut schedule = schedule_with(vec![dance_1400()]);
    let original_keys = schedule.section_keys();

    let candidate = SectionBuilder::new(10002, "DANC", "2220")
        .meets("MoWeFr", (10, 50), (11, 40))
        .build();
    let key = candidate.key();

    schedule.decide(Decision::Approve);
    schedule.add_section(candidate.clone()).unwrap();
    assert_eq!(schedule.approval, Approval::Undecided);

    schedule.decide(Decision::Approve);
    let removed = schedule.remove_section(&key).unwrap();
    assert_eq!(removed, candidate);
    assert_eq!(schedule.approval, Approval::Undecided);
    assert_eq!(schedule.section_keys(), original_keys);
}

#[test]
fn test_remove_missing_section_fails_without_change() {
    let mut schedule = schedule_with(vec![dance_1400()]);
    schedule.decide(Decision::Approve);
    let before = schedule.clone();

    let err = schedule
        .remove_section(&SectionKey::new(FALL, 99999))
        .unwrap_err();

    match err {
        AdvisorError::RemoveRejected {
            semester,
            class_number,
        } => {
            assert_eq!(semester, FALL);
            assert_eq!(class_number, 99999);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(schedule, before);
}

#[test]
fn test_malformed_time_on_shared_day_is_an_error() {
    let tba = SectionBuilder::new(10008, "DANC", "2500")
        .meeting(Meeting {
            days: "Mo".to_string(),
            start_time: String::new(),
            end_time: String::new(),
            ..Meeting::default()
        })
        .build();
    let mut schedule = schedule_with(vec![tba]);
    let before = schedule.clone();

    let err = schedule.add_section(dance_1400()).unwrap_err();

    assert!(matches!(err, AdvisorError::MalformedTimeFormat(_)));
    assert_eq!(schedule, before);
}

#[rstest]
#[case(false)]
#[case(true)]
fn test_malformed_time_reported_before_duplicate_component(#[case] duplicate_first: bool) {
    let tba = SectionBuilder::new(10008, "DANC", "2500")
        .meeting(Meeting {
            days: "Mo".to_string(),
            start_time: "TBA".to_string(),
            end_time: "TBA".to_string(),
            ..Meeting::default()
        })
        .build();
    let lecture = SectionBuilder::new(10009, "CS", "2150")
        .meets("TuTh", (9, 30), (10, 45))
        .build();
    let stored = if duplicate_first {
        vec![lecture, tba]
    } else {
        vec![tba, lecture]
    };
    let schedule = Schedule::from_parts(
        Uuid::new_v4(),
        Uuid::new_v4(),
        stored,
        false,
        Approval::Undecided,
    );
    let second_lecture = SectionBuilder::new(10010, "CS", "2150")
        .class_section("002")
        .meets("Mo", (13, 0), (13, 50))
        .build();

    let err = schedule.check_addition(&second_lecture).unwrap_err();

    assert!(matches!(err, AdvisorError::MalformedTimeFormat(raw) if raw == "TBA"));
}

#[test]
fn test_malformed_time_on_other_days_is_ignored() {
    let tba = SectionBuilder::new(10008, "DANC", "2500")
        .meeting(Meeting {
            days: "Sa".to_string(),
            start_time: "TBA".to_string(),
            end_time: "TBA".to_string(),
            ..Meeting::default()
        })
        .build();
    let schedule = schedule_with(vec![tba]);

    assert!(schedule.can_add(&dance_1400()).unwrap());
}

#[test]
fn test_visibility_change_resets_approval() {
    let mut schedule = schedule_with(vec![dance_1400()]);
    schedule.decide(Decision::Approve);

    schedule.set_visibility(true);

    assert!(schedule.visible);
    assert_eq!(schedule.approval, Approval::Undecided);
}

#[rstest]
#[case(Decision::Approve, Approval::Approved)]
#[case(Decision::Reject, Approval::Rejected)]
#[case(Decision::Clear, Approval::Undecided)]
fn test_advisor_decision_overwrites(#[case] decision: Decision, #[case] expected: Approval) {
    let mut schedule = schedule_with(vec![dance_1400()]);
    schedule.decide(Decision::Reject);
    schedule.decide(Decision::Approve);

    schedule.decide(decision);

    assert_eq!(schedule.approval, expected);
}

#[test]
fn test_from_parts_keeps_set_semantics() {
    let schedule = Schedule::from_parts(
        Uuid::new_v4(),
        Uuid::new_v4(),
        vec![dance_1400(), dance_1400()],
        true,
        Approval::from_flag(Some(false)),
    );

    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule.approval, Approval::Rejected);
    assert_eq!(schedule.approval.as_flag(), Some(false));
}
