use super::*;

fn record(date: &str, shift: WorkShift) -> ScheduleRecord {
    ScheduleRecord {
        work_date: date.to_owned(),
        work_shift: shift,
    }
}

// =============================================================
// Loading a record into the form
// =============================================================

#[test]
fn from_record_parses_date_and_slot() {
    let form = ScheduleForm::from_record(&record("2024-03-15", WorkShift::Afternoon));
    assert_eq!(
        form.work_date,
        Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    );
    assert_eq!(form.time_slot, "afternoon");
}

#[test]
fn from_record_with_bad_date_leaves_date_unset() {
    let form = ScheduleForm::from_record(&record("not-a-date", WorkShift::Morning));
    assert!(form.work_date.is_none());
    assert_eq!(form.time_slot, "morning");
}

#[test]
fn default_form_is_blank() {
    let form = ScheduleForm::default();
    assert!(form.work_date.is_none());
    assert!(form.time_slot.is_empty());
    assert_eq!(form.date_value(), "");
}

// =============================================================
// Editing and submission
// =============================================================

#[test]
fn shift_change_flows_into_the_patch() {
    // Record loaded, user flips the shift, date untouched.
    let mut form = ScheduleForm::from_record(&record("2024-03-15", WorkShift::Afternoon));
    form.set_slot("morning");

    let patch = form.to_patch().unwrap();
    assert_eq!(patch.work_date, "2024-03-15");
    assert_eq!(patch.work_shift, WorkShift::Morning);
}

#[test]
fn date_change_round_trips_as_iso() {
    let mut form = ScheduleForm::from_record(&record("2024-03-15", WorkShift::Morning));
    form.set_date("2024-04-02");

    assert_eq!(form.date_value(), "2024-04-02");
    assert_eq!(form.to_patch().unwrap().work_date, "2024-04-02");
}

#[test]
fn cleared_date_blocks_submission() {
    let mut form = ScheduleForm::from_record(&record("2024-03-15", WorkShift::Morning));
    form.set_date("");
    assert!(form.to_patch().is_none());
}

#[test]
fn unset_slot_blocks_submission() {
    let mut form = ScheduleForm::default();
    form.set_date("2024-03-15");
    assert!(form.to_patch().is_none());
}
