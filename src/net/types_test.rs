use super::*;

// =============================================================
// Appointment wire shape
// =============================================================

#[test]
fn appointment_deserializes_from_backend_shape() {
    let json = r#"{
        "doctorInfo": { "name": "BS. Nguyễn Văn A" },
        "patientInfo": { "name": "Trần Thị B" },
        "work_date": "2024-03-15",
        "work_shift": "morning",
        "status": "pending"
    }"#;

    let appointment: Appointment = serde_json::from_str(json).unwrap();
    assert_eq!(appointment.doctor_info.name, "BS. Nguyễn Văn A");
    assert_eq!(appointment.patient_info.name, "Trần Thị B");
    assert_eq!(appointment.work_shift, WorkShift::Morning);
    assert_eq!(appointment.status, "pending");
}

#[test]
fn unknown_status_still_deserializes() {
    let json = r#"{
        "doctorInfo": { "name": "a" },
        "patientInfo": { "name": "b" },
        "work_date": "2024-03-15",
        "work_shift": "afternoon",
        "status": "rescheduled"
    }"#;

    let appointment: Appointment = serde_json::from_str(json).unwrap();
    assert_eq!(appointment.status, "rescheduled");
    assert!(status_badge(&appointment.status).is_none());
}

#[test]
fn schedule_patch_serializes_lowercase_shift() {
    let patch = SchedulePatch {
        work_date: "2024-03-15".to_owned(),
        work_shift: WorkShift::Morning,
    };
    let json = serde_json::to_value(&patch).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "work_date": "2024-03-15", "work_shift": "morning" })
    );
}

// =============================================================
// Shift labels and slots
// =============================================================

#[test]
fn shift_labels() {
    assert_eq!(WorkShift::Morning.label(), "Sáng");
    assert_eq!(WorkShift::Afternoon.label(), "Chiều");
}

#[test]
fn slot_round_trip() {
    for shift in [WorkShift::Morning, WorkShift::Afternoon] {
        assert_eq!(WorkShift::from_slot(shift.as_slot()), Some(shift));
    }
    assert_eq!(WorkShift::from_slot(""), None);
    assert_eq!(WorkShift::from_slot("night"), None);
}

// =============================================================
// Status badge mapping
// =============================================================

#[test]
fn known_statuses_map_to_their_badges() {
    assert_eq!(status_badge("canceled").unwrap().label, "Đã hủy");
    assert_eq!(status_badge("confirmed").unwrap().label, "Đã xác nhận");
    assert_eq!(status_badge("pending").unwrap().label, "Chờ xác nhận");
}

#[test]
fn badge_classes_are_distinct() {
    let classes = ["canceled", "confirmed", "pending"]
        .map(|status| status_badge(status).unwrap().class);
    assert_ne!(classes[0], classes[1]);
    assert_ne!(classes[1], classes[2]);
    assert_ne!(classes[0], classes[2]);
}

#[test]
fn anything_else_has_no_badge() {
    for status in ["", "done", "CANCELED", "Pending", "unknown"] {
        assert!(status_badge(status).is_none(), "status={status:?}");
    }
}
