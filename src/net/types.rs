//! Wire types shared between the REST helpers and the UI.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Minimal reference to a person attached to an appointment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    pub name: String,
}

/// One booked appointment, as returned by the listing endpoint.
///
/// Display-only from this crate's perspective. `status` stays a plain
/// string: values outside the known lifecycle set simply render no badge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "doctorInfo")]
    pub doctor_info: PersonRef,
    #[serde(rename = "patientInfo")]
    pub patient_info: PersonRef,
    /// ISO-8601 date, `YYYY-MM-DD`.
    pub work_date: String,
    pub work_shift: WorkShift,
    pub status: String,
}

/// Half-day work shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkShift {
    Morning,
    Afternoon,
}

impl WorkShift {
    /// Badge label shown in the appointment list.
    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Sáng",
            Self::Afternoon => "Chiều",
        }
    }

    /// Badge style hook for the appointment list.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Morning => "shift-badge shift-badge--morning",
            Self::Afternoon => "shift-badge shift-badge--afternoon",
        }
    }

    /// The form `<select>` value for this shift.
    pub fn as_slot(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
        }
    }

    /// Parse a form `<select>` value. Empty or unknown values mean "unset".
    pub fn from_slot(slot: &str) -> Option<Self> {
        match slot {
            "morning" => Some(Self::Morning),
            "afternoon" => Some(Self::Afternoon),
            _ => None,
        }
    }
}

/// Label and style hook for an appointment status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub class: &'static str,
}

/// Map an appointment status onto its badge, if it has one.
///
/// Exactly one of four outcomes for any input: three known badges, or
/// `None` for anything unrecognized (which renders nothing).
pub fn status_badge(status: &str) -> Option<StatusBadge> {
    match status {
        "canceled" => Some(StatusBadge {
            label: "Đã hủy",
            class: "status-badge status-badge--canceled",
        }),
        "confirmed" => Some(StatusBadge {
            label: "Đã xác nhận",
            class: "status-badge status-badge--confirmed",
        }),
        "pending" => Some(StatusBadge {
            label: "Chờ xác nhận",
            class: "status-badge status-badge--pending",
        }),
        _ => None,
    }
}

/// One work-schedule record, as returned by the single-schedule endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// ISO-8601 date, `YYYY-MM-DD`.
    pub work_date: String,
    pub work_shift: WorkShift,
}

/// Update payload sent back when the edit form is submitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePatch {
    /// ISO-8601 date, `YYYY-MM-DD`.
    pub work_date: String,
    pub work_shift: WorkShift,
}
