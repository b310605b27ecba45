#[cfg(test)]
#[path = "schedule_form_test.rs"]
mod schedule_form_test;

use chrono::NaiveDate;

use crate::net::types::{SchedulePatch, ScheduleRecord, WorkShift};

/// Transient, locally-owned projection of a schedule record under edit.
///
/// Created when the record loads, discarded after submit or navigation.
/// `time_slot` mirrors the `<select>` value directly; the empty string
/// means no shift has been chosen yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleForm {
    pub work_date: Option<NaiveDate>,
    pub time_slot: String,
}

impl ScheduleForm {
    /// Initialize the form from a freshly fetched record. An unparseable
    /// date leaves the date field unset rather than failing the load.
    pub fn from_record(record: &ScheduleRecord) -> Self {
        Self {
            work_date: NaiveDate::parse_from_str(&record.work_date, "%Y-%m-%d").ok(),
            time_slot: record.work_shift.as_slot().to_owned(),
        }
    }

    /// Apply a date-input value (`YYYY-MM-DD`). Anything unparseable,
    /// including the empty string a cleared input emits, unsets the date.
    pub fn set_date(&mut self, value: &str) {
        self.work_date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok();
    }

    /// Apply a shift-select value.
    pub fn set_slot(&mut self, value: &str) {
        self.time_slot = value.to_owned();
    }

    /// The date-input value for the current state, empty when unset.
    pub fn date_value(&self) -> String {
        self.work_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// Serialize the form into an update payload.
    ///
    /// `None` while the date or shift is still unset; submission is a no-op
    /// until both are chosen.
    pub fn to_patch(&self) -> Option<SchedulePatch> {
        Some(SchedulePatch {
            work_date: self.work_date?.format("%Y-%m-%d").to_string(),
            work_shift: WorkShift::from_slot(&self.time_slot)?,
        })
    }
}
