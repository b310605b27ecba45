use leptos::prelude::*;

use crate::components::shift_badge::ShiftBadge;
use crate::components::status_badge::StatusBadge;
use crate::net::types::Appointment;
use crate::util::format::display_date;

/// One row of the appointment table.
///
/// `ordinal` is the 1-based position within the current page; the data
/// model carries no stable identifier to key on.
#[component]
pub fn AppointmentRow(ordinal: usize, appointment: Appointment) -> impl IntoView {
    let Appointment {
        doctor_info,
        patient_info,
        work_date,
        work_shift,
        status,
    } = appointment;
    let date = display_date(&work_date);

    view! {
        <div class="appointment-row">
            <p class="appointment-row__ordinal">{ordinal}</p>
            <p class="appointment-row__doctor">{doctor_info.name}</p>
            <p class="appointment-row__patient">{patient_info.name}</p>
            <p class="appointment-row__date">{date}</p>
            <div class="appointment-row__shift">
                <ShiftBadge shift=work_shift/>
            </div>
            <div class="appointment-row__status">
                <StatusBadge status=status/>
            </div>
        </div>
    }
}
