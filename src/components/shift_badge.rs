use leptos::prelude::*;

use crate::net::types::WorkShift;

/// Pill badge for the half-day shift of an appointment.
#[component]
pub fn ShiftBadge(shift: WorkShift) -> impl IntoView {
    view! {
        <span class=shift.badge_class()>{shift.label()}</span>
    }
}
