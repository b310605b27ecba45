use leptos::prelude::*;

use crate::net::types::status_badge;

/// Pill badge for the appointment lifecycle status.
///
/// Unrecognized status values render nothing, on purpose.
#[component]
pub fn StatusBadge(status: String) -> impl IntoView {
    status_badge(&status).map(|badge| view! { <span class=badge.class>{badge.label}</span> })
}
