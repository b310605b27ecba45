#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::Appointment;

/// Shared admin state: credential token and the appointment collection.
///
/// Provided as an `RwSignal` via context. The token is presence-checked
/// only; no fetch is attempted while it is absent. The appointment
/// collection is the system of record for the listing page and is replaced
/// wholesale on each refresh.
#[derive(Clone, Debug, Default)]
pub struct AdminState {
    pub token: Option<String>,
    pub appointments: Vec<Appointment>,
}
