use super::*;

// =============================================================
// AdminState defaults
// =============================================================

#[test]
fn admin_state_default_no_token() {
    let state = AdminState::default();
    assert!(state.token.is_none());
}

#[test]
fn admin_state_default_empty_appointments() {
    let state = AdminState::default();
    assert!(state.appointments.is_empty());
}
