//! Reusable widgets for the admin pages.

pub mod appointment_row;
pub mod pagination;
pub mod shift_badge;
pub mod status_badge;
