//! Routed pages. Each page is a terminal, independent screen.

pub mod appointments;
pub mod edit_schedule;
