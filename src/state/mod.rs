//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`admin`, `pagination`, `schedule_form`) so the
//! pure models can be unit-tested on the host, away from the reactive layer.

pub mod admin;
pub mod pagination;
pub mod schedule_form;
