//! Small browser/formatting helpers shared across pages.

pub mod format;
pub mod token;
