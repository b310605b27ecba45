//! Network layer: REST helpers and the wire types they carry.

pub mod api;
pub mod types;
