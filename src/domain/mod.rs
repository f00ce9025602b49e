//! Domain layer: the toll data model and the ports every adapter
//! implements or consumes.

pub mod ports;
pub mod types;
