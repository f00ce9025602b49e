//! Application layer containing the invoicing service, the
//! instrumentation middleware wrapped around it, and the distance stage
//! that feeds it from raw position fixes.

pub mod distance;
pub mod middleware;
pub mod service;
