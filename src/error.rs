use crate::domain::types::ObuId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregatorError {
    /// No aggregate exists for the requested vehicle. Surfaced to callers
    /// unchanged so they can tell "unknown vehicle" apart from other
    /// failures; never retried inside the core.
    #[error("no distance aggregate for OBU {0}")]
    NotFound(ObuId),
    /// Bad identifier or undecodable event. Rejected at the boundary,
    /// never reaches the store.
    #[error("malformed request: {0}")]
    Malformed(String),
    /// Unexpected failure in the store or a transport collaborator.
    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AggregatorError>;
