//! World-service error type.

use thiserror::Error;

/// Errors surfaced by world-facing services.
#[derive(Debug, Error)]
pub enum WorldError {
    /// The backing service could not be reached at all.  Fatal during
    /// startup validation; during a run the failed call is logged and the
    /// next tick simply tries again.
    #[error("world service unavailable: {0}")]
    Unavailable(String),
}

pub type WorldResult<T> = Result<T, WorldError>;
