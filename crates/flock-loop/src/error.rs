use flock_core::AgentId;
use flock_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoopError {
    #[error("controller configuration error: {0}")]
    Config(String),

    #[error("agent {0} is configured for coordination but absent from the world registry")]
    AgentMissing(AgentId),

    #[error("world service error: {0}")]
    World(#[from] WorldError),
}

pub type LoopResult<T> = Result<T, LoopError>;
