//! Trait seams to the live world, plus the request/response wire shapes.
//!
//! The traits are deliberately small: one method each, synchronous, and
//! free of controller types beyond ids and poses, so a simulator binding or
//! a test mock can implement them in a few lines.

use flock_core::{AgentId, Pose, Twist};

use crate::{WorldResult, WorldState};

/// Pull-based provider of per-tick world snapshots.
///
/// Polled exactly once per tick — idle passes included.  Implementations
/// decide their own blocking and timeout policy; a slow poll makes the tick
/// run long rather than being dropped.
pub trait WorldStateSource {
    fn poll(&mut self) -> WorldResult<WorldState>;
}

/// Applies one commanded pose to one body.
pub trait ActuationSink {
    /// Issue a command.  `Err` means the service itself failed; an `Ok` ack
    /// with `success == false` means the service rejected this particular
    /// command.  Either way the caller logs the outcome and moves on to the
    /// next body — commands are never retried within a tick.
    fn set_state(&mut self, id: &AgentId, pose: Pose, twist: Twist) -> WorldResult<ActuationAck>;
}

/// World-registry name lookup, used only for startup validation.
pub trait ExistenceCheck {
    fn exists(&mut self, name: &str) -> WorldResult<bool>;
}

/// Outcome of one actuation command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActuationAck {
    pub success: bool,
    pub message: String,
}

impl ActuationAck {
    /// Successful ack with an empty message.
    pub fn ok() -> Self {
        Self { success: true, message: String::new() }
    }

    /// Failed ack carrying the sink's reason.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

/// Request accepted by the activation endpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivationRequest {
    pub active: bool,
}

/// Response returned by the activation endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivationResponse {
    pub success: bool,
    pub message: String,
}
