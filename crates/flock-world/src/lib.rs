//! `flock-world` — the controller's seams to the outside world.
//!
//! The control loop never talks to a simulator directly.  It pulls
//! [`WorldState`] snapshots through [`WorldStateSource`], pushes commands
//! through [`ActuationSink`], and validates its configuration through
//! [`ExistenceCheck`].  Anything that implements the three traits can stand
//! in for the live world — including [`InMemoryWorld`], which this crate
//! ships for tests and demos.
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`snapshot`] | `WorldState`, `BodyState`                            |
//! | [`service`]  | Source/sink/existence traits, acks, activation wire  |
//! | [`memory`]   | `InMemoryWorld` reference implementation             |
//! | [`error`]    | `WorldError`, `WorldResult`                          |

pub mod error;
pub mod memory;
pub mod service;
pub mod snapshot;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{WorldError, WorldResult};
pub use memory::InMemoryWorld;
pub use service::{
    ActivationRequest, ActivationResponse, ActuationAck, ActuationSink, ExistenceCheck,
    WorldStateSource,
};
pub use snapshot::{BodyState, WorldState};
