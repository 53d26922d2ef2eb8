//! `flock-core` — foundational types for the `rust_flock` coordination
//! controller.
//!
//! This crate is a dependency of every other `flock-*` crate.  It
//! intentionally has no `flock-*` dependencies and minimal external ones
//! (only `glam` and `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                   |
//! |-----------|--------------------------------------------|
//! | [`ids`]   | `AgentId`                                  |
//! | [`pose`]  | `Pose`, `Twist`, planar distance           |
//! | [`rng`]   | `DriftRng` (seedable rendezvous drift RNG) |
//! | [`time`]  | `Tick`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod pose;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::AgentId;
pub use pose::{Pose, Twist, planar_distance};
pub use rng::DriftRng;
pub use time::Tick;
