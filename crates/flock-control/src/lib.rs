//! `flock-control` — the algorithmic core of the `rust_flock` controller.
//!
//! Everything here is deterministic given its inputs: the force model and
//! the heading consensus are pure functions, and the goal tracker's drift
//! runs on an injected seedable RNG.  The control loop in `flock-loop`
//! composes these per tick.
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`field`]     | Pairwise repulsion and goal attraction forces        |
//! | [`consensus`] | Signed quaternion offsets, mean heading, SLERP blend |
//! | [`goal`]      | Drifting rendezvous point + per-agent goal lookup    |
//! | [`params`]    | `ControlParameters` (gains, radii, loop rate)        |

pub mod consensus;
pub mod field;
pub mod goal;
pub mod params;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use consensus::{HeadingConsensus, blend_heading, heading_consensus, signed_angle_between};
pub use field::{Axis, attraction, repulsion};
pub use goal::{GoalTracker, INITIAL_RENDEZVOUS};
pub use params::ControlParameters;
