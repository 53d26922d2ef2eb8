//! `flock-loop` — coordination step and fixed-rate control loop for the
//! `rust_flock` controller.
//!
//! # Tick cycle
//!
//! ```text
//! loop until shutdown:
//!   ① Pace    — sleep out the remainder of the tick period, measure dt.
//!   ② Poll    — pull a fresh WorldState snapshot (idle passes poll too).
//!   ③ Gate    — read the activation flag once; Idle ⇒ nothing below runs.
//!   ④ Drift   — advance the rendezvous random walk by dt.
//!   ⑤ Command — per coordinated body: heading consensus + net planar
//!               force → integrate position → blended orientation →
//!               zero-twist pose (ascending id order; the `parallel`
//!               feature fans this phase out on Rayon).
//!   ⑥ Issue   — push each command to the actuation sink; failures are
//!               logged and skipped, never retried within the tick.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                         |
//! |------------|------------------------------------------------|
//! | `parallel` | Runs the command phase on Rayon's thread pool. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flock_control::ControlParameters;
//! use flock_loop::{ControlLoopBuilder, NoopObserver};
//! use flock_world::InMemoryWorld;
//!
//! let world = InMemoryWorld::new();
//! let mut controller =
//!     ControlLoopBuilder::new(ControlParameters::default(), offsets, world.clone(), world.clone())
//!         .seed(42)
//!         .build(&mut world.clone())?;
//! controller.activation_handle().set_active(true);
//! controller.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod observer;
pub mod pacer;
pub mod runner;
pub mod step;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::ControlLoopBuilder;
pub use context::{ActivationHandle, ControllerContext};
pub use error::{LoopError, LoopResult};
pub use observer::{LoopObserver, NoopObserver};
pub use pacer::TickPacer;
pub use runner::{ControlLoop, ShutdownHandle};
pub use step::{AgentCommand, coordination_step};
