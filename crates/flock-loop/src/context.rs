//! Cross-tick controller state and the activation endpoint.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use flock_control::GoalTracker;
use flock_world::{ActivationRequest, ActivationResponse};

/// State that survives across ticks: the drifting goal tracker and the
/// activation flag.
///
/// Owned by the [`ControlLoop`][crate::ControlLoop] and passed into each
/// coordination step — nothing here is process-global.
pub struct ControllerContext {
    /// Rendezvous drift state and the per-agent offset table.
    pub goals: GoalTracker,

    /// Shared activation flag.  Read exactly once per tick, so a mid-tick
    /// toggle only takes effect at the next tick boundary.
    activation: Arc<AtomicBool>,
}

impl ControllerContext {
    /// New context starting in the Idle state.
    pub fn new(goals: GoalTracker) -> Self {
        Self { goals, activation: Arc::new(AtomicBool::new(false)) }
    }

    /// The per-tick activation read.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.activation.load(Ordering::SeqCst)
    }

    /// Hand out a cloneable endpoint handle for external togglers.
    pub fn activation_handle(&self) -> ActivationHandle {
        ActivationHandle(Arc::clone(&self.activation))
    }
}

/// Cloneable handle backing the activation control endpoint.
///
/// The only way to flip the controller between Idle and Active.  Requests
/// always succeed; the new mode takes effect at the next tick boundary.
#[derive(Clone)]
pub struct ActivationHandle(Arc<AtomicBool>);

impl ActivationHandle {
    /// Apply an activation request and report the outcome.
    pub fn apply(&self, request: ActivationRequest) -> ActivationResponse {
        self.0.store(request.active, Ordering::SeqCst);
        ActivationResponse {
            success: true,
            message: "controller state set successfully".to_owned(),
        }
    }

    /// Convenience setter for in-process callers.
    pub fn set_active(&self, active: bool) {
        self.0.store(active, Ordering::SeqCst);
    }

    /// Current flag value.  The loop itself reads through its context; this
    /// accessor exists for external togglers that want to confirm state.
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
