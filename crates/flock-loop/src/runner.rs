//! The fixed-rate control loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::warn;

use flock_control::ControlParameters;
use flock_core::Tick;
use flock_world::{ActuationSink, WorldStateSource};

use crate::{
    ActivationHandle, ControllerContext, LoopObserver, LoopResult, TickPacer, coordination_step,
};

/// Cloneable handle that asks a running loop to stop at the next tick
/// boundary.
///
/// Any in-flight command issuance finishes before the loop returns; nothing
/// is rolled back.
#[derive(Clone, Default)]
pub struct ShutdownHandle(Arc<AtomicBool>);

impl ShutdownHandle {
    /// Request termination.
    pub fn shutdown(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether termination has been requested.
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// The periodic read-compute-command loop.
///
/// `ControlLoop<S, A>` owns the cross-tick [`ControllerContext`] and drives
/// one tick per period: poll a snapshot, gate on the activation flag, run
/// the coordination step, and push each command to the actuation sink.
///
/// Create via [`ControlLoopBuilder`][crate::ControlLoopBuilder].
pub struct ControlLoop<S: WorldStateSource, A: ActuationSink> {
    /// Fixed gains and loop rate.
    pub params: ControlParameters,

    /// Cross-tick mutable state: goal drift and activation flag.
    pub ctx: ControllerContext,

    /// Per-tick snapshot provider.
    pub source: S,

    /// Command sink.
    pub sink: A,

    /// Ticks completed since the loop was built.
    pub tick: Tick,

    pub(crate) shutdown: ShutdownHandle,
    pub(crate) pacer:    TickPacer,
}

impl<S: WorldStateSource, A: ActuationSink> ControlLoop<S, A> {
    /// Endpoint handle for external activation togglers.
    pub fn activation_handle(&self) -> ActivationHandle {
        self.ctx.activation_handle()
    }

    /// Handle for requesting loop termination from another thread.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run paced ticks until shutdown is requested.
    ///
    /// Each iteration waits out the remainder of the tick period and
    /// processes one tick with the measured elapsed time as `dt`.  Returns
    /// when the shutdown handle fires or the snapshot source fails.
    pub fn run<O: LoopObserver>(&mut self, observer: &mut O) -> LoopResult<()> {
        while !self.shutdown.is_requested() {
            let dt = self.pacer.wait();
            self.process_tick(dt, observer)?;
        }
        observer.on_loop_end(self.tick);
        Ok(())
    }

    /// Run exactly `n` unpaced ticks with a fixed `dt`.
    ///
    /// Useful for tests and demos where wall-clock pacing is irrelevant.
    pub fn run_ticks<O: LoopObserver>(
        &mut self,
        n:        u64,
        dt:       f64,
        observer: &mut O,
    ) -> LoopResult<()> {
        for _ in 0..n {
            self.process_tick(dt, observer)?;
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: LoopObserver>(&mut self, dt: f64, observer: &mut O) -> LoopResult<usize> {
        let now = self.tick;
        observer.on_tick_start(now);

        // The snapshot is polled on idle passes too: the loop always blocks
        // on the state feed before consulting the activation flag.
        let world = self.source.poll()?;

        let Some(commands) = coordination_step(&self.params, &mut self.ctx, &world, dt) else {
            observer.on_idle(now);
            self.tick = now + 1;
            return Ok(0);
        };

        // Issue phase: each command stands alone.  A failed or refused
        // command is logged and does not block the rest of the batch.
        let issued = commands.len();
        for command in commands {
            match self.sink.set_state(&command.id, command.pose, command.twist) {
                Ok(ack) if !ack.success => {
                    warn!("actuation rejected for {}: {}", command.id, ack.message);
                    observer.on_actuation_failure(&command.id, &ack.message);
                }
                Ok(_) => {}
                Err(err) => {
                    warn!("actuation failed for {}: {err}", command.id);
                    observer.on_actuation_failure(&command.id, &err.to_string());
                }
            }
        }

        observer.on_commands(now, issued);
        self.tick = now + 1;
        Ok(issued)
    }
}
