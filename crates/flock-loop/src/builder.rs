//! Fluent builder for constructing a [`ControlLoop`].

use std::collections::BTreeMap;

use glam::DVec3;

use flock_control::{ControlParameters, GoalTracker, INITIAL_RENDEZVOUS};
use flock_core::{AgentId, DriftRng, Tick};
use flock_world::{ActuationSink, ExistenceCheck, WorldStateSource};

use crate::{
    ControlLoop, ControllerContext, LoopError, LoopResult, ShutdownHandle, TickPacer,
};

/// Fluent builder for [`ControlLoop<S, A>`].
///
/// # Required inputs
///
/// - [`ControlParameters`] — gains, radii, loop rate
/// - offset table — `AgentId → DVec3` relative goal positions
/// - `S: WorldStateSource`, `A: ActuationSink`
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default              |
/// |------------------|----------------------|
/// | `.rendezvous(p)` | `INITIAL_RENDEZVOUS` |
/// | `.seed(s)`       | `0`                  |
///
/// # Example
///
/// ```rust,ignore
/// let mut controller = ControlLoopBuilder::new(params, offsets, source, sink)
///     .seed(42)
///     .build(&mut existence)?;
/// controller.activation_handle().set_active(true);
/// controller.run(&mut NoopObserver)?;
/// ```
pub struct ControlLoopBuilder<S: WorldStateSource, A: ActuationSink> {
    params:     ControlParameters,
    offsets:    BTreeMap<AgentId, DVec3>,
    source:     S,
    sink:       A,
    rendezvous: Option<DVec3>,
    seed:       u64,
}

impl<S: WorldStateSource, A: ActuationSink> ControlLoopBuilder<S, A> {
    /// Create a builder with all required inputs.
    pub fn new(
        params:  ControlParameters,
        offsets: BTreeMap<AgentId, DVec3>,
        source:  S,
        sink:    A,
    ) -> Self {
        Self {
            params,
            offsets,
            source,
            sink,
            rendezvous: None,
            seed:       0,
        }
    }

    /// Override the initial rendezvous point.
    pub fn rendezvous(mut self, point: DVec3) -> Self {
        self.rendezvous = Some(point);
        self
    }

    /// Seed for the rendezvous drift RNG.  The same seed always produces
    /// the identical drift trajectory.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the configuration against the world registry and return a
    /// ready-to-run loop, starting Idle at tick zero.
    ///
    /// Fails fast when the offset table is empty, when the loop rate is not
    /// positive, when the existence service cannot be reached, or when a
    /// configured agent is missing from the registry — the loop must not
    /// start half-configured.
    pub fn build<E: ExistenceCheck>(self, existence: &mut E) -> LoopResult<ControlLoop<S, A>> {
        if self.offsets.is_empty() {
            return Err(LoopError::Config(
                "offset table is empty; nothing to coordinate".into(),
            ));
        }
        if !(self.params.loop_rate_hz > 0.0) {
            return Err(LoopError::Config(format!(
                "loop_rate_hz must be positive, got {}",
                self.params.loop_rate_hz
            )));
        }

        for id in self.offsets.keys() {
            if !existence.exists(id.as_str())? {
                return Err(LoopError::AgentMissing(id.clone()));
            }
        }

        let goals = GoalTracker::new(
            self.rendezvous.unwrap_or(INITIAL_RENDEZVOUS),
            self.offsets,
            DriftRng::new(self.seed),
        );

        Ok(ControlLoop {
            pacer:    TickPacer::new(self.params.loop_rate_hz),
            params:   self.params,
            ctx:      ControllerContext::new(goals),
            source:   self.source,
            sink:     self.sink,
            tick:     Tick::ZERO,
            shutdown: ShutdownHandle::default(),
        })
    }
}
