//! Rendezvous-point drift and per-agent goal lookup.

use std::collections::BTreeMap;

use glam::DVec3;

use flock_core::{AgentId, DriftRng};

/// Uniform half-range of the rendezvous drift, metres per second.
const DRIFT_SPAN: f64 = 8.0;

/// Rendezvous point the group is anchored to at startup.
pub const INITIAL_RENDEZVOUS: DVec3 = DVec3::new(0.0, 0.0, 0.25);

/// Tracks the drifting rendezvous point and each agent's fixed offset from
/// it.
///
/// The rendezvous point performs an unbounded planar random walk: every
/// active tick moves x and y by `uniform(−8, 8) · dt` while z stays fixed.
/// The walk's RNG is injected, so a cloned tracker replays the identical
/// trajectory — the scenario tests depend on that.
#[derive(Clone)]
pub struct GoalTracker {
    rendezvous: DVec3,
    offsets:    BTreeMap<AgentId, DVec3>,
    rng:        DriftRng,
}

impl GoalTracker {
    /// Tracker anchored at `rendezvous` with the given immutable offset
    /// table.
    pub fn new(rendezvous: DVec3, offsets: BTreeMap<AgentId, DVec3>, rng: DriftRng) -> Self {
        Self { rendezvous, offsets, rng }
    }

    /// Current rendezvous point.
    #[inline]
    pub fn rendezvous(&self) -> DVec3 {
        self.rendezvous
    }

    /// IDs eligible for coordination, in ascending order.
    pub fn coordinated_ids(&self) -> impl Iterator<Item = &AgentId> {
        self.offsets.keys()
    }

    /// Whether `id` has a configured offset.
    #[inline]
    pub fn is_coordinated(&self, id: &AgentId) -> bool {
        self.offsets.contains_key(id)
    }

    /// Advance the rendezvous drift by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.rendezvous.x += self.rng.jitter(DRIFT_SPAN) * dt;
        self.rendezvous.y += self.rng.jitter(DRIFT_SPAN) * dt;
    }

    /// Absolute goal for `id`: rendezvous + configured offset,
    /// component-wise.
    ///
    /// Returns `None` for ids without an offset — such bodies are skipped
    /// by the coordination step, never commanded.
    pub fn goal_for(&self, id: &AgentId) -> Option<DVec3> {
        self.offsets.get(id).map(|offset| self.rendezvous + *offset)
    }
}
