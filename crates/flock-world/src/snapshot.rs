//! Per-tick snapshot of every body known to the world.

use std::collections::BTreeMap;

use flock_core::{AgentId, Pose, Twist};

/// Pose and twist of one body at snapshot time.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyState {
    pub pose:  Pose,
    pub twist: Twist,
}

impl BodyState {
    /// Body at rest at `pose`.
    #[inline]
    pub fn at(pose: Pose) -> Self {
        Self { pose, twist: Twist::ZERO }
    }
}

/// A consistent snapshot of all bodies, keyed by id.
///
/// Re-fetched once per tick and discarded afterwards.  The `BTreeMap`
/// keying makes every per-tick iteration run in ascending id order, so a
/// tick's command batch is deterministic regardless of how the snapshot was
/// assembled.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    bodies: BTreeMap<AgentId, BodyState>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the state of `id`.
    pub fn insert(&mut self, id: AgentId, state: BodyState) {
        self.bodies.insert(id, state);
    }

    /// Number of bodies known to the world this tick.
    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// State of one body, if known.
    pub fn get(&self, id: &AgentId) -> Option<&BodyState> {
        self.bodies.get(id)
    }

    /// All bodies in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&AgentId, &BodyState)> {
        self.bodies.iter()
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &AgentId> {
        self.bodies.keys()
    }
}
