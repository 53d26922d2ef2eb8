//! In-memory reference world for tests and demos.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use flock_core::{AgentId, Pose, Twist};

use crate::{
    ActuationAck, ActuationSink, BodyState, ExistenceCheck, WorldResult, WorldState,
    WorldStateSource,
};

/// A self-contained world backing all three service traits.
///
/// Bodies live in a shared table behind a mutex; cloning the world clones
/// the handle, so one instance can serve as the state source, the actuation
/// sink, and the existence check of a single controller at once.  Applying
/// a command overwrites the stored pose, which closes the loop: the next
/// poll observes what the previous tick commanded.
#[derive(Clone, Default)]
pub struct InMemoryWorld {
    bodies: Arc<Mutex<BTreeMap<AgentId, BodyState>>>,
}

impl InMemoryWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a body, at rest at `pose`.
    pub fn insert_body(&self, id: AgentId, pose: Pose) {
        self.table().insert(id, BodyState::at(pose));
    }

    /// Remove a body entirely; it disappears from subsequent snapshots.
    pub fn remove_body(&self, id: &AgentId) {
        self.table().remove(id);
    }

    /// Current pose of one body, if present.
    pub fn pose_of(&self, id: &AgentId) -> Option<Pose> {
        self.table().get(id).map(|state| state.pose)
    }

    fn table(&self) -> MutexGuard<'_, BTreeMap<AgentId, BodyState>> {
        // A poisoned table is still a consistent table: every write is a
        // single map operation.
        self.bodies.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WorldStateSource for InMemoryWorld {
    fn poll(&mut self) -> WorldResult<WorldState> {
        let table = self.table();
        let mut snapshot = WorldState::new();
        for (id, state) in table.iter() {
            snapshot.insert(id.clone(), *state);
        }
        Ok(snapshot)
    }
}

impl ActuationSink for InMemoryWorld {
    fn set_state(&mut self, id: &AgentId, pose: Pose, twist: Twist) -> WorldResult<ActuationAck> {
        let mut table = self.table();
        match table.get_mut(id) {
            Some(state) => {
                state.pose = pose;
                state.twist = twist;
                Ok(ActuationAck::ok())
            }
            None => Ok(ActuationAck::rejected(format!("no body named {id}"))),
        }
    }
}

impl ExistenceCheck for InMemoryWorld {
    fn exists(&mut self, name: &str) -> WorldResult<bool> {
        Ok(self.table().contains_key(name))
    }
}
