//! Unit tests for snapshots and the in-memory world.

use glam::DVec3;

use flock_core::{AgentId, Pose, Twist};

use crate::{ActuationSink, BodyState, ExistenceCheck, InMemoryWorld, WorldState, WorldStateSource};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn body_at(x: f64, y: f64) -> BodyState {
    BodyState::at(Pose::at(DVec3::new(x, y, 0.0)))
}

// ── WorldState ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod snapshot {
    use super::*;

    #[test]
    fn iterates_in_ascending_id_order() {
        let mut world = WorldState::new();
        world.insert(AgentId::new("puck3"), body_at(3.0, 0.0));
        world.insert(AgentId::new("puck1"), body_at(1.0, 0.0));
        world.insert(AgentId::new("puck2"), body_at(2.0, 0.0));

        let ids: Vec<&str> = world.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, ["puck1", "puck2", "puck3"]);
    }

    #[test]
    fn get_and_len() {
        let mut world = WorldState::new();
        assert!(world.is_empty());
        world.insert(AgentId::new("puck1"), body_at(1.0, 2.0));
        assert_eq!(world.len(), 1);
        let state = world.get(&AgentId::new("puck1")).unwrap();
        assert_eq!(state.pose.position, DVec3::new(1.0, 2.0, 0.0));
        assert!(world.get(&AgentId::new("ghost")).is_none());
    }

    #[test]
    fn insert_replaces_existing() {
        let mut world = WorldState::new();
        world.insert(AgentId::new("puck1"), body_at(0.0, 0.0));
        world.insert(AgentId::new("puck1"), body_at(5.0, 5.0));
        assert_eq!(world.len(), 1);
        assert_eq!(
            world.get(&AgentId::new("puck1")).unwrap().pose.position,
            DVec3::new(5.0, 5.0, 0.0)
        );
    }
}

// ── InMemoryWorld ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod memory {
    use super::*;

    #[test]
    fn poll_reflects_inserted_bodies() {
        let world = InMemoryWorld::new();
        world.insert_body(AgentId::new("puck1"), Pose::at(DVec3::new(1.0, 0.0, 0.25)));
        world.insert_body(AgentId::new("puck2"), Pose::at(DVec3::new(0.0, 1.0, 0.25)));

        let snapshot = world.clone().poll().unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(
            snapshot.get(&AgentId::new("puck1")).unwrap().pose.position,
            DVec3::new(1.0, 0.0, 0.25)
        );
    }

    #[test]
    fn set_state_closes_the_loop() {
        let world = InMemoryWorld::new();
        let id = AgentId::new("puck1");
        world.insert_body(id.clone(), Pose::at(DVec3::ZERO));

        let commanded = Pose::at(DVec3::new(0.5, 0.5, 0.0));
        let ack = world.clone().set_state(&id, commanded, Twist::ZERO).unwrap();
        assert!(ack.success);

        // The next poll observes the commanded pose.
        let snapshot = world.clone().poll().unwrap();
        assert_eq!(snapshot.get(&id).unwrap().pose, commanded);
    }

    #[test]
    fn set_state_rejects_unknown_body() {
        let world = InMemoryWorld::new();
        let ack = world
            .clone()
            .set_state(&AgentId::new("ghost"), Pose::default(), Twist::ZERO)
            .unwrap();
        assert!(!ack.success);
        assert!(ack.message.contains("ghost"));
    }

    #[test]
    fn exists_tracks_registry() {
        let world = InMemoryWorld::new();
        world.insert_body(AgentId::new("puck1"), Pose::default());
        let mut checker = world.clone();
        assert!(checker.exists("puck1").unwrap());
        assert!(!checker.exists("ghost").unwrap());

        world.remove_body(&AgentId::new("puck1"));
        assert!(!checker.exists("puck1").unwrap());
    }

    #[test]
    fn clones_share_one_table() {
        let world = InMemoryWorld::new();
        let other_handle = world.clone();
        world.insert_body(AgentId::new("puck1"), Pose::default());
        assert!(other_handle.pose_of(&AgentId::new("puck1")).is_some());
    }
}
