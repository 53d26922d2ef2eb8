//! Unit tests for flock-core primitives.

#[cfg(test)]
mod ids {
    use std::collections::BTreeMap;

    use crate::AgentId;

    #[test]
    fn as_str_roundtrip() {
        let id = AgentId::new("puck3");
        assert_eq!(id.as_str(), "puck3");
        assert_eq!(AgentId::from("puck3"), id);
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(AgentId::new("puck1") < AgentId::new("puck2"));
        assert!(AgentId::new("a") < AgentId::new("b"));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId::new("puck7").to_string(), "puck7");
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map: BTreeMap<AgentId, u32> = BTreeMap::new();
        map.insert(AgentId::new("puck1"), 1);
        assert_eq!(map.get("puck1"), Some(&1));
        assert_eq!(map.get("puck9"), None);
    }
}

#[cfg(test)]
mod pose {
    use glam::{DQuat, DVec3};

    use crate::{Pose, Twist, planar_distance};

    #[test]
    fn planar_distance_ignores_z() {
        let p = DVec3::new(0.0, 0.0, 0.0);
        let q = DVec3::new(3.0, 4.0, 100.0);
        assert!((planar_distance(p, q) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn planar_distance_zero_for_same_column() {
        let p = DVec3::new(1.0, 2.0, 0.0);
        let q = DVec3::new(1.0, 2.0, 9.0);
        assert_eq!(planar_distance(p, q), 0.0);
    }

    #[test]
    fn pose_at_has_identity_orientation() {
        let pose = Pose::at(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(pose.orientation, DQuat::IDENTITY);
        assert_eq!(pose.position.z, 3.0);
    }

    #[test]
    fn twist_zero_is_all_zeros() {
        assert_eq!(Twist::ZERO.linear, DVec3::ZERO);
        assert_eq!(Twist::ZERO.angular, DVec3::ZERO);
        assert_eq!(Twist::default(), Twist::ZERO);
    }
}

#[cfg(test)]
mod rng {
    use crate::DriftRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = DriftRng::new(12345);
        let mut r2 = DriftRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.jitter(8.0);
            let b: f64 = r2.jitter(8.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn clone_replays_identical_stream() {
        let mut original = DriftRng::new(7);
        let mut replay = original.clone();
        for _ in 0..50 {
            assert_eq!(original.jitter(1.0), replay.jitter(1.0));
        }
    }

    #[test]
    fn jitter_within_span() {
        let mut rng = DriftRng::new(0);
        for _ in 0..1000 {
            let v = rng.jitter(8.0);
            assert!((-8.0..=8.0).contains(&v));
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = DriftRng::new(0);
        for _ in 0..1000 {
            let v: f64 = rng.gen_range(0.0..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(42).to_string(), "T42");
    }
}
