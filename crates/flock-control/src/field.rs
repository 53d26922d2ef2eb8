//! Pairwise potential-field forces.
//!
//! Forces are computed per axis as two independent scalar accumulators,
//! mirroring how the integration step sums them.  Both functions are pure:
//! the same positions and parameters always produce the same force.

use glam::DVec3;

use flock_core::planar_distance;

use crate::ControlParameters;

/// Horizontal axis selector for the per-axis force accumulators.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Signed separation `p − q` along this axis.
    #[inline]
    fn delta(self, p: DVec3, q: DVec3) -> f64 {
        match self {
            Axis::X => p.x - q.x,
            Axis::Y => p.y - q.y,
        }
    }
}

/// Repulsion force component exerted on a body at `p` by a body at `q`.
///
/// Inverse-square falloff directed away from `q`, active only while the
/// floored planar distance is within `repulsion_radius`.  The floor is
/// applied before the radius test, and the cutoff is a hard step: the force
/// drops straight to zero past the radius.
pub fn repulsion(p: DVec3, q: DVec3, axis: Axis, params: &ControlParameters) -> f64 {
    let distance = planar_distance(p, q).max(params.min_distance);
    if distance <= params.repulsion_radius {
        params.repulsion_gain * (axis.delta(p, q) / distance) / distance.powi(2)
    } else {
        0.0
    }
}

/// Attraction force component pulling a body at `p` toward `goal`.
///
/// A harmonic well: magnitude grows linearly with planar distance and the
/// direction always points at the goal.  There is no magnitude bound.
/// Coincident points produce zero force, the limit of the expression as the
/// distance vanishes.
pub fn attraction(p: DVec3, goal: DVec3, axis: Axis, params: &ControlParameters) -> f64 {
    let distance = planar_distance(p, goal);
    if distance <= f64::EPSILON {
        return 0.0;
    }
    -params.attraction_gain * (axis.delta(p, goal) / distance) * distance
}
