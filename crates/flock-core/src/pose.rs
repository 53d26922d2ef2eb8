//! Rigid-body pose and twist value types.
//!
//! Positions and orientations use `glam`'s double-precision types.  The
//! controller acts in the horizontal plane only: z is carried through
//! untouched, and every distance fed to the force model is planar.

use glam::{DQuat, DVec3};

/// Position + orientation of one rigid body.
///
/// The orientation is expected to be a unit quaternion; every operation
/// that produces a new orientation renormalizes before storing it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position:    DVec3,
    pub orientation: DQuat,
}

impl Pose {
    #[inline]
    pub fn new(position: DVec3, orientation: DQuat) -> Self {
        Self { position, orientation }
    }

    /// Pose at `position` with no rotation.
    #[inline]
    pub fn at(position: DVec3) -> Self {
        Self { position, orientation: DQuat::IDENTITY }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self { position: DVec3::ZERO, orientation: DQuat::IDENTITY }
    }
}

/// Linear and angular velocity of one rigid body.
///
/// The controller always commands `Twist::ZERO`: commanded poses are
/// applied as rigid teleports, not velocity setpoints.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Twist {
    pub linear:  DVec3,
    pub angular: DVec3,
}

impl Twist {
    pub const ZERO: Twist = Twist { linear: DVec3::ZERO, angular: DVec3::ZERO };
}

/// Distance between two points projected onto the x-y plane.
#[inline]
pub fn planar_distance(p: DVec3, q: DVec3) -> f64 {
    ((p.x - q.x).powi(2) + (p.y - q.y).powi(2)).sqrt()
}
