//! Heading consensus over unit quaternions.
//!
//! Each coordinated body measures its signed angular offset to every other
//! body in the snapshot, aggregates the offsets into a mean rotation about
//! the vertical axis, and blends toward the rotated heading with a SLERP
//! weight derived from the unnormalized offset sum.

use glam::{DQuat, DVec3};

/// Aggregated heading offsets for one body relative to the rest of the group.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeadingConsensus {
    /// Mean signed angular offset to the other bodies, radians.
    pub average_offset: f64,

    /// SLERP weight applied when blending toward the consensus heading,
    /// already clamped to `[0, 1]`.
    pub blend: f64,
}

impl HeadingConsensus {
    /// No-rotation consensus used when fewer than two bodies are known.
    pub const NEUTRAL: HeadingConsensus = HeadingConsensus { average_offset: 0.0, blend: 0.0 };
}

/// Signed angular offset between two unit quaternions.
///
/// The magnitude comes from the scalar part of the relative rotation
/// `r = q1 ⊗ q2⁻¹`: `2·acos(clamp(|r.w|, 0, 1))`, always non-negative.  The
/// sense comes from the w-component of a secondary direction quaternion,
/// `identity ⊗ r⁻¹`: a negative w negates the offset.
// TODO: for angles below π the direction w tracks the quaternion
// representative, not the geometric rotation sense; validate against
// recorded group runs before replacing this with a plain signed-angle
// extraction.
pub fn signed_angle_between(q1: DQuat, q2: DQuat) -> f64 {
    let relative = q1 * q2.inverse();
    let angle = 2.0 * relative.w.abs().clamp(0.0, 1.0).acos();

    let direction = DQuat::IDENTITY * relative.inverse();
    if direction.w < 0.0 { -angle } else { angle }
}

/// Aggregate the signed offsets of the body at `index` against every other
/// body in the snapshot.
///
/// `orientations` holds every body known to the world this tick,
/// coordinated or not, in snapshot order.  With fewer than two bodies the
/// average is undefined; [`HeadingConsensus::NEUTRAL`] is returned so the
/// caller applies no rotation instead of dividing by zero.
pub fn heading_consensus(index: usize, orientations: &[DQuat]) -> HeadingConsensus {
    let n = orientations.len();
    if n <= 1 {
        return HeadingConsensus::NEUTRAL;
    }

    let current = orientations[index];
    let total: f64 = orientations
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != index)
        .map(|(_, &other)| signed_angle_between(current, other))
        .sum();

    HeadingConsensus {
        average_offset: total / (n - 1) as f64,
        // The blend reuses the unnormalized sum, so it saturates as the
        // group grows out of alignment.
        blend: (total / n as f64).clamp(0.0, 1.0),
    }
}

/// Blend `current` toward the consensus heading.
///
/// Rotates about the vertical axis by the average offset, then SLERPs from
/// the current orientation toward the rotated one with the consensus blend
/// weight.  The result is renormalized: orientations must stay unit-length
/// across ticks.
pub fn blend_heading(current: DQuat, consensus: HeadingConsensus) -> DQuat {
    let rotation = DQuat::from_axis_angle(DVec3::Z, consensus.average_offset);
    let desired = current * rotation;
    current.slerp(desired, consensus.blend).normalize()
}
