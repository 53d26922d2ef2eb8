//! One coordination tick: consensus, forces, integration.

use glam::{DQuat, DVec3};

use flock_control::{
    Axis, ControlParameters, GoalTracker, attraction, blend_heading, heading_consensus, repulsion,
};
use flock_core::{AgentId, Pose, Twist};
use flock_world::{BodyState, WorldState};

use crate::ControllerContext;

/// A zero-twist commanded pose for one body.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentCommand {
    pub id:    AgentId,
    pub pose:  Pose,
    pub twist: Twist,
}

/// Run one coordination step over `world`.
///
/// Reads the activation flag exactly once; `None` means the controller is
/// idle and nothing was touched — not even the goal drift.  When active,
/// the rendezvous advance happens before any goal read, and every per-agent
/// computation observes the same snapshot and `dt`.
///
/// The returned batch covers every body present in both the snapshot and
/// the offset table, in ascending id order; all other bodies are skipped
/// without error.
pub fn coordination_step(
    params: &ControlParameters,
    ctx:    &mut ControllerContext,
    world:  &WorldState,
    dt:     f64,
) -> Option<Vec<AgentCommand>> {
    if !ctx.is_active() {
        return None;
    }

    ctx.goals.advance(dt);
    let goals = &ctx.goals;

    // Orientations are snapshotted once, in snapshot order; every agent's
    // consensus runs over this same slice with its own position in it.
    let orientations: Vec<DQuat> = world.iter().map(|(_, s)| s.pose.orientation).collect();

    let bodies: Vec<(usize, &AgentId, &BodyState)> = world
        .iter()
        .enumerate()
        .map(|(index, (id, state))| (index, id, state))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let commands = bodies
        .into_iter()
        .filter_map(|(index, id, state)| {
            command_for(params, goals, world, &orientations, index, id, state, dt)
        })
        .collect();

    #[cfg(feature = "parallel")]
    let commands = {
        use rayon::prelude::*;

        // Rayon preserves input order in collect, so the batch stays in
        // ascending id order even when computed out of order.
        bodies
            .into_par_iter()
            .filter_map(|(index, id, state)| {
                command_for(params, goals, world, &orientations, index, id, state, dt)
            })
            .collect()
    };

    Some(commands)
}

/// Compute the command for one body, or `None` if it has no configured
/// goal offset.
fn command_for(
    params:       &ControlParameters,
    goals:        &GoalTracker,
    world:        &WorldState,
    orientations: &[DQuat],
    index:        usize,
    id:           &AgentId,
    state:        &BodyState,
    dt:           f64,
) -> Option<AgentCommand> {
    let goal = goals.goal_for(id)?;
    let position = state.pose.position;

    // Repulsion from every other body — coordinated or not — accumulated
    // per axis, then attraction toward this body's own goal.
    let mut force_x = 0.0;
    let mut force_y = 0.0;
    for (other_id, other) in world.iter() {
        if other_id == id {
            continue;
        }
        force_x += repulsion(position, other.pose.position, Axis::X, params);
        force_y += repulsion(position, other.pose.position, Axis::Y, params);
    }
    force_x += attraction(position, goal, Axis::X, params);
    force_y += attraction(position, goal, Axis::Y, params);

    // Planar integration; z is passed through untouched.
    let new_position = DVec3::new(
        position.x + force_x * dt,
        position.y + force_y * dt,
        position.z,
    );

    let consensus = heading_consensus(index, orientations);
    let orientation = blend_heading(state.pose.orientation, consensus);

    Some(AgentCommand {
        id:    id.clone(),
        pose:  Pose::new(new_position, orientation),
        twist: Twist::ZERO,
    })
}
