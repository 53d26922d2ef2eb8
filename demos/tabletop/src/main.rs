//! tabletop — smallest runnable example for the rust_flock controller.
//!
//! Six pucks scattered across a table, each assigned a fixed offset in a
//! wedge formation around a drifting rendezvous point.  The in-memory world
//! stands in for a live simulator: every commanded pose is applied directly,
//! so the next tick's snapshot observes the previous tick's commands.

use std::collections::BTreeMap;

use anyhow::Result;

use glam::{DQuat, DVec3};

use flock_control::ControlParameters;
use flock_core::{AgentId, Pose, Tick};
use flock_loop::{ControlLoopBuilder, LoopObserver, NoopObserver};
use flock_world::InMemoryWorld;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64 = 42;
const SPACING:       f64 = 1.5;   // formation spacing, metres
const DT:            f64 = 0.01;  // 1 tick = 10 ms (100 Hz equivalent)
const IDLE_TICKS:    u64 = 100;
const ACTIVE_TICKS:  u64 = 400;
const PRINT_EVERY:   u64 = 100;

// ── Formation ─────────────────────────────────────────────────────────────────

/// Wedge formation: offsets from the rendezvous point, in metres.
fn formation() -> BTreeMap<AgentId, DVec3> {
    let d = SPACING;
    [
        ("puck1", DVec3::new(d, 0.0, 0.0)),
        ("puck2", DVec3::new(0.0, -2.0 * d, 0.0)),
        ("puck3", DVec3::new(2.0 * d, -2.0 * d, 0.0)),
        ("puck4", DVec3::new(-d, -4.0 * d, 0.0)),
        ("puck5", DVec3::new(d, -4.0 * d, 0.0)),
        ("puck6", DVec3::new(3.0 * d, -4.0 * d, 0.0)),
    ]
    .into_iter()
    .map(|(name, offset)| (AgentId::new(name), offset))
    .collect()
}

/// Scattered start poses with deliberately disagreeing headings, so both
/// the potential field and the heading consensus have work to do.
fn scatter(world: &InMemoryWorld) {
    let starts = [
        ("puck1", DVec3::new(4.0, 3.0, 0.25), 0.0),
        ("puck2", DVec3::new(-3.5, 2.0, 0.25), 0.4),
        ("puck3", DVec3::new(2.5, -4.0, 0.25), -0.3),
        ("puck4", DVec3::new(-2.0, -3.0, 0.25), 0.8),
        ("puck5", DVec3::new(0.5, 4.5, 0.25), -0.6),
        ("puck6", DVec3::new(-4.5, -1.0, 0.25), 0.2),
    ];
    for (name, position, heading) in starts {
        let orientation = DQuat::from_axis_angle(DVec3::Z, heading);
        world.insert_body(AgentId::new(name), Pose::new(position, orientation));
    }
}

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressPrinter;

impl LoopObserver for ProgressPrinter {
    fn on_commands(&mut self, tick: Tick, issued: usize) {
        if tick.0 % PRINT_EVERY == 0 {
            println!("  {tick}: commanded {issued} pucks");
        }
    }

    fn on_actuation_failure(&mut self, id: &AgentId, message: &str) {
        eprintln!("  actuation failure for {id}: {message}");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let world = InMemoryWorld::new();
    scatter(&world);

    let mut controller = ControlLoopBuilder::new(
        ControlParameters::default(),
        formation(),
        world.clone(),
        world.clone(),
    )
    .seed(SEED)
    .build(&mut world.clone())?;

    let activation = controller.activation_handle();

    // Phase 1: the controller idles — ticks pass, nothing moves.
    println!("idling for {IDLE_TICKS} ticks (controller inactive)…");
    controller.run_ticks(IDLE_TICKS, DT, &mut NoopObserver)?;

    // Phase 2: activate and let the formation assemble.
    activation.set_active(true);
    println!("active for {ACTIVE_TICKS} ticks:");
    controller.run_ticks(ACTIVE_TICKS, DT, &mut ProgressPrinter)?;

    // ── Summary ───────────────────────────────────────────────────────────
    let rendezvous = controller.ctx.goals.rendezvous();
    println!("\nrendezvous drifted to ({:.3}, {:.3})", rendezvous.x, rendezvous.y);
    println!("{:<8} {:>8} {:>8} {:>14}", "puck", "x", "y", "dist to goal");
    for (id, offset) in formation() {
        let Some(pose) = world.pose_of(&id) else { continue };
        let goal = rendezvous + offset;
        let distance = flock_core::planar_distance(pose.position, goal);
        println!(
            "{:<8} {:>8.3} {:>8.3} {:>14.3}",
            id.as_str(),
            pose.position.x,
            pose.position.y,
            distance
        );
    }

    Ok(())
}
