//! Fixed-step Euler stepper and the per-frame simulation loop
//!
//! Each body in turn: gravity from the current set, clamped acceleration,
//! position update scaled by the time speed, border policy, trail sampling.
//! Collisions are then resolved and deleted bodies pruned.

use crate::simulation::collisions::{resolve_collisions, CollisionReport};
use crate::simulation::engine::{CollisionPasses, Engine, World};
use crate::simulation::forces::AccelSet;
use crate::simulation::params::{Parameters, MAX_SPEED};
use crate::simulation::states::{limit, Body, BodyId, NVec2, System};

/// Outcome of one call to [`step_system`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub collisions: CollisionReport,
    pub escaped: usize, // bodies pruned after leaving an open world
    pub bodies: usize,  // bodies left after the step
}

/// `velocity = clamp(velocity + acceleration, MAX_SPEED)`
pub fn accelerate(body: &mut Body, acceleration: NVec2) {
    body.velocity = limit(body.velocity + acceleration, MAX_SPEED);
}

/// Move a body by one step, then apply the border policy and sample the trail
pub fn euler_step(body: &mut Body, params: &Parameters, world: &World, reset_trail: bool) {
    body.position += body.velocity * params.time_speed();

    apply_borders(body, params.solid_borders(), world);
    update_trail(body, params, reset_trail);
}

/// Reflect off solid borders, or flag bodies that fully left an open world
pub fn apply_borders(body: &mut Body, solid: bool, world: &World) {
    let r = body.radius();
    let (x, y) = (body.position.x, body.position.y);

    if solid {
        let v = &mut body.velocity;
        // one-sided checks: only reflect while still heading outwards
        if (x < r && v.x < 0.0) || (x > world.width - r && v.x > 0.0) {
            v.x = -v.x;
        }
        if (y < r && v.y < 0.0) || (y > world.height - r && v.y > 0.0) {
            v.y = -v.y;
        }
    } else if x + r < 0.0 || x - r > world.width || y + r < 0.0 || y - r > world.height {
        body.is_deleted = true;
    }
}

/// Push the current position when the sampling countdown has run out
pub fn update_trail(body: &mut Body, params: &Parameters, reset_trail: bool) {
    if body.tail_interval <= 0.0 || reset_trail {
        body.trail.push_front(body.position);
        body.tail_interval = params.trail_interval();
    } else {
        body.tail_interval -= 1.0;
    }

    body.trail.truncate(params.tail_length());
}

/// Advance the whole system by one step
///
/// Bodies are visited in the order they had when the step started; a body
/// absorbed by a black hole earlier in the step is not visited again.
pub fn step_system(
    sys: &mut System,
    forces: &AccelSet,
    params: &mut Parameters,
    engine: &Engine,
) -> StepReport {
    let reset_trail = params.take_trail_reset();
    let mut report = StepReport::default();

    for body in sys.bodies.iter_mut() {
        body.overlapped.clear();
    }

    let order: Vec<BodyId> = sys.bodies.iter().map(Body::id).collect();
    for id in order {
        let Some(i) = sys.index_of(id) else {
            continue; // merged into a black hole this step
        };

        let a = forces.accel_on(i, sys, params);
        let body = &mut sys.bodies[i];
        accelerate(body, a);
        euler_step(body, params, &engine.world, reset_trail);

        if engine.collisions == CollisionPasses::PerBody {
            report.collisions.extend(resolve_collisions(sys));
        }
    }

    if engine.collisions == CollisionPasses::PerStep {
        report.collisions = resolve_collisions(sys);
    }

    let before = sys.bodies.len();
    sys.bodies.retain(|b| {
        if b.is_deleted {
            log::debug!("{:?} left the world at {:?}", b.id(), b.position);
        }
        !b.is_deleted
    });
    report.escaped = before - sys.bodies.len();
    report.bodies = sys.bodies.len();

    sys.steps += 1;
    log::trace!("step {}: {:?}", sys.steps, report);
    report
}
