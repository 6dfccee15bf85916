use crate::engine::{out_of_bounds, BodyId, World};
use glam::Vec2;

/// Order in which bodies are advanced within one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationOrder {
    /// Each body is accelerated, moved and bounds-checked before the next one
    /// sees the world, so later bodies feel the already advanced state of
    /// earlier ones.
    #[default]
    Sequential,
    /// All forces are computed from the pre-tick world, then applied at once.
    Simultaneous,
}

/// Advance the world by `dt` with semi-implicit Euler (`v += a*dt`, then
/// `x += v*dt`) and drop bodies that left the world bound.
///
/// Returns the ids of the removed bodies in world order. Survivors keep
/// their relative order.
pub fn step(world: &mut World, dt: f32, order: IntegrationOrder) -> Vec<BodyId> {
    match order {
        IntegrationOrder::Sequential => step_sequential(world, dt),
        IntegrationOrder::Simultaneous => step_simultaneous(world, dt),
    }
}

fn step_sequential(world: &mut World, dt: f32) -> Vec<BodyId> {
    let mut pruned = Vec::new();
    let mut i = 0;
    while i < world.bodies.len() {
        let force = world.net_force(i);
        let body = &mut world.bodies[i];
        body.accelerate(force, dt);
        body.advance(dt);

        if world.is_out_of_bounds(&world.bodies[i]) {
            // The next body slides into slot `i`, so the index stays put
            let body = world.bodies.remove(i);
            log::debug!("pruned body {} at {:?}", body.id(), body.pos);
            pruned.push(body.id());
        } else {
            i += 1;
        }
    }
    pruned
}

fn step_simultaneous(world: &mut World, dt: f32) -> Vec<BodyId> {
    // First, compute all forces against the untouched world
    let forces: Vec<Vec2> = (0..world.bodies.len())
        .map(|i| world.net_force(i))
        .collect();

    for (body, force) in world.bodies.iter_mut().zip(forces) {
        body.accelerate(force, dt);
        body.advance(dt);
    }

    let bound = world.world_bound;
    let mut pruned = Vec::new();
    world.bodies.retain(|body| {
        let inside = !out_of_bounds(body.pos, bound);
        if !inside {
            log::debug!("pruned body {} at {:?}", body.id(), body.pos);
            pruned.push(body.id());
        }
        inside
    });
    pruned
}

impl World {
    /// One tick with the reference (sequential) ordering
    pub fn update(&mut self, dt: f32) -> Vec<BodyId> {
        step(self, dt, IntegrationOrder::Sequential)
    }
}
