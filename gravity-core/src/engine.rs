use crate::color::Color;
use crate::config::{DEFAULT_GRAVITY, DEFAULT_WORLD_BOUND};
use crate::error::{Result, SimError};
use crate::scenario::BodySeed;
use glam::Vec2;

/// Identity of a body, unique within the world that created it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub u64);

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A point mass in the simulation
///
/// Mass, radius and id are fixed at construction. Position and velocity are
/// advanced by the integrator.
#[derive(Debug, Clone)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    mass: f32,
    radius: f32,
    id: BodyId,
}

impl Body {
    fn new(id: BodyId, pos: Vec2, vel: Vec2, mass: f32, color: Color) -> Result<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::NonPositiveMass(mass));
        }
        Ok(Self {
            pos,
            vel,
            color,
            mass,
            radius: radius_for_mass(mass),
            id,
        })
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    /// Apply a net force over `dt`: `v += (F / m) * dt`
    pub(crate) fn accelerate(&mut self, force: Vec2, dt: f32) {
        let accel = force / self.mass;
        self.vel += accel * dt;
    }

    /// `x += v * dt`
    pub(crate) fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// Radius a body of the given mass is drawn and collided with
pub fn radius_for_mass(mass: f32) -> f32 {
    mass.sqrt() / 3.0
}

/// True when either coordinate of `pos` lies beyond `bound` in magnitude
pub fn out_of_bounds(pos: Vec2, bound: f32) -> bool {
    pos.x.abs() > bound || pos.y.abs() > bound
}

/// Gravitational pull exerted on `body` by `other`.
///
/// Pairs closer than the sum of their radii contribute nothing; this also
/// keeps the division away from zero distance.
pub fn pair_force(body: &Body, other: &Body, g: f32) -> Vec2 {
    let delta = other.pos - body.pos;
    let dsq = delta.length_squared();
    let min_d = body.radius + other.radius;
    if dsq < min_d * min_d {
        return Vec2::ZERO;
    }

    let f = g * body.mass * other.mass / dsq;
    let d = dsq.sqrt();
    delta * (f / d)
}

/// The live set of bodies and the constants governing them
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) bodies: Vec<Body>,
    next_id: u64,
    pub gravity: f32,
    pub world_bound: f32,
}

impl World {
    pub fn new() -> Self {
        Self::with_params(DEFAULT_GRAVITY, DEFAULT_WORLD_BOUND)
    }

    pub fn with_params(gravity: f32, world_bound: f32) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 0,
            gravity,
            world_bound,
        }
    }

    /// Spawn every seed, assigning ids in seed order
    pub fn extend(&mut self, seeds: impl IntoIterator<Item = BodySeed>) -> Result<()> {
        for seed in seeds {
            self.spawn(seed.pos, seed.vel, seed.mass, seed.color)?;
        }
        Ok(())
    }

    /// Append a new body with a fresh id.
    ///
    /// Fails without consuming an id when `mass` is not positive and finite.
    pub fn spawn(&mut self, pos: Vec2, vel: Vec2, mass: f32, color: Color) -> Result<BodyId> {
        let id = BodyId(self.next_id);
        let body = Body::new(id, pos, vel, mass, color)?;
        self.next_id += 1;
        self.bodies.push(body);
        Ok(id)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Net force on the body at `index` from every other body currently in the world
    pub fn net_force(&self, index: usize) -> Vec2 {
        let body = &self.bodies[index];
        self.bodies
            .iter()
            .filter(|other| other.id != body.id)
            .fold(Vec2::ZERO, |acc, other| {
                acc + pair_force(body, other, self.gravity)
            })
    }

    pub fn is_out_of_bounds(&self, body: &Body) -> bool {
        out_of_bounds(body.pos, self.world_bound)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_body_world(separation: f32) -> World {
        let mut world = World::new();
        world
            .spawn(Vec2::ZERO, Vec2::ZERO, 9.0, Color::WHITE)
            .unwrap();
        world
            .spawn(Vec2::new(separation, 0.0), Vec2::ZERO, 36.0, Color::WHITE)
            .unwrap();
        world
    }

    #[test]
    fn test_radius_derived_from_mass() {
        let world = two_body_world(10.0);
        assert_eq!(world.bodies()[0].radius(), 1.0);
        assert_eq!(world.bodies()[1].radius(), 2.0);
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let world = two_body_world(10.0);
        assert_eq!(world.bodies()[0].id(), BodyId(0));
        assert_eq!(world.bodies()[1].id(), BodyId(1));
    }

    #[test]
    fn test_rejected_mass_does_not_consume_id() {
        let mut world = World::new();
        assert_eq!(
            world.spawn(Vec2::ZERO, Vec2::ZERO, 0.0, Color::WHITE),
            Err(SimError::NonPositiveMass(0.0))
        );
        let id = world
            .spawn(Vec2::ZERO, Vec2::ZERO, 1.0, Color::WHITE)
            .unwrap();
        assert_eq!(id, BodyId(0));
        assert_eq!(world.body_count(), 1);
    }

    #[test]
    fn test_pair_force_points_toward_other() {
        let world = two_body_world(10.0);
        let force = pair_force(&world.bodies()[0], &world.bodies()[1], 1.0);
        // G * 9 * 36 / 100
        assert!((force.x - 3.24).abs() < 1e-5);
        assert_eq!(force.y, 0.0);
    }

    #[test]
    fn test_pair_force_skipped_inside_cutoff() {
        // combined radius is 3.0
        let world = two_body_world(2.9);
        let force = pair_force(&world.bodies()[0], &world.bodies()[1], 1.0);
        assert_eq!(force, Vec2::ZERO);
        assert_eq!(world.net_force(0), Vec2::ZERO);
        assert_eq!(world.net_force(1), Vec2::ZERO);
    }

    #[test]
    fn test_net_force_is_equal_and_opposite_for_a_pair() {
        let world = two_body_world(10.0);
        let a = world.net_force(0);
        let b = world.net_force(1);
        assert!((a + b).length() < 1e-6);
    }

    #[test]
    fn test_out_of_bounds_uses_each_axis() {
        let mut world = World::new();
        world
            .spawn(Vec2::new(2000.0, -2000.0), Vec2::ZERO, 1.0, Color::WHITE)
            .unwrap();
        world
            .spawn(Vec2::new(0.0, -2000.5), Vec2::ZERO, 1.0, Color::WHITE)
            .unwrap();
        assert!(!world.is_out_of_bounds(&world.bodies()[0]));
        assert!(world.is_out_of_bounds(&world.bodies()[1]));
    }

    #[test]
    fn test_out_of_bounds_follows_world_bound() {
        let pos = Vec2::new(150.0, -20.0);
        assert!(out_of_bounds(pos, 100.0));
        assert!(!out_of_bounds(pos, 150.0));
        assert!(out_of_bounds(Vec2::new(0.0, -150.5), 150.0));

        let mut world = World::with_params(DEFAULT_GRAVITY, 100.0);
        world.spawn(pos, Vec2::ZERO, 1.0, Color::WHITE).unwrap();
        assert!(world.is_out_of_bounds(&world.bodies()[0]));
    }
}
