use crate::color::Color;
use crate::config::SimConfig;
use crate::engine::{BodyId, World};
use crate::error::Result;
use crate::gesture::{GestureHistory, PointerSample};
use crate::integrator::step;
use crate::scenario::BodySeed;
use crate::spawner::Spawner;
use glam::Vec2;
use rand::rngs::StdRng;

/// What a front end needs to draw one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// A running simulation: the world, the pointer gesture window and the
/// spawner, advanced one fixed step per tick
#[derive(Debug)]
pub struct Simulation {
    pub world: World,
    pub gesture: GestureHistory,
    spawner: Spawner<StdRng>,
    config: SimConfig,
    ticks: u64,
}

impl Simulation {
    pub fn new(config: SimConfig, seeds: impl IntoIterator<Item = BodySeed>) -> Result<Self> {
        config.validate()?;

        let mut world = World::with_params(config.gravity, config.world_bound);
        world.extend(seeds)?;
        let gesture = GestureHistory::with_params(config.history_len, config.velocity_divisor);
        let spawner = Spawner::from_config(&config);

        log::info!(
            "starting simulation with {} bodies (G={}, step={}, bound={}, {:?})",
            world.body_count(),
            config.gravity,
            config.time_step,
            config.world_bound,
            config.integration
        );

        Ok(Self {
            world,
            gesture,
            spawner,
            config,
            ticks: 0,
        })
    }

    /// Record the pointer sample for this frame, then advance the world by
    /// the configured time step
    pub fn tick(&mut self, sample: PointerSample) -> Vec<BodyId> {
        self.gesture.record(sample);
        let pruned = step(&mut self.world, self.config.time_step, self.config.integration);
        self.ticks += 1;
        log::trace!("tick {}: {} bodies", self.ticks, self.world.body_count());
        pruned
    }

    /// Spawn a body at `pos` moving with the velocity of the recent gesture
    pub fn spawn_at(&mut self, pos: Vec2) -> Result<BodyId> {
        let vel = self.gesture.estimate_spawn_velocity()?;
        let mass = self.spawner.random_mass();
        let color = self.spawner.random_color();
        let id = self.world.spawn(pos, vel, mass, color)?;
        log::debug!(
            "spawned body {} at {:?} (mass {:.1}, velocity {:?})",
            id,
            pos,
            mass,
            vel
        );
        Ok(id)
    }

    pub fn list_bodies(&self) -> Vec<BodyView> {
        self.world
            .bodies()
            .iter()
            .map(|b| BodyView {
                pos: b.pos,
                radius: b.radius(),
                color: b.color,
            })
            .collect()
    }

    pub fn body_count(&self) -> usize {
        self.world.body_count()
    }

    /// HUD line, e.g. `"7 bodies"`
    pub fn report(&self) -> String {
        format!("{} bodies", self.body_count())
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
