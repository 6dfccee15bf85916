pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod integrator;
pub mod scenario;
pub mod simulation;
pub mod spawner;

pub use color::{Color, ColorMode};
pub use config::SimConfig;
pub use engine::{out_of_bounds, pair_force, radius_for_mass, Body, BodyId, World};
pub use error::{Result, SimError};
pub use gesture::{GestureHistory, PointerSample};
pub use integrator::{step, IntegrationOrder};
pub use scenario::{default_scenario, BodySeed};
pub use simulation::{BodyView, Simulation};
pub use spawner::Spawner;
