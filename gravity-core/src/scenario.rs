//! Initial body configurations

use crate::color::Color;
use glam::Vec2;

/// Initial state of a body before it is given an id
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySeed {
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f32,
    pub color: Color,
}

impl BodySeed {
    pub fn new(x: f32, y: f32, dx: f32, dy: f32, mass: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(dx, dy),
            mass,
            color: Color::WHITE,
        }
    }
}

/// A heavy central body with a handful of orbiting companions
pub fn default_scenario() -> Vec<BodySeed> {
    vec![
        BodySeed::new(400.0, 400.0, 0.001, -0.006, 5000.0),
        BodySeed::new(330.0, 400.0, -0.03, 0.27, 25.0),
        BodySeed::new(260.0, 400.0, 0.0, 0.192, 40.0),
        BodySeed::new(100.0, 400.0, 0.0, 0.135, 100.0),
        BodySeed::new(85.0, 400.0, 0.0, 0.21, 0.1),
        BodySeed::new(80.0, 400.0, 0.0, 0.21, 0.1),
        BodySeed::new(740.0, 60.0, -0.0435, -0.025, 1.0),
    ]
}
