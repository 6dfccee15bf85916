//! Random mass and color for bodies created from pointer gestures

use crate::color::{Color, ColorMode};
use crate::config::SimConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const HUE_SATURATION: f32 = 0.75;
const HUE_VALUE: f32 = 1.0;

/// Source of randomized properties for spawned bodies
#[derive(Debug, Clone)]
pub struct Spawner<R: Rng> {
    rng: R,
    mass_min: f32,
    mass_max: f32,
    color_mode: ColorMode,
}

impl Spawner<StdRng> {
    /// Seeded from `config.seed`, or from system entropy when unset
    pub fn from_config(config: &SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng, config.mass_min, config.mass_max, config.color_mode)
    }
}

impl<R: Rng> Spawner<R> {
    pub fn new(rng: R, mass_min: f32, mass_max: f32, color_mode: ColorMode) -> Self {
        Self {
            rng,
            mass_min,
            mass_max,
            color_mode,
        }
    }

    /// Uniform over `[mass_min, mass_max]`
    pub fn random_mass(&mut self) -> f32 {
        self.rng.gen_range(self.mass_min..=self.mass_max)
    }

    pub fn random_color(&mut self) -> Color {
        match self.color_mode {
            ColorMode::Rgb => Color::new(
                self.rng.gen_range(0..255),
                self.rng.gen_range(0..255),
                self.rng.gen_range(0..255),
            ),
            ColorMode::Hue => Color::from_hsv(self.rng.gen(), HUE_SATURATION, HUE_VALUE),
        }
    }
}
