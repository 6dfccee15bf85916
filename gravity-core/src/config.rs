//! Tunable constants of the simulation

use crate::color::ColorMode;
use crate::error::{Result, SimError};
use crate::integrator::IntegrationOrder;

/// Gravitational constant used between every pair of bodies
pub const DEFAULT_GRAVITY: f32 = 0.001;
/// Fixed integration step handed to the world on every tick
pub const DEFAULT_TIME_STEP: f32 = 16.0;
/// Bodies whose |x| or |y| exceeds this are removed
pub const DEFAULT_WORLD_BOUND: f32 = 2000.0;
/// Number of pointer samples kept for spawn velocity estimation
pub const DEFAULT_HISTORY_LEN: usize = 15;
/// Divisor applied to the summed frame time (ms) of the gesture window
pub const DEFAULT_VELOCITY_DIVISOR: f32 = 1000.0 * 100.0;
pub const DEFAULT_MASS_MIN: f32 = 50.0;
pub const DEFAULT_MASS_MAX: f32 = 500.0;

/// Simulation configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub gravity: f32,
    pub time_step: f32,
    pub world_bound: f32,
    pub history_len: usize,
    pub velocity_divisor: f32,
    pub mass_min: f32,
    pub mass_max: f32,
    pub integration: IntegrationOrder,
    pub color_mode: ColorMode,
    /// Seed for spawn mass/color; entropy-seeded when `None`
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            time_step: DEFAULT_TIME_STEP,
            world_bound: DEFAULT_WORLD_BOUND,
            history_len: DEFAULT_HISTORY_LEN,
            velocity_divisor: DEFAULT_VELOCITY_DIVISOR,
            mass_min: DEFAULT_MASS_MIN,
            mass_max: DEFAULT_MASS_MAX,
            integration: IntegrationOrder::default(),
            color_mode: ColorMode::default(),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Reject values that would make the integrator or the spawner misbehave
    pub fn validate(&self) -> Result<()> {
        positive("gravity", self.gravity)?;
        positive("time_step", self.time_step)?;
        positive("world_bound", self.world_bound)?;
        positive("velocity_divisor", self.velocity_divisor)?;
        positive("mass_min", self.mass_min)?;
        positive("mass_max", self.mass_max)?;

        if self.history_len == 0 {
            return Err(SimError::InvalidConfig(
                "history_len must be at least 1".to_string(),
            ));
        }
        if self.mass_min > self.mass_max {
            return Err(SimError::InvalidConfig(format!(
                "mass range is empty: {} > {}",
                self.mass_min, self.mass_max
            )));
        }
        Ok(())
    }
}

fn positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_time_step() {
        let config = SimConfig {
            time_step: 0.0,
            ..SimConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("time_step"));
    }

    #[test]
    fn test_rejects_nan_gravity() {
        let config = SimConfig {
            gravity: f32::NAN,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_mass_range() {
        let config = SimConfig {
            mass_min: 600.0,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_empty_history() {
        let config = SimConfig {
            history_len: 0,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
