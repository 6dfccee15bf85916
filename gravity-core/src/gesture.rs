//! Pointer gesture tracking for spawning bodies with an initial velocity

use crate::config::{DEFAULT_HISTORY_LEN, DEFAULT_VELOCITY_DIVISOR};
use crate::error::{Result, SimError};
use glam::Vec2;
use std::collections::VecDeque;

/// A pointer position and the duration (ms) of the frame it was captured in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub pos: Vec2,
    pub dt_millis: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, dt_millis: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            dt_millis,
        }
    }
}

/// Sliding window over the most recent pointer samples, oldest first
#[derive(Debug, Clone)]
pub struct GestureHistory {
    samples: VecDeque<PointerSample>,
    capacity: usize,
    velocity_divisor: f32,
}

impl GestureHistory {
    pub fn new() -> Self {
        Self::with_params(DEFAULT_HISTORY_LEN, DEFAULT_VELOCITY_DIVISOR)
    }

    pub fn with_params(capacity: usize, velocity_divisor: f32) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
            velocity_divisor,
        }
    }

    /// Append a sample, evicting the oldest once the window is over capacity
    pub fn record(&mut self, sample: PointerSample) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn samples(&self) -> impl Iterator<Item = &PointerSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Initial velocity for a body spawned at the end of the current gesture.
    ///
    /// The total displacement across the window is multiplied (not divided)
    /// by the summed frame time over `velocity_divisor`. Spawn trajectories
    /// depend on this exact scaling.
    pub fn estimate_spawn_velocity(&self) -> Result<Vec2> {
        let (first, last) = match (self.samples.front(), self.samples.back()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(SimError::EmptyGestureHistory),
        };

        let total_millis: f32 = self.samples.iter().map(|s| s.dt_millis).sum();
        let time_scale = total_millis / self.velocity_divisor;
        Ok((last.pos - first.pos) * time_scale)
    }
}

impl Default for GestureHistory {
    fn default() -> Self {
        Self::new()
    }
}
