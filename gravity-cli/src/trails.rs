use gravity_core::BodyView;
use std::collections::VecDeque;

/// Number of past ticks kept for motion trails
pub const TRAIL_FRAMES: usize = 24;
/// Opacity of the most recent trail frame; older frames fade toward zero
const TRAIL_OPACITY: f32 = 0.35;

/// Fading history of body snapshots drawn behind the live bodies
#[derive(Debug, Clone)]
pub struct Trails {
    frames: VecDeque<Vec<BodyView>>,
    capacity: usize,
}

impl Trails {
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn record(&mut self, bodies: Vec<BodyView>) {
        self.frames.push_back(bodies);
        while self.frames.len() > self.capacity {
            self.frames.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Every remembered body with its opacity in `(0, TRAIL_OPACITY]`,
    /// oldest first
    pub fn faded(&self) -> impl Iterator<Item = (f32, &BodyView)> + '_ {
        let n = self.frames.len() as f32;
        self.frames.iter().enumerate().flat_map(move |(age, frame)| {
            let opacity = TRAIL_OPACITY * (age as f32 + 1.0) / n;
            frame.iter().map(move |body| (opacity, body))
        })
    }
}

impl Default for Trails {
    fn default() -> Self {
        Self::new(TRAIL_FRAMES)
    }
}
