use std::time::Duration;

/// Simulation ticks per second, regardless of the display refresh rate
pub const TARGET_FPS: f32 = 60.0;

/// Decides on which rendered frames the simulation advances.
///
/// At most one tick runs per frame. Leftover time carries over so a fast
/// display still averages `fps` ticks per second; a slow one simply ticks
/// once per frame.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: f32,
    since_tick: f32,
}

impl FramePacer {
    pub fn new(fps: f32) -> Self {
        Self {
            interval: 1.0 / fps,
            since_tick: 0.0,
        }
    }

    /// Feed the duration of the last frame in seconds. Returns the time since
    /// the previous tick in milliseconds when a tick is due.
    pub fn advance(&mut self, frame_secs: f32) -> Option<f32> {
        self.since_tick += frame_secs.max(0.0);
        if self.since_tick < self.interval {
            return None;
        }
        let elapsed_millis = self.since_tick * 1000.0;
        self.since_tick %= self.interval;
        Some(elapsed_millis)
    }

    /// Time left until the next tick is due
    pub fn until_next(&self) -> Duration {
        Duration::from_secs_f32((self.interval - self.since_tick).max(0.0))
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(TARGET_FPS)
    }
}
